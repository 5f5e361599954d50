//! 影片資訊探測介面
//!
//! 開啟影片取得 handle，handle 在離開作用域時釋放

use anyhow::Result;
use std::path::Path;

pub trait MediaProbe {
    type Handle: ProbeHandle;

    /// 開啟影片，無法讀取時回傳錯誤
    fn open(&self, path: &Path) -> Result<Self::Handle>;
}

pub trait ProbeHandle {
    fn frame_count(&self) -> u64;

    /// 每秒幀數，未知時可能為 0
    fn frame_rate(&self) -> f64;

    /// 影片長度（秒），幀率非正數時為 0
    fn duration_seconds(&self) -> f64 {
        let rate = self.frame_rate();
        if rate > 0.0 {
            self.frame_count() as f64 / rate
        } else {
            0.0
        }
    }
}
