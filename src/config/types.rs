use serde::{Deserialize, Serialize};

/// 支援的影片副檔名（大小寫需完全相符）
pub const SUPPORTED_VIDEO_EXTENSIONS: [&str; 4] = [".mkv", ".mp4", ".avi", ".mov"];

pub const MAX_RECENT_PATHS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub ffprobe_path: String,
    pub recent_paths: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            ffprobe_path: "ffprobe".to_string(),
            recent_paths: Vec::new(),
        }
    }
}

impl UserSettings {
    #[must_use]
    pub fn last_path(&self) -> Option<&str> {
        self.recent_paths.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: UserSettings,
}

/// 檔名是否以支援的副檔名結尾
#[must_use]
pub fn is_supported_video(file_name: &str) -> bool {
    SUPPORTED_VIDEO_EXTENSIONS
        .iter()
        .any(|ext| file_name.ends_with(ext))
}
