//! 影片總長度計算元件
//!
//! 選取影片、探測長度並以多種單位輸出總長度

mod aggregator;
mod formatter;
mod main;
mod selector;

pub use aggregator::calculate_video_length;
pub use formatter::DurationReport;
pub use main::VideoLengthCalculator;
pub use selector::parse_selection;
