pub mod load;
pub mod save;
pub mod types;

pub use types::{
    Config, MAX_RECENT_PATHS, SUPPORTED_VIDEO_EXTENSIONS, UserSettings, is_supported_video,
};
