mod ffprobe_info;
mod media_probe;
mod path_validator;
mod video_scanner;

pub use ffprobe_info::{FfprobeProbe, VideoInfo};
pub use media_probe::{MediaProbe, ProbeHandle};
pub use path_validator::validate_directory_exists;
pub use video_scanner::list_video_candidates;
