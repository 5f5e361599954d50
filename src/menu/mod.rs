mod main_menu;
mod video_picker;

pub use main_menu::{MenuOption, parse_menu_option, show_main_menu};
pub use video_picker::pick_videos;
