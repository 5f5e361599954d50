//! 影片總長度計算主流程
//!
//! 資料夾驗證 -> 選項 -> （選取影片）-> 計算 -> 輸出

use super::aggregator::calculate_video_length;
use super::formatter::DurationReport;
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::menu::{MenuOption, pick_videos, show_main_menu};
use crate::tools::{FfprobeProbe, MediaProbe, list_video_candidates, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::{info, warn};
use std::path::{Path, PathBuf};

pub struct VideoLengthCalculator<P: MediaProbe = FfprobeProbe> {
    config: Config,
    probe: P,
}

impl VideoLengthCalculator<FfprobeProbe> {
    pub fn new(config: Config) -> Self {
        let probe = FfprobeProbe::new(config.settings.ffprobe_path.clone());
        Self::with_probe(config, probe)
    }
}

impl<P: MediaProbe> VideoLengthCalculator<P> {
    pub const fn with_probe(config: Config, probe: P) -> Self {
        Self { config, probe }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", style("=== Video Length Calculator ===").cyan().bold());

        let folder = self.prompt_folder()?;
        if let Err(e) = validate_directory_exists(&folder) {
            warn!("{e}");
            println!(
                "{}",
                style("Error: The provided folder path does not exist.").red()
            );
            return Ok(());
        }

        let candidates = list_video_candidates(&folder)?;
        if candidates.is_empty() {
            info!("No supported videos in {}", folder.display());
            println!(
                "{}",
                style("Error: No supported video files found in the provided folder.").red()
            );
            return Ok(());
        }

        self.remember_folder(&folder);

        let selection = match show_main_menu()? {
            MenuOption::AllVideos => None,
            MenuOption::SelectedVideos => Some(pick_videos(&candidates)?),
        };

        let total_length = calculate_video_length(&folder, selection.as_deref(), &self.probe)?;
        self.print_report(&DurationReport::from_seconds(total_length));

        Ok(())
    }

    fn prompt_folder(&self) -> Result<PathBuf> {
        let mut input = Input::<String>::new().with_prompt("Enter the folder path");
        if let Some(last) = self.config.settings.last_path() {
            input = input.default(last.to_string());
        }

        let path = input.interact_text()?;
        Ok(PathBuf::from(path.trim()))
    }

    /// 儲存失敗不影響計算
    fn remember_folder(&mut self, folder: &Path) {
        add_recent_path(&mut self.config.settings, &folder.to_string_lossy());
        if let Err(e) = save_settings(&self.config.settings) {
            warn!("Failed to save settings: {e:#}");
        }
    }

    fn print_report(&self, report: &DurationReport) {
        println!("{}", style("Total video length:").green().bold());
        for line in report.report_lines() {
            println!("{line}");
        }
    }
}
