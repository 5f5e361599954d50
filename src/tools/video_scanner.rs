use crate::config::is_supported_video;
use anyhow::{Context, Result};
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// 列出資料夾第一層中支援的影片檔名（不遞迴），順序與目錄列舉相同
pub fn list_video_candidates(directory: &Path) -> Result<Vec<String>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry =
            entry.with_context(|| format!("Failed to list directory {}", directory.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            debug!("Skipping non UTF-8 file name: {}", entry.path().display());
            continue;
        };

        if is_supported_video(name) {
            candidates.push(name.to_string());
        }
    }

    debug!(
        "Found {} video candidates in {}",
        candidates.len(),
        directory.display()
    );
    Ok(candidates)
}
