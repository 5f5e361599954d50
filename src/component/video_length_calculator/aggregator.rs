//! 影片總長度計算
//!
//! 依目錄列舉順序逐一探測影片並累加長度

use crate::tools::{MediaProbe, ProbeHandle, list_video_candidates};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;

/// 計算資料夾中影片的總長度（秒）
///
/// # Arguments
/// * `folder` - 影片資料夾
/// * `selection` - 要計算的檔名，`None` 表示全部；同一檔名出現幾次就計算幾次
/// * `probe` - 影片資訊探測器
///
/// # Returns
/// 總長度（秒）。無法開啟或幀率非正數的影片以 0 計算
pub fn calculate_video_length<P: MediaProbe>(
    folder: &Path,
    selection: Option<&[String]>,
    probe: &P,
) -> Result<f64> {
    let candidates = list_video_candidates(folder)?;
    let multiplicity = selection.map(count_selected);

    let targets: Vec<(String, usize)> = candidates
        .into_iter()
        .filter_map(|name| {
            let times = match &multiplicity {
                Some(counts) => counts.get(name.as_str()).copied()?,
                None => 1,
            };
            Some((name, times))
        })
        .collect();

    let progress_bar = create_progress_bar(targets.len() as u64);
    let mut total_length = 0.0;
    let mut skipped = 0usize;

    for (name, times) in &targets {
        progress_bar.set_message(name.clone());

        match probe_length(probe, &folder.join(name)) {
            Ok(length) => {
                debug!("{name}: {length:.3}s x{times}");
                total_length += length * *times as f64;
            }
            Err(e) => {
                skipped += 1;
                debug!("Failed to open {name}: {e:#}");
                progress_bar.suspend(|| {
                    println!("Error: Could not open video file {name}. Skipping.");
                });
            }
        }

        progress_bar.inc(1);
    }

    progress_bar.finish_and_clear();

    if skipped > 0 {
        warn!("{skipped} video(s) could not be opened and were counted as 0s");
    }
    info!(
        "Calculated {total_length:.2}s over {} video(s) in {}",
        targets.len(),
        folder.display()
    );

    Ok(total_length)
}

/// handle 在函式結束時釋放
fn probe_length<P: MediaProbe>(probe: &P, path: &Path) -> Result<f64> {
    let handle = probe.open(path)?;
    Ok(handle.duration_seconds())
}

fn count_selected(selection: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for name in selection {
        *counts.entry(name.as_str()).or_insert(0) += 1;
    }
    counts
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let progress_bar = ProgressBar::new(len);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    progress_bar
}
