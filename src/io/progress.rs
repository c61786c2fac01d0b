//! Batch progress display for directory and mask processing

use std::path::Path;
use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::io::configuration::MIN_DIRECTORIES_FOR_BATCH_BAR;

static MASK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} masks")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Directories: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch runs
///
/// Shows one bar per directory counting its masks, plus a batch bar across
/// directories when more than one is processed.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    directory_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            directory_bar: None,
        }
    }

    /// Initialize the batch bar based on directory count
    pub fn initialize(&mut self, directory_count: usize) {
        if directory_count >= MIN_DIRECTORIES_FOR_BATCH_BAR {
            let batch_bar = ProgressBar::new(directory_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Start a bar for a new directory with the given mask count
    pub fn start_directory(&mut self, path: &Path, mask_count: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let bar = ProgressBar::new(mask_count as u64);
        bar.set_style(MASK_STYLE.clone());
        bar.set_message(display_name);
        self.directory_bar = Some(self.multi_progress.add(bar));
    }

    /// Count one processed mask in the current directory
    pub fn mask_done(&self) {
        if let Some(ref bar) = self.directory_bar {
            bar.inc(1);
        }
    }

    /// Close the current directory bar and update batch progress
    pub fn complete_directory(&mut self) {
        if let Some(bar) = self.directory_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish();
        }
        let _ = self.multi_progress.clear();
    }
}
