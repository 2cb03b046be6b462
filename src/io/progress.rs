//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Per-file rendering state shown in the rolling window
#[derive(Debug, Clone, Default)]
struct FileState {
    name: String,
    written: usize,
    outputs: usize,
}

/// Coordinates progress display for batch runs
///
/// Small batches get one bar per file counting written outputs; larger ones
/// add a single batch bar and show only the most recent files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    files: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Lay out bars for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        // Batch mode keeps large runs from flooding the terminal
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Register file `index` which will write `outputs` images
    pub fn start_file(&mut self, index: usize, path: &Path, outputs: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.files.len() {
            self.files.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.files.get_mut(index) {
            *state = FileState {
                name,
                written: 0,
                outputs,
            };
        }
        self.update_bars();
    }

    /// Count one more output written for file `index`
    pub fn output_written(&mut self, index: usize) {
        if let Some(state) = self.files.get_mut(index) {
            state.written = (state.written + 1).min(state.outputs);
        }
        self.update_bars();
    }

    /// Mark file `index` as done
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.files.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.written = state.outputs;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    // Shows the last files started, oldest at the top
    fn update_bars(&self) {
        let active: Vec<&FileState> = self.files.iter().filter(|s| !s.name.is_empty()).collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, state) in self.file_bars.iter().zip(visible) {
            bar.set_length(state.outputs as u64);
            bar.set_position(state.written as u64);
            bar.set_message(format!("{}/{}", state.written, state.outputs));
            bar.set_prefix(state.name.clone());
        }

        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
