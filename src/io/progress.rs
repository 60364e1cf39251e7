//! Progress display for the solvability enumeration and log routing around it

use crate::io::configuration::{PROGRESS_BAR_WIDTH, SEED_COUNT};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{LevelFilter, Log, Metadata, Record};
use std::sync::LazyLock;

static PAIR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Pairs: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates the progress bar and log output of one command
///
/// Log lines printed while a bar is visible go through the same
/// [`MultiProgress`] so the bar is redrawn below them.
#[derive(Clone)]
pub struct ProgressManager {
    multi_progress: MultiProgress,
    pair_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            pair_bar: None,
        }
    }

    /// Shared display used by the console logger
    pub const fn multi_progress(&self) -> &MultiProgress {
        &self.multi_progress
    }

    /// Show a bar over all seed pairs
    pub fn start_pairs(&mut self) {
        let bar = ProgressBar::new((SEED_COUNT * SEED_COUNT) as u64);
        bar.set_style(PAIR_STYLE.clone());
        self.pair_bar = Some(self.multi_progress.add(bar));
    }

    /// Advance the pair bar by one
    pub fn complete_pair(&self) {
        if let Some(ref bar) = self.pair_bar {
            bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.pair_bar {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}

/// Map a `-v` count to a level; `quiet` keeps errors only
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// `log` backend writing to stderr through a [`MultiProgress`]
pub struct ConsoleLogger {
    level: LevelFilter,
    multi_progress: MultiProgress,
}

impl ConsoleLogger {
    /// Logger printing records at or above `level`
    pub const fn new(level: LevelFilter, multi_progress: MultiProgress) -> Self {
        Self {
            level,
            multi_progress,
        }
    }

    /// Install as the global logger
    ///
    /// Returns `false` if a logger was already installed.
    pub fn install(self) -> bool {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))
            .map(|()| log::set_max_level(level))
            .is_ok()
    }

    fn format(record: &Record<'_>) -> String {
        format!("[{:<5}] {}", record.level(), record.args())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format(record);
        if self.multi_progress.is_hidden() {
            // Allow print when no progress bar owns the terminal
            #[allow(clippy::print_stderr)]
            {
                eprintln!("{line}");
            }
        } else {
            let _ = self.multi_progress.println(line);
        }
    }

    fn flush(&self) {}
}
