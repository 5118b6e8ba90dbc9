//! Per-stream slot placement progress

use crate::generation::PageStream;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates one progress bar per page stream
///
/// Bars count placed slots, so a stream spanning several pages shows a
/// single continuous bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    stream_bars: Vec<(PageStream, ProgressBar)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>7} [{bar:30.cyan/blue}] {pos}/{len} slots")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            stream_bars: Vec::new(),
        }
    }

    /// Add a bar for `stream` expecting `slots` placements
    pub fn start_stream(&mut self, stream: PageStream, slots: usize) {
        let bar = ProgressBar::new(slots as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(stream.to_string());
        self.stream_bars
            .push((stream, self.multi_progress.add(bar)));
    }

    /// Advance the bar of `stream` by one slot
    pub fn slot_placed(&self, stream: PageStream) {
        if let Some(bar) = self.bar(stream) {
            bar.inc(1);
        }
    }

    /// Slots placed so far for `stream`, if it has started
    pub fn placed(&self, stream: PageStream) -> Option<u64> {
        self.bar(stream).map(ProgressBar::position)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        for (_, bar) in &self.stream_bars {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }

    fn bar(&self, stream: PageStream) -> Option<&ProgressBar> {
        self.stream_bars
            .iter()
            .find(|(candidate, _)| *candidate == stream)
            .map(|(_, bar)| bar)
    }
}
