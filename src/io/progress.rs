//! Progress display while tiles are cut from the source image

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} tiles"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks tile extraction for a single image
///
/// The bar is hidden until [`start`](Self::start) is called, so a manager can be
/// handed to the rearrangement unconditionally.
pub struct ProgressManager {
    bar: ProgressBar,
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
            bar: ProgressBar::hidden(),
        }
    }

    /// Show a bar for `tile_count` tiles of the image at `path`
    pub fn start(&mut self, path: &Path, tile_count: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        self.bar = ProgressBar::new(tile_count as u64);
        self.bar.set_style(TILE_STYLE.clone());
        self.bar.set_prefix(display_name);
    }

    /// Record one extracted tile
    pub fn tile_extracted(&self) {
        self.bar.inc(1);
    }

    /// Number of tiles recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
