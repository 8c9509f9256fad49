//! Solve progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SOLVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Cells: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking how many cells have left the entropy queue
///
/// Hidden entirely in quiet mode; all methods stay callable either way.
pub struct SolveProgress {
    bar: ProgressBar,
}

impl SolveProgress {
    /// Create a bar over the total cell count
    pub fn new(total_cells: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total_cells as u64)
        };
        bar.set_style(SOLVE_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Update the position from the solver's remaining-queue length
    pub fn update(&self, total_cells: usize, remaining: usize) {
        self.bar
            .set_position(total_cells.saturating_sub(remaining) as u64);
    }

    /// Print a line above the bar without disturbing it
    pub fn summary(&self, line: &str) {
        self.bar.println(line);
    }

    /// Complete and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
