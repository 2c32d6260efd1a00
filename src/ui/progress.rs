//! Progress and status reporting

use crate::types::Direction;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while rsync runs
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} {elapsed}") {
            spinner.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        Self { spinner }
    }

    /// Mark start of the dry-run phase.
    pub fn start_check(&self, direction: Direction) {
        self.start(format!("Checking what would {}...", direction));
    }

    /// Mark start of the real transfer.
    pub fn start_transfer(&self, direction: Direction) {
        self.start(format!("Running {}...", direction));
    }

    /// Remove the spinner before normal output resumes.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    fn start(&self, message: String) {
        self.spinner.reset();
        self.spinner.set_message(message);
        self.spinner.enable_steady_tick(std::time::Duration::from_millis(120));
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Header printed before each group member
pub fn member_header(direction: Direction, member: &str) -> String {
    format!("{}", style(format!("-- {direction} for {member}...")).bold())
}

/// Final line when nothing needs transferring
pub fn up_to_date() -> String {
    format!("{}", style("Already up to date.").green())
}
