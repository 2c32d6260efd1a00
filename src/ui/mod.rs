//! Terminal interaction

mod progress;
pub mod prompt;

pub use progress::{member_header, up_to_date, ProgressReporter};
pub use prompt::{Answer, Confirmer, TerminalConfirm};
