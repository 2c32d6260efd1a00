//! rsync invocation and output inspection

mod report;
mod runner;

pub use report::{DryRunReport, CHANGE_TOKENS, SUMMARY_MARKER};
pub use runner::{RsyncRunner, TransferRunner};

use crate::config::ProjectConfig;
use crate::types::Direction;
use std::fmt;

/// Program used when `CONCORD_RSYNC` is not set
pub const DEFAULT_PROGRAM: &str = "rsync";

/// A fully assembled transfer tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCommand {
    pub program: String,
    pub options: Vec<String>,
    pub dry_run: bool,
    pub source: String,
    pub destination: String,
}

impl TransferCommand {
    /// Command moving the project tree in `direction`
    ///
    /// The local side carries a trailing `/` so rsync copies the directory
    /// contents rather than the directory itself.
    pub fn new(
        program: impl Into<String>,
        direction: Direction,
        config: &ProjectConfig,
        options: Vec<String>,
    ) -> Self {
        let local = format!(
            "{}/",
            config.config_dir.display().to_string().trim_end_matches('/')
        );
        let remote = config.remote.clone();
        let (source, destination) = match direction {
            Direction::Push => (local, remote),
            Direction::Pull => (remote, local),
        };

        Self {
            program: program.into(),
            options,
            dry_run: false,
            source,
            destination,
        }
    }

    /// Same command with `--dry-run` toggled
    pub fn with_dry_run(&self, dry_run: bool) -> Self {
        Self {
            dry_run,
            ..self.clone()
        }
    }

    /// Arguments after the program name
    pub fn args(&self) -> Vec<String> {
        let mut args = self.options.clone();
        if self.dry_run {
            args.push("--dry-run".to_string());
        }
        args.push(self.source.clone());
        args.push(self.destination.clone());
        args
    }
}

impl fmt::Display for TransferCommand {
    /// Shell-pasteable rendering used for verbose echo
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_quote(&self.program))?;
        for arg in self.args() {
            write!(f, " {}", shell_quote(&arg))?;
        }
        Ok(())
    }
}

fn shell_quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@+,%".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
