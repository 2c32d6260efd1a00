//! Error types for concord

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Error types for concord operations
#[derive(Debug, Error)]
pub enum ConcordError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No `.concord.json` between the starting directory and home
    #[error("No {file} file found up till {}", .home.display())]
    ConfigNotFound { file: &'static str, home: PathBuf },

    /// Config file present but unusable
    #[error("Invalid config file {}: {reason}", .path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    /// Transfer program exited non-zero
    #[error("{program} failed ({status})\n{output}")]
    TransferTool {
        program: String,
        status: ExitStatus,
        output: String,
    },

    /// Transfer program could not be started at all
    #[error("Could not run {program}: {source}")]
    TransferSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Confirmation prompt failed
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// One or more group members failed
    #[error("Group sync incomplete, failed members: {}", .failed.join(", "))]
    GroupIncomplete { failed: Vec<String> },
}

impl ConcordError {
    /// Check if this error comes from config discovery or parsing
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ConcordError::ConfigNotFound { .. } | ConcordError::ConfigInvalid { .. }
        )
    }

    /// Captured transfer output, if the error carries any
    pub fn output(&self) -> Option<&str> {
        match self {
            ConcordError::TransferTool { output, .. } => Some(output),
            _ => None,
        }
    }
}
