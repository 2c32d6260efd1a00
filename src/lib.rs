//! # concord - push and pull project trees over rsync
//!
//! A project is anchored by a `.concord.json` file naming its remote.
//! Every transfer is dry-run first; the real run only happens after the
//! user confirms the pending changes.

// Module declarations
pub mod config;
pub mod options;
pub mod transfer;
pub mod ui;
pub mod commands;
pub mod types;

// Re-export commonly used types
pub use types::{ConcordError, Direction};
pub use config::ProjectConfig;
pub use commands::sync::{SyncOutcome, SyncRequest, Syncer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
