//! Command-line surface

use crate::types::Direction;
use clap::{Args, Parser, Subcommand};

/// Push or pull a project tree over rsync, dry-run first
#[derive(Debug, Parser)]
#[command(name = "concord", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// Send the local tree to the configured remote
    Push(SyncArgs),

    /// Fetch the remote into the local tree
    Pull(SyncArgs),
}

impl Command {
    pub fn direction(&self) -> Direction {
        match self {
            Command::Push(_) => Direction::Push,
            Command::Pull(_) => Direction::Pull,
        }
    }

    pub fn args(&self) -> SyncArgs {
        match self {
            Command::Push(args) | Command::Pull(args) => *args,
        }
    }
}

/// Flags shared by push and pull
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct SyncArgs {
    /// Sync every member of the configured group
    #[arg(short, long)]
    pub group: bool,

    /// Only report pending changes, never prompt or transfer
    #[arg(short, long)]
    pub check: bool,

    /// Echo the rsync command before running it
    #[arg(short, long)]
    pub verbose: bool,
}
