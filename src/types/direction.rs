//! Transfer direction

use std::fmt;

/// Which way files flow between the project tree and the remote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Local tree -> remote
    Push,

    /// Remote -> local tree
    Pull,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Push => "push",
            Direction::Pull => "pull",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
