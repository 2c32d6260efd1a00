//! Core type definitions for concord

mod direction;
mod error;

pub use direction::Direction;
pub use error::ConcordError;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, ConcordError>;
