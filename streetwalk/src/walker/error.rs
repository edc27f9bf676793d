//! Walker error types.

use thiserror::Error;

/// Errors raised by walker commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkerError {
    /// The command string does not name a known direction.
    #[error("Unknown direction '{0}' (expected up, down, left or right)")]
    UnknownDirection(String),
}
