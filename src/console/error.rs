//! Error types for the console input layer.

use thiserror::Error;

/// Failures the retry loops cannot recover from.
///
/// Bad answers never show up here; the prompts re-ask instead. What remains
/// is the terminal itself going away.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The input stream ended while a prompt was waiting for an answer.
    #[error("input closed while waiting for a response")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
