//! Error type for a whole ordering session.

use crate::console::ConsoleError;
use crate::model::OrderError;
use thiserror::Error;

/// Everything that can end a session early.
///
/// Customer mistakes are retried where they happen and never reach this
/// type. What does reach it is reported once, at the top of `main`.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The terminal went away (closed input or an I/O failure).
    #[error(transparent)]
    Console(#[from] ConsoleError),

    /// The order could not be updated or priced.
    #[error(transparent)]
    Order(#[from] OrderError),
}
