//! Session orchestration and runtime setup.
//!
//! - [`Session`] - The main-menu state machine that drives one customer visit
//! - [`setup_tracing`] - Initializes logging for the binary
//! - [`SessionError`] - The single error type surfaced to `main`

pub mod error;
pub mod session;
pub mod tracing;

pub use error::*;
pub use session::*;
pub use self::tracing::setup_tracing;
