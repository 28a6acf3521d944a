//! # Observability & Tracing
//!
//! Structured diagnostics for the ordering session, written with the
//! `tracing` crate and printed by `tracing-subscriber`.
//!
//! ## Configuration
//!
//! Log output goes to **stderr** so it never mixes with the prompts and
//! receipts on stdout. Verbosity is controlled through `RUST_LOG`; when it is
//! unset only errors are shown.
//!
//! ```bash
//! # Item and receipt events
//! RUST_LOG=info cargo run
//!
//! # Also show state transitions and rejected answers
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Session**: state transitions and the final outcome
//! - **Order edits**: items added, updated, and removed
//! - **Input**: rejected choices and integers (debug)
//! - **Receipts**: the total of every printed receipt
//!
//! With `RUST_LOG=debug` a short session looks like:
//!
//! ```text
//! DEBUG State transition from=MainMenu to=Ordering
//! INFO build_order: Item added item="Pizza" quantity=2
//! DEBUG review_order: Rejected choice response="change"
//! INFO render_receipt{lines=1}: Receipt printed total=£20.00
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
