//! # QuickBite
//!
//! > **A terminal ordering counter for a single food vendor.**
//!
//! The customer picks items from a numbered menu, reviews the order, and gets an
//! itemised, timestamped receipt. Everything happens in one synchronous loop over
//! stdin/stdout; nothing is stored between runs.
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. Explicit catalog
//! The [`Menu`](model::Menu) is built once (from [`VendorConfig`](config::VendorConfig))
//! and passed as `&Menu` to every component. There is no global state.
//!
//! ### 2. Retry loops over an injected input source
//! Every prompt reads through the [`InputSource`](console::InputSource) trait.
//! The binary uses stdin; tests use [`ScriptedInput`](console::mock::ScriptedInput)
//! to drive whole sessions from a list of answers.
//!
//! ### 3. One error boundary
//! Bad answers are retried where they happen. Anything else (closed input,
//! I/O failure, price overflow) propagates as a
//! [`SessionError`](lifecycle::SessionError) to `main`, which reports it and exits
//! non-zero.
//!
//! ### 4. Ordered orders
//! [`Order`](model::Order) keeps lines in insertion order, so receipts list items in
//! the order they were first added.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - Menu items, money in pence, quantities and the order itself
//! - [`console`] - Choice, text and integer prompts with retry
//! - [`ordering`] - The order builder and the review/modify editor
//! - [`render`] - The menu table and the receipt
//! - [`lifecycle`] - The main-menu state machine, errors and tracing setup
//! - [`config`] - Vendor name and catalog
//!
//! ## 🚀 Running
//!
//! ```bash
//! cargo run
//!
//! # With diagnostics on stderr
//! RUST_LOG=debug cargo run
//! ```

pub mod config;
pub mod console;
pub mod lifecycle;
pub mod model;
pub mod ordering;
pub mod render;
