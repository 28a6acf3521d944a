//! The "place your order" workflow.
//!
//! An order goes through two interactive steps before it is priced:
//!
//! 1. [`build_order`] collects items from the menu by number.
//! 2. [`review_order`] lets the customer modify, remove, or add items.
//!
//! The two steps treat quantities differently on purpose. Adding an item that
//! is already in the order **increments** its line; modifying a line
//! **replaces** its quantity.

pub mod builder;
pub mod editor;

pub use builder::*;
pub use editor::*;
