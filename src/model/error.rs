//! Error types for the catalog and order model.

use thiserror::Error;

/// Errors that can occur while building or editing an order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The quantity is below 1 (or too large to represent).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Adding to an existing line would overflow its quantity.
    #[error("Quantity overflow for item: {item}")]
    QuantityOverflow { item: String },

    /// The item is not part of the current order.
    #[error("Item not in order: {0}")]
    NotInOrder(String),

    /// The item has no entry in the menu catalog.
    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    /// A line total or the order total does not fit in the money type.
    #[error("Price overflow while totalling item: {item}")]
    PriceOverflow { item: String },
}

/// Errors that can occur while constructing a menu catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuError {
    /// A catalog needs at least one item.
    #[error("Menu has no items")]
    Empty,

    /// Item names must be unique within a catalog.
    #[error("Duplicate menu item: {0}")]
    DuplicateItem(String),
}
