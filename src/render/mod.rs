//! Text output: the menu table and the receipt.

pub mod menu_table;
pub mod receipt;

pub use menu_table::*;
pub use receipt::*;
