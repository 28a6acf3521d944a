//! Pure data types: the menu catalog, money, and the order being built.

pub mod error;
pub mod menu;
pub mod money;
pub mod order;

pub use error::*;
pub use menu::*;
pub use money::*;
pub use order::*;
