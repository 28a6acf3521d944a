//! Vendor settings.
//!
//! The catalog and vendor name are compiled in; there are no flags or config
//! files. Logging is the only thing tuned at runtime (`RUST_LOG`, see
//! [`setup_tracing`](crate::lifecycle::setup_tracing)).

use crate::model::Menu;
use serde::Serialize;

/// Who is selling and what is on offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorConfig {
    pub name: String,
    pub menu: Menu,
}

impl VendorConfig {
    pub fn new(name: impl Into<String>, menu: Menu) -> Self {
        Self {
            name: name.into(),
            menu,
        }
    }

    /// First line of the main menu, e.g. `WELCOME TO QUICKBITE ORDERING SYSTEM!`.
    pub fn welcome_banner(&self) -> String {
        format!("WELCOME TO {} ORDERING SYSTEM!", self.name.to_uppercase())
    }

    /// Heading printed at the top of every receipt.
    pub fn receipt_title(&self) -> String {
        format!("{} ORDER RECEIPT", self.name.to_uppercase())
    }
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self::new("QuickBite", Menu::quickbite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vendor_headings() {
        let config = VendorConfig::default();
        assert_eq!(config.welcome_banner(), "WELCOME TO QUICKBITE ORDERING SYSTEM!");
        assert_eq!(config.receipt_title(), "QUICKBITE ORDER RECEIPT");
        assert_eq!(config.menu.len(), 5);
    }
}
