//! The vendor's menu catalog.
//!
//! A [`Menu`] is built once at startup and only ever borrowed afterwards:
//! every component that needs prices or item names takes a `&Menu`.
//!
//! Items are addressed two ways:
//! - by their 1-based position, which is what the customer types at a prompt
//! - by their exact name, which is what an [`Order`](crate::model::Order) is keyed by

use crate::model::{MenuError, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Money,
}

impl MenuItem {
    /// Creates a new MenuItem instance.
    ///
    /// # Arguments
    /// * `name` - Display name, unique within a catalog
    /// * `price` - Unit price
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// An ordered, read-only list of [`MenuItem`]s with unique names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Builds a catalog, rejecting empty lists and duplicate names.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        if items.is_empty() {
            return Err(MenuError::Empty);
        }
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                return Err(MenuError::DuplicateItem(item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    /// The QuickBite house menu.
    pub fn quickbite() -> Self {
        Self {
            items: vec![
                MenuItem::new("Pizza", Money::from_parts(10, 0)),
                MenuItem::new("Fish", Money::from_parts(5, 35)),
                MenuItem::new("Salad", Money::from_parts(3, 40)),
                MenuItem::new("Chips", Money::from_parts(1, 45)),
                MenuItem::new("Drink", Money::from_parts(1, 99)),
            ],
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by its 1-based menu number.
    pub fn get(&self, number: usize) -> Option<&MenuItem> {
        number.checked_sub(1).and_then(|index| self.items.get(index))
    }

    /// Looks up an item by exact name.
    pub fn item_named(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.item_named(name).map(|item| item.price)
    }

    /// The responses accepted when asking for an item number: `"1"..="N"`.
    pub fn choice_keys(&self) -> Vec<String> {
        (1..=self.items.len()).map(|n| n.to_string()).collect()
    }

    /// Resolves a prompt response (one of [`Menu::choice_keys`]) to its item.
    pub fn item_by_choice(&self, choice: &str) -> Option<&MenuItem> {
        choice.parse::<usize>().ok().and_then(|n| self.get(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_menu_order_and_prices() {
        let menu = Menu::quickbite();
        let names: Vec<&str> = menu.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Pizza", "Fish", "Salad", "Chips", "Drink"]);
        assert_eq!(menu.price_of("Chips"), Some(Money::from_pence(145)));
        assert_eq!(menu.price_of("Burger"), None);
    }

    #[test]
    fn test_one_based_lookup() {
        let menu = Menu::quickbite();
        assert_eq!(menu.get(0), None);
        assert_eq!(menu.get(1).map(|i| i.name.as_str()), Some("Pizza"));
        assert_eq!(menu.get(5).map(|i| i.name.as_str()), Some("Drink"));
        assert_eq!(menu.get(6), None);
    }

    #[test]
    fn test_choice_keys_match_lookup() {
        let menu = Menu::quickbite();
        assert_eq!(menu.choice_keys(), ["1", "2", "3", "4", "5"]);
        assert_eq!(menu.item_by_choice("2").map(|i| i.name.as_str()), Some("Fish"));
        assert!(menu.item_by_choice("e").is_none());
        assert!(menu.item_by_choice("0").is_none());
    }

    #[test]
    fn test_new_rejects_invalid_catalogs() {
        assert_eq!(Menu::new(vec![]), Err(MenuError::Empty));

        let dup = vec![
            MenuItem::new("Pizza", Money::from_pence(1000)),
            MenuItem::new("Pizza", Money::from_pence(900)),
        ];
        assert_eq!(Menu::new(dup), Err(MenuError::DuplicateItem("Pizza".into())));
    }
}
