//! The customer's in-progress order.
//!
//! An [`Order`] maps item names to [`Quantity`] values. Two invariants hold for
//! every `Order` value:
//!
//! 1. **No empty lines.** Every quantity is at least 1. Setting a line to zero
//!    removes the entry instead of storing it.
//! 2. **Insertion order.** Iteration yields lines in the order they were first
//!    added. Replacing a quantity keeps the line where it is; removing a line
//!    and adding it again moves it to the end.
//!
//! The second invariant is what makes receipt output deterministic, which is
//! why the backing store is an [`IndexMap`] rather than a `HashMap`.

use crate::model::{MenuItem, OrderError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A validated line quantity (always ≥ 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Validates a raw quantity typed by the customer.
    ///
    /// # Errors
    /// [`OrderError::InvalidQuantity`] if `raw` is below 1 or does not fit in a `u32`.
    pub fn new(raw: i64) -> Result<Self, OrderError> {
        if raw < 1 {
            return Err(OrderError::InvalidQuantity(raw));
        }
        u32::try_from(raw)
            .map(Self)
            .map_err(|_| OrderError::InvalidQuantity(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = OrderError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Outcome of [`Order::modify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modification {
    /// The line was dropped from the order.
    Removed,
    /// The line now holds this quantity.
    Updated(Quantity),
}

/// Item name → quantity, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    lines: IndexMap<String, Quantity>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lines.contains_key(name)
    }

    pub fn quantity(&self, name: &str) -> Option<Quantity> {
        self.lines.get(name).copied()
    }

    /// Lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        self.lines.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Adds `quantity` of a menu item, incrementing an existing line.
    ///
    /// Taking a [`MenuItem`] rather than a bare name is what keeps every key a
    /// valid catalog name. Returns the line's new quantity.
    ///
    /// # Errors
    /// [`OrderError::QuantityOverflow`] if the incremented quantity does not fit.
    pub fn add(&mut self, item: &MenuItem, quantity: Quantity) -> Result<Quantity, OrderError> {
        match self.lines.get_mut(&item.name) {
            Some(existing) => {
                *existing = existing
                    .checked_add(quantity)
                    .ok_or_else(|| OrderError::QuantityOverflow {
                        item: item.name.clone(),
                    })?;
                Ok(*existing)
            }
            None => {
                self.lines.insert(item.name.clone(), quantity);
                Ok(quantity)
            }
        }
    }

    /// Replaces the quantity of a line already in the order.
    ///
    /// Unlike [`Order::add`] this does not increment. Returns the previous quantity.
    pub fn replace(&mut self, name: &str, quantity: Quantity) -> Result<Quantity, OrderError> {
        let line = self
            .lines
            .get_mut(name)
            .ok_or_else(|| OrderError::NotInOrder(name.to_string()))?;
        Ok(std::mem::replace(line, quantity))
    }

    /// Removes a line, keeping the relative order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Quantity> {
        self.lines.shift_remove(name)
    }

    /// Applies a customer's "new quantity" for an existing line.
    ///
    /// `0` removes the line, a positive value replaces it, anything else is
    /// rejected and leaves the order untouched.
    pub fn modify(&mut self, name: &str, raw: i64) -> Result<Modification, OrderError> {
        if !self.contains(name) {
            return Err(OrderError::NotInOrder(name.to_string()));
        }
        if raw == 0 {
            self.remove(name);
            return Ok(Modification::Removed);
        }
        let quantity = Quantity::new(raw)?;
        self.replace(name, quantity)?;
        Ok(Modification::Updated(quantity))
    }
}
