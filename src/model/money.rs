use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The only currency the vendor trades in.
pub const CURRENCY_SYMBOL: &str = "£";

/// A non-negative amount of money, stored in pence.
///
/// Keeping the amount as an integer number of minor units means every line
/// total and order total is exact to two decimal places. Arithmetic is checked;
/// callers decide what an overflow means for them.
///
/// `Display` renders the currency symbol and honours width/alignment flags,
/// so `format!("{:>7}", price)` right-aligns `£10.00` in a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates an amount from a number of pence.
    pub const fn from_pence(pence: u64) -> Self {
        Self(pence)
    }

    /// Creates an amount from whole pounds and remaining pence.
    ///
    /// `pence` must be below 100; debug builds panic otherwise.
    pub const fn from_parts(pounds: u64, pence: u64) -> Self {
        debug_assert!(pence < 100, "pence must be below 100");
        Self(pounds * 100 + pence)
    }

    pub const fn pence(self) -> u64 {
        self.0
    }

    /// Multiplies a unit price by a quantity.
    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(quantity)).map(Money)
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{}{}.{:02}", CURRENCY_SYMBOL, self.0 / 100, self.0 % 100);
        f.pad(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_always_has_two_decimals() {
        assert_eq!(Money::from_pence(1000).to_string(), "£10.00");
        assert_eq!(Money::from_pence(145).to_string(), "£1.45");
        assert_eq!(Money::from_pence(5).to_string(), "£0.05");
        assert_eq!(Money::ZERO.to_string(), "£0.00");
    }

    #[test]
    fn test_display_honours_alignment() {
        assert_eq!(format!("{:>7}", Money::from_parts(1, 99)), "  £1.99");
        assert_eq!(format!("{:<7}|", Money::from_parts(10, 0)), "£10.00 |");
    }

    #[test]
    fn test_checked_arithmetic() {
        let price = Money::from_parts(5, 35);
        assert_eq!(price.checked_mul(3), Some(Money::from_pence(1605)));
        assert_eq!(Money::from_pence(u64::MAX).checked_mul(2), None);
        assert_eq!(Money::from_pence(u64::MAX).checked_add(Money::from_pence(1)), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "pence must be below 100")]
    fn test_from_parts_rejects_whole_pounds_in_pence() {
        let _ = Money::from_parts(1, 150);
    }
}
