//! Itemised receipts.
//!
//! A [`Receipt`] is computed from an [`Order`] and the [`Menu`] it was built
//! against, printed once, and thrown away. Nothing about it is stored.
//!
//! Amounts are [`Money`] values in pence, so the total is exactly the sum of
//! `price × quantity` over every line, to the penny.

use crate::console::{Console, InputSource};
use crate::lifecycle::SessionError;
use crate::model::{Menu, Money, Order, OrderError, Quantity};
use chrono::NaiveDateTime;
use std::io::Write;
use tracing::{info, instrument};

const RECEIPT_WIDTH: usize = 60;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const NO_ITEMS_ORDERED: &str = "NO ITEMS ORDERED.";

/// One priced line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: Quantity,
    pub unit_price: Money,
    pub line_total: Money,
}

/// A priced snapshot of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    issued_at: NaiveDateTime,
    lines: Vec<ReceiptLine>,
    total: Money,
}

impl Receipt {
    /// Prices every line of `order` against `menu`, in the order's line order.
    ///
    /// # Errors
    /// - [`OrderError::UnknownItem`] if a line has no catalog entry
    /// - [`OrderError::PriceOverflow`] if a line total or the running total overflows
    pub fn compute(order: &Order, menu: &Menu, issued_at: NaiveDateTime) -> Result<Self, OrderError> {
        let mut lines = Vec::with_capacity(order.len());
        let mut total = Money::ZERO;

        for (name, quantity) in order.iter() {
            let unit_price = menu
                .price_of(name)
                .ok_or_else(|| OrderError::UnknownItem(name.to_string()))?;
            let overflow = || OrderError::PriceOverflow {
                item: name.to_string(),
            };
            let line_total = unit_price.checked_mul(quantity.get()).ok_or_else(overflow)?;
            total = total.checked_add(line_total).ok_or_else(overflow)?;

            lines.push(ReceiptLine {
                name: name.to_string(),
                quantity,
                unit_price,
                line_total,
            });
        }

        Ok(Self {
            issued_at,
            lines,
            total,
        })
    }

    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn issued_at(&self) -> NaiveDateTime {
        self.issued_at
    }

    /// Formats the receipt under a centred `title`.
    pub fn render(&self, title: &str) -> String {
        let rule = "=".repeat(RECEIPT_WIDTH);
        let mut out = vec![
            rule.clone(),
            format!("{:^width$}", title, width = RECEIPT_WIDTH),
            format!("Date: {}", self.issued_at.format(DATE_FORMAT)),
            rule.clone(),
        ];
        out.extend(self.lines.iter().map(|line| {
            format!(
                "{}: {} x {} = {}",
                line.name, line.quantity, line.unit_price, line.line_total
            )
        }));
        out.push(rule.clone());
        out.push(format!("Total Due: {}", self.total));
        out.push(rule);
        out.join("\n")
    }
}

/// Prints the receipt for `order`, or the empty-order notice.
///
/// Returns the receipt that was printed so the caller can log or inspect it;
/// `None` means the order was empty and no total was computed.
#[instrument(skip_all, fields(lines = order.len()))]
pub fn render_receipt<I: InputSource, W: Write>(
    console: &mut Console<I, W>,
    order: &Order,
    menu: &Menu,
    title: &str,
    issued_at: NaiveDateTime,
) -> Result<Option<Receipt>, SessionError> {
    if order.is_empty() {
        console.say(NO_ITEMS_ORDERED)?;
        return Ok(None);
    }

    let receipt = Receipt::compute(order, menu, issued_at)?;
    console.say(receipt.render(title))?;
    info!(total = %receipt.total(), "Receipt printed");
    Ok(Some(receipt))
}
