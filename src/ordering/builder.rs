use crate::console::{Console, InputSource};
use crate::lifecycle::SessionError;
use crate::model::{Menu, Order, OrderError, Quantity};
use crate::render::menu_table;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Typed at the item prompt to stop adding items.
pub const EXIT_SENTINEL: &str = "e";

pub const QUANTITY_TOO_LOW: &str = "INVALID INPUT. QUANTITY MUST BE AT LEAST 1.";
pub const QUANTITY_TOO_LARGE: &str = "INVALID INPUT. QUANTITY IS TOO LARGE.";

const SELECT_PROMPT: &str = "Enter the number of the item to order, or 'e' to exit: ";

/// Picks the message shown for a quantity that [`Quantity::new`] refused.
pub(crate) fn quantity_rejection(raw: i64) -> &'static str {
    if raw < 1 {
        QUANTITY_TOO_LOW
    } else {
        QUANTITY_TOO_LARGE
    }
}

/// Collects items into a fresh order until the customer types `e`.
///
/// A quantity below 1, or one that would push the line past the largest
/// quantity, discards the whole selection and asks for an item number again;
/// the order is never touched by a rejected quantity.
/// The returned order may be empty.
#[instrument(skip_all)]
pub fn build_order<I: InputSource, W: Write>(
    console: &mut Console<I, W>,
    menu: &Menu,
) -> Result<Order, SessionError> {
    let mut order = Order::new();
    console.say(menu_table(menu))?;

    let mut options = menu.choice_keys();
    options.push(EXIT_SENTINEL.to_string());

    loop {
        let choice = console.prompt_choice(SELECT_PROMPT, &options)?;
        if choice == EXIT_SENTINEL {
            break;
        }
        let Some(item) = menu.item_by_choice(&choice) else {
            continue;
        };

        let raw = console.prompt_integer(&format!("Enter quantity for {}: ", item.name))?;
        let quantity = match Quantity::new(raw) {
            Ok(quantity) => quantity,
            Err(e) => {
                debug!(error = %e, "Rejected quantity");
                console.say(quantity_rejection(raw))?;
                continue;
            }
        };

        match order.add(item, quantity) {
            Ok(total) => info!(item = %item.name, %quantity, %total, "Item added"),
            Err(e @ OrderError::QuantityOverflow { .. }) => {
                debug!(error = %e, "Rejected quantity");
                console.say(QUANTITY_TOO_LARGE)?;
                continue;
            }
            Err(e) => return Err(e.into()),
        }
        console.say(format!("✔️  Added {} x {} to your order.", quantity, item.name))?;
    }

    debug!(lines = order.len(), "Order collected");
    Ok(order)
}
