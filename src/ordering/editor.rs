use crate::console::{Console, InputSource};
use crate::lifecycle::SessionError;
use crate::model::{Menu, Modification, Order, OrderError, Quantity};
use crate::ordering::builder::{quantity_rejection, QUANTITY_TOO_LARGE};
use crate::render::menu_table;
use std::io::Write;
use tracing::{debug, info, instrument};

pub const EMPTY_ORDER: &str = "YOUR ORDER IS EMPTY.";
pub const INVALID_ITEM_NAME: &str = "INVALID ITEM NAME. PLEASE TRY AGAIN.";
pub const NEGATIVE_QUANTITY: &str = "INVALID INPUT. QUANTITY CANNOT BE NEGATIVE.";

const ACTION_PROMPT: &str = "Would you like to modify or add items? (modify/add/exit): ";
const MODIFY_PROMPT: &str = "Enter the name of the item to modify: ";
const ADD_PROMPT: &str = "Enter the number of the item to add: ";

/// What the customer can do while reviewing an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Replace a line's quantity, or drop it with 0.
    Modify,
    /// Add more of a menu item, incrementing any existing line.
    Add,
    Exit,
}

impl EditAction {
    pub const CHOICES: [&'static str; 3] = ["modify", "add", "exit"];

    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "modify" => Some(Self::Modify),
            "add" => Some(Self::Add),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Lets the customer adjust an order before it is priced.
///
/// The loop ends when the customer chooses `exit` or when the order becomes
/// empty (including when it was empty to begin with).
#[instrument(skip_all, fields(lines = order.len()))]
pub fn review_order<I: InputSource, W: Write>(
    console: &mut Console<I, W>,
    mut order: Order,
    menu: &Menu,
) -> Result<Order, SessionError> {
    loop {
        if order.is_empty() {
            console.say(EMPTY_ORDER)?;
            return Ok(order);
        }

        let choice = console.prompt_choice(ACTION_PROMPT, &EditAction::CHOICES)?;
        match EditAction::from_choice(&choice) {
            Some(EditAction::Modify) => modify_line(console, &mut order)?,
            Some(EditAction::Add) => add_line(console, &mut order, menu)?,
            Some(EditAction::Exit) => break,
            None => continue,
        }
    }
    Ok(order)
}

fn modify_line<I: InputSource, W: Write>(
    console: &mut Console<I, W>,
    order: &mut Order,
) -> Result<(), SessionError> {
    let name = console.prompt_text(MODIFY_PROMPT)?;
    if !order.contains(&name) {
        debug!(%name, "Item not in order");
        console.say(INVALID_ITEM_NAME)?;
        return Ok(());
    }

    let raw = console.prompt_integer(&format!("Enter new quantity for {name} (0 to remove): "))?;
    match order.modify(&name, raw) {
        Ok(Modification::Removed) => {
            info!(item = %name, "Item removed");
            console.say(format!("✔️  {name} removed from your order."))?;
        }
        Ok(Modification::Updated(quantity)) => {
            info!(item = %name, %quantity, "Item updated");
            console.say(format!("✔️  Updated {name} to quantity {quantity}."))?;
        }
        Err(OrderError::InvalidQuantity(value)) if value < 0 => {
            debug!(value, "Rejected quantity");
            console.say(NEGATIVE_QUANTITY)?;
        }
        Err(OrderError::InvalidQuantity(value)) => {
            debug!(value, "Rejected quantity");
            console.say(QUANTITY_TOO_LARGE)?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn add_line<I: InputSource, W: Write>(
    console: &mut Console<I, W>,
    order: &mut Order,
    menu: &Menu,
) -> Result<(), SessionError> {
    console.say(menu_table(menu))?;
    let choice = console.prompt_choice(ADD_PROMPT, &menu.choice_keys())?;
    let Some(item) = menu.item_by_choice(&choice) else {
        return Ok(());
    };

    let raw = console.prompt_integer(&format!("Enter quantity for {}: ", item.name))?;
    let quantity = match Quantity::new(raw) {
        Ok(quantity) => quantity,
        Err(e) => {
            debug!(error = %e, "Rejected quantity");
            console.say(quantity_rejection(raw))?;
            return Ok(());
        }
    };

    let existed = order.contains(&item.name);
    let new_total = match order.add(item, quantity) {
        Ok(total) => total,
        Err(e @ OrderError::QuantityOverflow { .. }) => {
            debug!(error = %e, "Rejected quantity");
            console.say(QUANTITY_TOO_LARGE)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    info!(item = %item.name, %quantity, total = %new_total, "Item added");
    if existed {
        console.say(format!(
            "✔️  Added {} more of {}. New total: {}",
            quantity, item.name, new_total
        ))?;
    } else {
        console.say(format!("✔️  Added {} x {} to your order.", quantity, item.name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mock::ScriptedInput;
    use crate::ordering::builder::QUANTITY_TOO_LOW;

    fn pizza_order(n: i64) -> Order {
        let menu = Menu::quickbite();
        let mut order = Order::new();
        order
            .add(menu.item_named("Pizza").unwrap(), Quantity::new(n).unwrap())
            .unwrap();
        order
    }

    fn run(order: Order, lines: &[&str]) -> (Order, String) {
        let mut script = ScriptedInput::from_lines(lines.iter().copied());
        let mut console = Console::new(&mut script, Vec::new());
        let order = review_order(&mut console, order, &Menu::quickbite()).unwrap();
        let (_, out) = console.into_parts();
        script.verify();
        (order, String::from_utf8(out).unwrap())
    }

    fn qty(order: &Order, name: &str) -> Option<u32> {
        order.quantity(name).map(Quantity::get)
    }

    #[test]
    fn test_empty_order_returns_without_prompting() {
        let (order, out) = run(Order::new(), &[]);
        assert!(order.is_empty());
        assert_eq!(out, "YOUR ORDER IS EMPTY.\n");
    }

    #[test]
    fn test_add_increments_existing_line() {
        let (order, out) = run(pizza_order(2), &["add", "1", "3", "exit"]);
        assert_eq!(qty(&order, "Pizza"), Some(5));
        assert!(out.contains("✔️  Added 3 more of Pizza. New total: 5"));
    }

    #[test]
    fn test_modify_replaces_quantity() {
        let (order, out) = run(pizza_order(2), &["modify", "Pizza", "3", "exit"]);
        assert_eq!(qty(&order, "Pizza"), Some(3));
        assert!(out.contains("✔️  Updated Pizza to quantity 3."));
    }

    #[test]
    fn test_modify_to_zero_removes_and_ends_review() {
        let (order, out) = run(pizza_order(2), &["modify", "Pizza", "0"]);
        assert!(order.is_empty());
        assert!(out.contains("✔️  Pizza removed from your order."));
        assert!(out.ends_with("YOUR ORDER IS EMPTY.\n"));
    }

    #[test]
    fn test_modify_unknown_name_reloops() {
        let (order, out) = run(pizza_order(2), &["modify", "pizza", "exit"]);
        assert_eq!(qty(&order, "Pizza"), Some(2));
        assert!(out.contains(INVALID_ITEM_NAME));
    }

    #[test]
    fn test_negative_quantities_never_reach_the_order() {
        let (order, out) = run(
            pizza_order(2),
            &["modify", "Pizza", "-4", "add", "4", "0", "add", "4", "-1", "exit"],
        );
        assert_eq!(qty(&order, "Pizza"), Some(2));
        assert!(!order.contains("Chips"));
        assert!(out.contains(NEGATIVE_QUANTITY));
        assert_eq!(out.matches(QUANTITY_TOO_LOW).count(), 2);
    }

    #[test]
    fn test_add_new_item_goes_last() {
        let (order, _) = run(pizza_order(1), &["add", "5", "2", "exit"]);
        let names: Vec<&str> = order.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Pizza", "Drink"]);
    }

    #[test]
    fn test_invalid_action_reprompts() {
        let (order, out) = run(pizza_order(1), &["remove", "exit"]);
        assert_eq!(qty(&order, "Pizza"), Some(1));
        assert!(out.contains(crate::console::INVALID_CHOICE));
    }

    #[test]
    fn test_oversized_quantities_are_refused() {
        let (order, out) = run(
            pizza_order(2),
            &["modify", "Pizza", "5000000000", "add", "4", "5000000000", "exit"],
        );
        assert_eq!(qty(&order, "Pizza"), Some(2));
        assert!(!order.contains("Chips"));
        assert_eq!(out.matches(QUANTITY_TOO_LARGE).count(), 2);
        assert!(!out.contains(QUANTITY_TOO_LOW));
    }

    #[test]
    fn test_add_past_largest_quantity_leaves_line_alone() {
        let (order, out) = run(pizza_order(4294967295), &["add", "1", "1", "exit"]);
        assert_eq!(qty(&order, "Pizza"), Some(u32::MAX));
        assert!(out.contains(QUANTITY_TOO_LARGE));
        assert!(!out.contains("New total"));
    }
}
