use crate::model::Menu;

const TABLE_WIDTH: usize = 40;

/// Formats the catalog as a fixed-width table.
///
/// Columns are the 1-based item number (left, 10), the name (centred, 20) and
/// the price (right, 7). The leading blank line separates the table from
/// whatever was printed before it.
pub fn menu_table(menu: &Menu) -> String {
    let rule = "-".repeat(TABLE_WIDTH);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        format!("{:<10} | {:^20} | {:>7}", "No.", "Item", "Price"),
        rule.clone(),
    ];
    for (index, item) in menu.items().iter().enumerate() {
        lines.push(format!(
            "{:<10} | {:^20} | {:>7}",
            index + 1,
            item.name,
            item.price
        ));
    }
    lines.push(rule);
    lines.join("\n")
}
