//! Movement display formatting
//!
//! Movement lists are rendered with `tabled`; single movements as a detail
//! block.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::{format_signed, truncate};
use crate::models::Movement;

#[derive(Tabled)]
struct MovementRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Rec")]
    recurring: &'static str,
}

/// Format a list of movements as a table
pub fn format_movement_table(movements: &[Movement], symbol: &str, date_format: &str) -> String {
    if movements.is_empty() {
        return "No movements found.\n".to_string();
    }

    let rows = movements.iter().map(|m| MovementRow {
        id: m.id.short(),
        date: m.date.format(date_format).to_string(),
        category: m.category.label().to_string(),
        title: truncate(m.display_title(), 28),
        amount: format_signed(m.signed_amount(), symbol),
        recurring: if m.is_recurring { "↻" } else { "" },
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(4), Alignment::right());

    format!("{}\n", table)
}

/// Format movement details for display
pub fn format_movement_details(movement: &Movement, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Movement:  {}\n", movement.id.short()));
    output.push_str(&format!("Type:      {}\n", movement.movement_type.label()));
    output.push_str(&format!("Category:  {}\n", movement.category.label()));
    output.push_str(&format!("Title:     {}\n", movement.display_title()));
    output.push_str(&format!(
        "Amount:    {}\n",
        format_signed(movement.signed_amount(), symbol)
    ));
    output.push_str(&format!(
        "Date:      {}\n",
        movement.date.format("%Y-%m-%d %H:%M UTC")
    ));

    if movement.is_recurring {
        output.push_str("Recurring: yes\n");
    }

    output
}
