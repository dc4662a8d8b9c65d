//! Movement display formatting
//!
//! Tables of movements for the `history` and `dashboard` commands, plus the
//! confirmation printed after `add`.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Movement;

use super::report::truncate;

const DESCRIPTION_WIDTH: usize = 30;

#[derive(Tabled)]
struct MovementRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl MovementRow {
    fn new(movement: &Movement, symbol: &str) -> Self {
        Self {
            date: movement.date.clone(),
            kind: movement.kind.to_string(),
            category: movement.category.clone(),
            description: truncate(&movement.description, DESCRIPTION_WIDTH),
            amount: movement.amount.format_with_symbol(symbol),
        }
    }
}

/// Format movements as a table, in the order given
pub fn format_movement_table(movements: &[&Movement], symbol: &str) -> String {
    if movements.is_empty() {
        return "No movements found.\n".to_string();
    }

    let rows = movements.iter().map(|m| MovementRow::new(m, symbol));
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::last(), Alignment::right());

    format!("{}\n", table)
}

/// Format a newly added movement
pub fn format_movement_details(movement: &Movement, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Movement:    {}\n", movement.id));
    output.push_str(&format!("Type:        {}\n", movement.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        movement.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Date:        {}\n", movement.date));

    if !movement.category.is_empty() {
        output.push_str(&format!("Category:    {}\n", movement.category));
    }

    if !movement.description.is_empty() {
        output.push_str(&format!("Description: {}\n", movement.description));
    }

    output
}
