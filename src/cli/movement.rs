//! Movement CLI commands
//!
//! `add` records a new income or expense; `history` lists them by type.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::display::format_movement_details;
use crate::error::FinordenResult;
use crate::models::MovementType;
use crate::reports::HistoryView;
use crate::services::{Ledger, MovementInput, TypeFilter};

/// Movement type argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for MovementType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => MovementType::Income,
            KindArg::Expense => MovementType::Expense,
        }
    }
}

/// History type filter argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TypeFilterArg {
    #[default]
    All,
    Income,
    Expense,
}

impl From<TypeFilterArg> for TypeFilter {
    fn from(arg: TypeFilterArg) -> Self {
        match arg {
            TypeFilterArg::All => TypeFilter::All,
            TypeFilterArg::Income => TypeFilter::Only(MovementType::Income),
            TypeFilterArg::Expense => TypeFilter::Only(MovementType::Expense),
        }
    }
}

/// Arguments of `finorden add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Movement type
    #[arg(value_enum)]
    pub kind: KindArg,
    /// Amount greater than zero (e.g. "120.50" or "$120.50")
    pub amount: String,
    /// Date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Category
    #[arg(short, long, default_value = "")]
    pub category: String,
    /// Description
    #[arg(short = 'm', long, default_value = "")]
    pub description: String,
}

impl AddArgs {
    /// Form input for these arguments, dating it `today` when no date was given
    pub fn to_input(&self, today: NaiveDate) -> MovementInput {
        MovementInput {
            kind: self.kind.into(),
            amount: self.amount.clone(),
            date: self
                .date
                .clone()
                .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }
}

/// Arguments of `finorden history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Only show one type of movement
    #[arg(short = 't', long = "type", value_enum, default_value_t = TypeFilterArg::All)]
    pub type_filter: TypeFilterArg,
}

/// Handle `finorden add`
pub fn handle_add_command(
    ledger: &mut Ledger,
    settings: &Settings,
    args: AddArgs,
    today: NaiveDate,
) -> FinordenResult<()> {
    let outcome = ledger.submit(&args.to_input(today))?;

    println!("Movement added successfully");
    print!(
        "{}",
        format_movement_details(&outcome.movement, &settings.currency_symbol)
    );

    if !outcome.persisted {
        eprintln!("Warning: the movement could not be saved and will be lost on exit");
    }

    Ok(())
}

/// Handle `finorden history`
pub fn handle_history_command(
    ledger: &Ledger,
    settings: &Settings,
    args: HistoryArgs,
) -> FinordenResult<()> {
    let view = HistoryView::generate(ledger.movements(), args.type_filter.into());
    print!("{}", view.format_terminal(&settings.currency_symbol));
    Ok(())
}
