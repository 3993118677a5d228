//! Movement CLI commands
//!
//! Implements CLI commands for recording, listing and deleting movements,
//! and for confirming scanned receipts.

use clap::Subcommand;

use super::{parse_date, parse_month};
use crate::config::Settings;
use crate::display::{format_movement_details, format_movement_table, format_signed};
use crate::error::{FinanzasError, FinanzasResult};
use crate::ledger::Ledger;
use crate::models::{
    Category, DetectedMovement, DetectionSource, Money, Movement, MovementType,
};
use crate::storage::MovementRepository;

/// Movement subcommands
#[derive(Subcommand, Debug)]
pub enum MovementCommands {
    /// Record an income or an expense
    Add {
        /// "income" or "expense" ("ingreso" / "gasto" also work)
        kind: String,
        /// Amount (e.g., "18500", "25.50" or "25,50")
        amount: String,
        /// Category (e.g., "comida", "sueldo")
        #[arg(short, long)]
        category: String,
        /// Title
        #[arg(short, long)]
        title: Option<String>,
        /// Movement date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Mark as a recurring movement
        #[arg(short, long)]
        recurring: bool,
    },
    /// List movements
    #[command(alias = "ls")]
    List {
        /// Month to list (YYYY-MM), defaults to the current month
        #[arg(short, long, conflicts_with = "all")]
        month: Option<String>,
        /// List every movement
        #[arg(short, long)]
        all: bool,
        /// Maximum number of movements to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show movement details
    Show {
        /// Movement ID (a unique prefix is enough)
        id: String,
    },
    /// Delete a movement
    #[command(alias = "rm")]
    Delete {
        /// Movement ID (a unique prefix is enough)
        id: String,
    },
    /// Review a receipt draft and confirm it as an expense
    Scan {
        /// Amount read from the receipt
        #[arg(short, long)]
        amount: String,
        /// Expense category, defaults to "comida"
        #[arg(short, long)]
        category: Option<String>,
        /// Title, defaults to "Ticket"
        #[arg(short, long)]
        title: Option<String>,
        /// Receipt date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Drop the draft instead of saving it
        #[arg(long)]
        discard: bool,
    },
}

/// Handle a movement command
pub fn handle_movement_command<R: MovementRepository>(
    ledger: &mut Ledger<R>,
    settings: &Settings,
    cmd: MovementCommands,
) -> FinanzasResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        MovementCommands::Add {
            kind,
            amount,
            category,
            title,
            date,
            recurring,
        } => {
            let movement_type: MovementType = kind
                .parse()
                .map_err(|e| FinanzasError::Validation(format!("{}", e)))?;
            let category = parse_category(&category)?;
            let amount = parse_amount(&amount)?;

            let mut builder = Movement::builder(movement_type, category, amount).recurring(recurring);
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(date) = date {
                builder = builder.date(parse_date(&date, ledger.calendar())?);
            }

            let movement = builder.build()?;
            println!(
                "Added {} {} ({})",
                movement.id.short(),
                format_signed(movement.signed_amount(), symbol),
                movement.display_title()
            );

            let snapshot = ledger.add(movement);
            println!(
                "Balance {}: {}",
                snapshot.selected_month.label(),
                snapshot.month_balance().format_with_symbol(symbol)
            );
        }

        MovementCommands::List { month, all, limit } => {
            let movements: Vec<Movement> = if all {
                ledger.movements().to_vec()
            } else {
                let month = parse_month(month.as_deref(), ledger.calendar())?;
                ledger.select_month(month).month_movements.clone()
            };

            let shown = limit.unwrap_or(movements.len()).min(movements.len());
            print!(
                "{}",
                format_movement_table(&movements[..shown], symbol, &settings.date_format)
            );
            if shown < movements.len() {
                println!("... {} more", movements.len() - shown);
            }
        }

        MovementCommands::Show { id } => {
            let movement = ledger.resolve(&id)?;
            print!("{}", format_movement_details(movement, symbol));
        }

        MovementCommands::Delete { id } => {
            let movement = ledger.resolve(&id)?.clone();
            ledger.delete(movement.id);
            println!(
                "Deleted {} {} ({})",
                movement.id.short(),
                format_signed(movement.signed_amount(), symbol),
                movement.display_title()
            );
        }

        MovementCommands::Scan {
            amount,
            category,
            title,
            date,
            discard,
        } => {
            let mut draft = DetectedMovement::new(parse_amount(&amount)?, DetectionSource::Mock);
            if let Some(category) = category {
                draft = draft.with_category(parse_category(&category)?);
            }
            if let Some(title) = title {
                draft = draft.with_title(title);
            }
            if let Some(date) = date {
                draft = draft.with_date(parse_date(&date, ledger.calendar())?);
            }

            if discard {
                draft.discard();
                println!("Draft discarded.");
                return Ok(());
            }

            let movement = draft.confirm()?;
            println!(
                "Confirmed {} {} ({})",
                movement.id.short(),
                format_signed(movement.signed_amount(), symbol),
                movement.display_title()
            );
            ledger.add(movement);
        }
    }

    Ok(())
}

fn parse_category(input: &str) -> FinanzasResult<Category> {
    input
        .parse()
        .map_err(|e| FinanzasError::Validation(format!("{}", e)))
}

fn parse_amount(input: &str) -> FinanzasResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| FinanzasError::Validation(format!("Invalid amount: {}", e)))?;

    if amount.is_negative() {
        return Err(FinanzasError::Validation(
            "Amount must not be negative; use the movement type for direction".into(),
        ));
    }
    Ok(amount)
}
