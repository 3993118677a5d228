//! CLI commands for reports
//!
//! Summaries, category rankings, history, calendar and exports.

use chrono::{NaiveDate, Utc};
use clap::{Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use super::{create_output, parse_month};
use crate::config::Settings;
use crate::display::format::{format_percentage, percentage};
use crate::display::{format_calendar_grid, format_category_breakdown, format_money_colored};
use crate::error::{FinanzasError, FinanzasResult};
use crate::export::{export_full_json, export_movements_csv};
use crate::ledger::{Ledger, Scope};
use crate::reports::{MonthSummaryReport, TrendsReport};
use crate::storage::MovementRepository;

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expense and balance of a month
    Summary {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Export the category breakdown to CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Expenses by category
    Categories {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long, conflicts_with = "top")]
        month: Option<String>,
        /// Show the five largest categories over all movements instead
        #[arg(long)]
        top: bool,
    },

    /// Expenses of the last six months, top categories and recurring split
    #[command(alias = "trends")]
    History {
        /// Export the monthly history to CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// One-off versus recurring expenses
    Split {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long, conflicts_with = "all")]
        month: Option<String>,
        /// Use every movement instead of one month
        #[arg(short, long)]
        all: bool,
    },

    /// Net balance of a single day
    Day {
        /// Date (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },

    /// Month calendar with each day's net balance
    Calendar {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Export movements to a file
    Export {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
        /// Month to export (YYYY-MM); every movement when omitted
        #[arg(short, long)]
        month: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}

/// Handle report commands
pub fn handle_report_command<R: MovementRepository>(
    ledger: &mut Ledger<R>,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinanzasResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { month, output } => {
            let month = parse_month(month.as_deref(), ledger.calendar())?;
            let report = MonthSummaryReport::generate(ledger.select_month(month));

            if let Some(path) = output {
                let mut writer = create_output(&path)?;
                report.export_csv(&mut writer)?;
                println!("Summary exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal(symbol));
            }
        }

        ReportCommands::Categories { month, top } => {
            if top {
                let rows = ledger.top_categories();
                let total = ledger.snapshot().all_time_totals.expense;
                println!("Top categorías (histórico)\n");
                print!("{}", format_category_breakdown(&rows, total, symbol));
            } else {
                let month = parse_month(month.as_deref(), ledger.calendar())?;
                let snapshot = ledger.select_month(month);
                println!("Gastos por categoría: {}\n", month.label());
                print!(
                    "{}",
                    format_category_breakdown(
                        &snapshot.month_expense_by_category,
                        snapshot.month_expense(),
                        symbol
                    )
                );
            }
        }

        ReportCommands::History { output } => {
            let report = TrendsReport::generate(ledger.movements(), Utc::now(), ledger.calendar());

            if let Some(path) = output {
                let mut writer = create_output(&path)?;
                report.export_csv(&mut writer)?;
                println!("History exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal(symbol));
            }
        }

        ReportCommands::Split { month, all } => {
            let (title, split) = if all {
                ("Histórico".to_string(), ledger.unique_vs_recurring(Scope::AllTime))
            } else {
                let month = parse_month(month.as_deref(), ledger.calendar())?;
                ledger.select_month(month);
                (month.label(), ledger.unique_vs_recurring(Scope::Month))
            };

            let total = split.total();
            println!("Únicos vs recurrentes: {}\n", title);
            println!(
                "{:<14} {:>14} {:>6}",
                "Únicos",
                split.unique.format_with_symbol(symbol),
                format_percentage(percentage(split.unique, total))
            );
            println!(
                "{:<14} {:>14} {:>6}",
                "Recurrentes",
                split.recurring.format_with_symbol(symbol),
                format_percentage(percentage(split.recurring, total))
            );
            println!("{:<14} {:>14}", "Total", total.format_with_symbol(symbol));
        }

        ReportCommands::Day { date } => {
            let calendar = *ledger.calendar();
            let day = match date {
                Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
                    FinanzasError::Validation(format!("Invalid date: {}. Use YYYY-MM-DD", s))
                })?,
                None => calendar.local_date(Utc::now()),
            };

            let balance = ledger.daily_balance_on(day);
            println!("{}: {}", day, format_money_colored(balance, symbol));
        }

        ReportCommands::Calendar { month } => {
            let month = parse_month(month.as_deref(), ledger.calendar())?;
            ledger.select_month(month);
            println!("{}\n", month.label());
            print!("{}", format_calendar_grid(&ledger.month_calendar()));
        }

        ReportCommands::Export {
            output,
            month,
            format,
        } => {
            let movements = match month {
                Some(m) => {
                    let month = parse_month(Some(&m), ledger.calendar())?;
                    ledger.select_month(month).month_movements.clone()
                }
                None => ledger.movements().to_vec(),
            };

            let mut writer = create_output(&output)?;
            match format {
                ExportFormat::Csv => export_movements_csv(&movements, &mut writer)?,
                ExportFormat::Json => export_full_json(&movements, &mut writer)?,
            }
            writer
                .flush()
                .map_err(|e| FinanzasError::Export(e.to_string()))?;

            println!(
                "Exported {} movements to: {}",
                movements.len(),
                output.display()
            );
        }
    }

    Ok(())
}
