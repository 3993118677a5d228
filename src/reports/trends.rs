//! Trends Report
//!
//! Expense history over the last six months, the all-time top categories and
//! the all-time recurring split.

use chrono::{DateTime, Utc};
use std::io::Write;

use crate::display::chart::{format_category_breakdown, format_history_chart};
use crate::error::{FinanzasError, FinanzasResult};
use crate::ledger::aggregate::{
    monthly_expense_history, top_categories, totals, unique_vs_recurring,
};
use crate::ledger::{
    Calendar, CategoryTotal, MonthlyPoint, RecurringSplit, Totals, HISTORY_MONTHS,
    TOP_CATEGORY_LIMIT,
};
use crate::models::Movement;

#[derive(Debug, Clone)]
pub struct TrendsReport {
    /// Oldest month first, ending with the current month
    pub history: Vec<MonthlyPoint>,
    pub top_categories: Vec<CategoryTotal>,
    pub all_time: Totals,
    pub split: RecurringSplit,
}

impl TrendsReport {
    pub fn generate(movements: &[Movement], now: DateTime<Utc>, calendar: &Calendar) -> Self {
        Self {
            history: monthly_expense_history(movements, now, calendar, HISTORY_MONTHS),
            top_categories: top_categories(movements, TOP_CATEGORY_LIMIT),
            all_time: totals(movements),
            split: unique_vs_recurring(movements),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Gastos por mes\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format_history_chart(&self.history, symbol));

        output.push_str("\nTop categorías\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format_category_breakdown(
            &self.top_categories,
            self.all_time.expense,
            symbol,
        ));

        output.push('\n');
        output.push_str(&format!(
            "Únicos {}  ·  Recurrentes {}\n",
            self.split.unique.format_with_symbol(symbol),
            self.split.recurring.format_with_symbol(symbol)
        ));

        output
    }

    /// Export the monthly history to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanzasResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["Month", "Label", "Expense"])?;
        for point in &self.history {
            csv_writer.write_record([
                point.month.to_string(),
                point.label.clone(),
                format!("{:.2}", point.amount.as_decimal()),
            ])?;
        }

        csv_writer
            .flush()
            .map_err(|e| FinanzasError::Export(e.to_string()))?;
        Ok(())
    }
}
