//! Month Summary Report
//!
//! Income, expense and balance of one month, its expense breakdown by
//! category, and the one-off versus recurring split.

use std::io::Write;

use crate::display::format::{format_percentage, percentage};
use crate::error::{FinanzasError, FinanzasResult};
use crate::ledger::aggregate::unique_vs_recurring;
use crate::ledger::{LedgerSnapshot, RecurringSplit, YearMonth};
use crate::models::{Category, Money};

/// Expense total of one category within the month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: Category,
    pub amount: Money,
    /// Number of expense movements in this category
    pub movement_count: usize,
    /// Share of the month's expenses
    pub percentage: f64,
}

/// Month Summary Report
#[derive(Debug, Clone)]
pub struct MonthSummaryReport {
    pub month: YearMonth,
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
    /// Balance over every movement, not only this month
    pub total_balance: Money,
    pub movement_count: usize,
    /// Expense categories, largest first
    pub categories: Vec<CategoryRow>,
    pub split: RecurringSplit,
}

impl MonthSummaryReport {
    /// Build the report from a ledger snapshot
    pub fn generate(snapshot: &LedgerSnapshot) -> Self {
        let expense = snapshot.month_expense();

        let categories = snapshot
            .month_expense_by_category
            .iter()
            .map(|total| CategoryRow {
                category: total.category,
                amount: total.amount,
                movement_count: snapshot
                    .month_movements
                    .iter()
                    .filter(|m| m.is_expense() && m.category == total.category)
                    .count(),
                percentage: percentage(total.amount, expense),
            })
            .collect();

        Self {
            month: snapshot.selected_month,
            income: snapshot.month_income(),
            expense,
            balance: snapshot.month_balance(),
            total_balance: snapshot.total_balance(),
            movement_count: snapshot.month_movements.len(),
            categories,
            split: unique_vs_recurring(&snapshot.month_movements),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Resumen: {}\n", self.month.label()));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Ingresos",
            self.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Gastos",
            self.expense.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Balance del mes",
            self.balance.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Balance total",
            self.total_balance.format_with_symbol(symbol)
        ));
        output.push_str(&format!("{:<20} {:>14}\n\n", "Movimientos", self.movement_count));

        if self.categories.is_empty() {
            output.push_str("No expenses this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>14} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<20} {:>14} {:>8} {:>8}\n",
                row.category.label(),
                row.amount.format_with_symbol(symbol),
                row.movement_count,
                format_percentage(row.percentage)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Únicos",
            self.split.unique.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Recurrentes",
            self.split.recurring.format_with_symbol(symbol)
        ));

        output
    }

    /// Export the category breakdown to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanzasResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["Month", "Category", "Amount", "Count", "Percentage"])?;

        for row in &self.categories {
            csv_writer.write_record([
                self.month.to_string(),
                row.category.key().to_string(),
                format!("{:.2}", row.amount.as_decimal()),
                row.movement_count.to_string(),
                format!("{:.2}", row.percentage),
            ])?;
        }

        csv_writer.write_record([
            self.month.to_string(),
            "TOTAL".to_string(),
            format!("{:.2}", self.expense.as_decimal()),
            self.categories
                .iter()
                .map(|r| r.movement_count)
                .sum::<usize>()
                .to_string(),
            if self.expense.is_zero() { "0.00" } else { "100.00" }.to_string(),
        ])?;

        csv_writer
            .flush()
            .map_err(|e| FinanzasError::Export(e.to_string()))?;
        Ok(())
    }
}
