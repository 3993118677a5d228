//! Text charts for the reporting views

use chrono::Datelike;

use super::format::{format_bar, format_percentage, percentage};
use crate::ledger::{CategoryTotal, DailyBalance, MonthlyPoint};
use crate::models::Money;

const BAR_WIDTH: usize = 30;

/// One bar per month, scaled to the largest month
pub fn format_history_chart(points: &[MonthlyPoint], symbol: &str) -> String {
    let max = points.iter().map(|p| p.amount).max().unwrap_or_default();
    let label_width = points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for point in points {
        output.push_str(&format!(
            "{:<label_width$}  {}  {}\n",
            point.label,
            format_bar(point.amount, max, BAR_WIDTH),
            point.amount.format_with_symbol(symbol),
            label_width = label_width,
        ));
    }
    output
}

/// Category totals with their share of `total` and a proportional bar
pub fn format_category_breakdown(rows: &[CategoryTotal], total: Money, symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let max = rows.iter().map(|r| r.amount).max().unwrap_or_default();
    let mut output = String::new();

    for row in rows {
        output.push_str(&format!(
            "{:<14} {:>12} {:>6}  {}\n",
            row.category.label(),
            row.amount.format_with_symbol(symbol),
            format_percentage(percentage(row.amount, total)),
            format_bar(row.amount, max, BAR_WIDTH / 2),
        ));
    }
    output
}

/// Month grid, Monday first, each cell holding the day's net balance
///
/// Days without movements show only their number.
pub fn format_calendar_grid(days: &[DailyBalance]) -> String {
    const CELL: usize = 10;

    let mut output = String::new();
    for name in ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"] {
        output.push_str(&format!("{:<width$}", name, width = CELL));
    }
    output.push('\n');

    let Some(first) = days.first() else {
        return output;
    };

    let lead = first.date.weekday().num_days_from_monday() as usize;
    let mut column = lead;
    output.push_str(&" ".repeat(lead * CELL));

    for day in days {
        let cell = if day.balance.is_zero() {
            format!("{}", day.date.day())
        } else {
            format!("{} {}", day.date.day(), compact_amount(day.balance))
        };
        output.push_str(&format!("{:<width$}", cell, width = CELL));

        column += 1;
        if column == 7 {
            output.truncate(output.trim_end_matches(' ').len());
            output.push('\n');
            column = 0;
        }
    }

    if column != 0 {
        output.truncate(output.trim_end_matches(' ').len());
        output.push('\n');
    }
    output
}

/// Signed whole-unit amount, abbreviated with "k" above a thousand
fn compact_amount(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "+" };
    let units = amount.abs().units();
    if units >= 1000 {
        format!("{}{}k", sign, units / 1000)
    } else {
        format!("{}{}", sign, units)
    }
}
