//! Reports module for Finanzas
//!
//! Provides the month summary and the multi-month trends report, each
//! printable to the terminal and exportable to CSV.

pub mod month_summary;
pub mod trends;

pub use month_summary::{CategoryRow, MonthSummaryReport};
pub use trends::TrendsReport;
