//! Display formatting for terminal output
//!
//! Provides utilities for formatting movements and aggregates for terminal
//! display, including tables, bar charts and the month calendar.

pub mod chart;
pub mod format;
pub mod movement;

pub use chart::{format_calendar_grid, format_category_breakdown, format_history_chart};
pub use format::{format_money_colored, format_signed, separator};
pub use movement::{format_movement_details, format_movement_table};
