//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the ledger.

pub mod movement;
pub mod report;

pub use movement::{handle_movement_command, MovementCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{FinanzasError, FinanzasResult};
use crate::ledger::{Calendar, YearMonth};

/// The month given as "YYYY-MM", or the current local month
pub fn parse_month(month: Option<&str>, calendar: &Calendar) -> FinanzasResult<YearMonth> {
    match month {
        Some(s) => s.parse(),
        None => Ok(calendar.year_month(Utc::now())),
    }
}

/// Parse a user-supplied movement date
///
/// A bare "YYYY-MM-DD" means noon of that local day, so the movement lands
/// on the intended date whatever the offset. Full RFC 3339 timestamps are
/// taken as given.
pub fn parse_date(input: &str, calendar: &Calendar) -> FinanzasResult<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(calendar.start_of_day(date) + Duration::hours(12));
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            FinanzasError::Validation(format!(
                "Invalid date: {}. Use YYYY-MM-DD or an RFC 3339 timestamp",
                input
            ))
        })
}

/// Open `path` for writing an export
pub(crate) fn create_output(path: &Path) -> FinanzasResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        FinanzasError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
