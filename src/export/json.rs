//! JSON Export functionality
//!
//! Exports every movement together with the all-time totals, with schema
//! versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FinanzasError, FinanzasResult};
use crate::ledger::aggregate::totals;
use crate::models::{Money, Movement};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub movements: Vec<Movement>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub movement_count: usize,
    pub total_income: Money,
    pub total_expense: Money,
    pub earliest_movement: Option<DateTime<Utc>>,
    pub latest_movement: Option<DateTime<Utc>>,
}

impl FullExport {
    pub fn from_movements(movements: &[Movement]) -> Self {
        let all_time = totals(movements);

        let metadata = ExportMetadata {
            movement_count: movements.len(),
            total_income: all_time.income,
            total_expense: all_time.expense,
            earliest_movement: movements.iter().map(|m| m.date).min(),
            latest_movement: movements.iter().map(|m| m.date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            movements: movements.to_vec(),
            metadata,
        }
    }
}

/// Write the full export as pretty-printed JSON
pub fn export_full_json<W: Write>(movements: &[Movement], writer: &mut W) -> FinanzasResult<()> {
    let export = FullExport::from_movements(movements);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| FinanzasError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinanzasError::Export(e.to_string()))?;
    Ok(())
}
