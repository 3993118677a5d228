//! Export module for Finanzas
//!
//! - CSV: one row per movement (spreadsheet-compatible)
//! - JSON: full machine-readable ledger export

pub mod csv;
pub mod json;

pub use self::csv::export_movements_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
