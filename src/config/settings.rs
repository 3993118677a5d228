//! User settings for Finanzas
//!
//! Display preferences and the calendar used to bucket movements into days
//! and months.

use serde::{Deserialize, Serialize};

use super::paths::FinanzasPaths;
use crate::error::FinanzasError;
use crate::ledger::Calendar;

/// User settings for Finanzas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// IANA time zone for day and month boundaries, e.g. "Europe/Madrid"
    ///
    /// Takes precedence over `utc_offset_minutes`. With neither set the
    /// machine's local zone is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Fixed UTC offset, in minutes, for day and month boundaries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            time_zone: None,
            utc_offset_minutes: None,
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Calendar matching the configured zone or offset
    pub fn calendar(&self) -> Result<Calendar, FinanzasError> {
        match (&self.time_zone, self.utc_offset_minutes) {
            (Some(name), _) => Calendar::with_time_zone(name),
            (None, Some(minutes)) => Calendar::with_offset_minutes(minutes),
            (None, None) => Ok(Calendar::local()),
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinanzasPaths) -> Result<Self, FinanzasError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanzasError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanzasError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinanzasPaths) -> Result<(), FinanzasError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanzasError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FinanzasError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
