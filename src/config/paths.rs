//! Path management for Finanzas
//!
//! ## Path Resolution Order
//!
//! 1. `FINANZAS_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/finanzas` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinanzasError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINANZAS_DATA_DIR";

/// Manages all paths used by Finanzas
#[derive(Debug, Clone)]
pub struct FinanzasPaths {
    base_dir: PathBuf,
}

impl FinanzasPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinanzasError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinanzasPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding movement data
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// The JSON array of all movements
    pub fn movements_file(&self) -> PathBuf {
        self.data_dir().join("movements.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinanzasError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanzasError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinanzasError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Finanzas has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinanzasError> {
    ProjectDirs::from("", "", "finanzas")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FinanzasError::Config("Could not determine home directory".into()))
}
