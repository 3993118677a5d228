//! Configuration module for Finanzas
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinanzasPaths;
pub use settings::Settings;
