//! Core data models for Finanzas
//!
//! This module contains the data structures of the ledger domain: movements,
//! their categories and amounts, and receipt-scan drafts.

pub mod category;
pub mod detected;
pub mod ids;
pub mod money;
pub mod movement;

pub use category::{Category, CategoryParseError, MovementType};
pub use detected::{DetectedMovement, DetectionSource};
pub use ids::MovementId;
pub use money::{Money, MoneyParseError};
pub use movement::{Movement, MovementBuilder, MovementValidationError};
