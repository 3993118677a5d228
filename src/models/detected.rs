//! Unconfirmed movement drafts produced by receipt scanning
//!
//! A `DetectedMovement` lives only until the user confirms it (turning it
//! into an expense `Movement`) or discards it. It is never persisted.

use chrono::{DateTime, Utc};
use std::fmt;

use super::category::{Category, MovementType};
use super::money::Money;
use super::movement::{Movement, MovementValidationError};

/// Title given to confirmed receipts that were left untitled
pub const DEFAULT_RECEIPT_TITLE: &str = "Ticket";

/// Where a draft came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    /// Text recognised from a receipt photo
    ReceiptScan,
    /// Values supplied directly, without recognition
    Mock,
}

impl fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReceiptScan => write!(f, "receipt_scan"),
            Self::Mock => write!(f, "mock"),
        }
    }
}

/// Editable draft of an expense
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedMovement {
    pub amount: Money,
    pub date: DateTime<Utc>,
    pub category: Category,
    pub title: String,
    pub source: DetectionSource,
}

impl DetectedMovement {
    /// A draft dated now, categorised as food until edited
    pub fn new(amount: Money, source: DetectionSource) -> Self {
        Self {
            amount,
            date: Utc::now(),
            category: Category::Food,
            title: String::new(),
            source,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Turn the draft into an expense movement, consuming it
    pub fn confirm(self) -> Result<Movement, MovementValidationError> {
        let title = if self.title.trim().is_empty() {
            DEFAULT_RECEIPT_TITLE.to_string()
        } else {
            self.title
        };

        Movement::builder(MovementType::Expense, self.category, self.amount)
            .title(title)
            .date(self.date)
            .build()
    }

    /// Drop the draft without producing a movement
    pub fn discard(self) {
        tracing::debug!(source = %self.source, amount = %self.amount, "Discarded detected movement");
    }
}
