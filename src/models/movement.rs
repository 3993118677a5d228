//! Movement model
//!
//! A movement is one recorded income or expense. Movements are never edited
//! in place once stored; they are added or deleted as a whole.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, MovementType};
use super::ids::MovementId;
use super::money::Money;

/// One recorded income or expense event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    /// Unique identifier
    pub id: MovementId,

    /// Income or expense
    #[serde(rename = "type")]
    pub movement_type: MovementType,

    /// Category from the subset matching `movement_type`
    pub category: Category,

    /// Free text, may be empty
    #[serde(default)]
    pub title: String,

    /// Non-negative amount
    pub amount: Money,

    /// When the movement happened
    pub date: DateTime<Utc>,

    /// Classifies expenses as repeating for reporting
    #[serde(default)]
    pub is_recurring: bool,
}

impl Movement {
    /// Start building a movement dated now, with an empty title
    pub fn builder(movement_type: MovementType, category: Category, amount: Money) -> MovementBuilder {
        MovementBuilder {
            movement_type,
            category,
            amount,
            title: String::new(),
            date: None,
            is_recurring: false,
        }
    }

    /// Shorthand for an expense builder
    pub fn expense(category: Category, amount: Money) -> MovementBuilder {
        Self::builder(MovementType::Expense, category, amount)
    }

    /// Shorthand for an income builder
    pub fn income(category: Category, amount: Money) -> MovementBuilder {
        Self::builder(MovementType::Income, category, amount)
    }

    pub fn is_income(&self) -> bool {
        self.movement_type == MovementType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.movement_type == MovementType::Expense
    }

    /// Amount with the sign of the movement type applied
    pub fn signed_amount(&self) -> Money {
        Money::from_cents(self.amount.cents() * self.movement_type.sign())
    }

    /// Title, or the category label when the title is blank
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            self.category.label()
        } else {
            &self.title
        }
    }

    /// Validate the movement
    pub fn validate(&self) -> Result<(), MovementValidationError> {
        if !self.category.is_valid_for(self.movement_type) {
            return Err(MovementValidationError::CategoryTypeMismatch {
                category: self.category,
                movement_type: self.movement_type,
            });
        }

        if self.amount.is_negative() {
            return Err(MovementValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.display_title(),
            self.signed_amount()
        )
    }
}

/// Builder producing validated movements
#[derive(Debug, Clone)]
pub struct MovementBuilder {
    movement_type: MovementType,
    category: Category,
    amount: Money,
    title: String,
    date: Option<DateTime<Utc>>,
    is_recurring: bool,
}

impl MovementBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn recurring(mut self, is_recurring: bool) -> Self {
        self.is_recurring = is_recurring;
        self
    }

    /// Assign a fresh ID and validate the category/type pairing and amount
    pub fn build(self) -> Result<Movement, MovementValidationError> {
        let movement = Movement {
            id: MovementId::new(),
            movement_type: self.movement_type,
            category: self.category,
            title: self.title.trim().to_string(),
            amount: self.amount,
            date: self.date.unwrap_or_else(Utc::now),
            is_recurring: self.is_recurring,
        };
        movement.validate()?;
        Ok(movement)
    }
}

/// Validation errors for movements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovementValidationError {
    CategoryTypeMismatch {
        category: Category,
        movement_type: MovementType,
    },
    NegativeAmount(Money),
}

impl fmt::Display for MovementValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryTypeMismatch {
                category,
                movement_type,
            } => write!(
                f,
                "Category '{}' cannot be used for {} movements",
                category.key(),
                movement_type
            ),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount must not be negative, got {}", amount)
            }
        }
    }
}

impl std::error::Error for MovementValidationError {}

impl From<MovementValidationError> for crate::error::FinanzasError {
    fn from(err: MovementValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
