//! Movement types and categories
//!
//! Categories are a closed set split into an expense subset and an income
//! subset. The serialized names are the identifiers used in stored data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Income,
    Expense,
}

impl MovementType {
    /// All movement types
    pub const ALL: [MovementType; 2] = [MovementType::Income, MovementType::Expense];

    /// Sign multiplier for signed-amount computations
    pub const fn sign(&self) -> i64 {
        match self {
            Self::Income => 1,
            Self::Expense => -1,
        }
    }

    /// Serialized identifier
    pub fn key(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Ingreso",
            Self::Expense => "Gasto",
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MovementType {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "ingreso" => Ok(Self::Income),
            "expense" | "gasto" => Ok(Self::Expense),
            other => Err(CategoryParseError::UnknownType(other.to_string())),
        }
    }
}

/// Category tag of a movement
///
/// Declaration order is meaningful: it is the order of [`Category::ALL`] and
/// the tie-break used when two categories sum to the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    // Expenses
    #[serde(rename = "comida")]
    Food,
    #[serde(rename = "transporte")]
    Transport,
    #[serde(rename = "ocio")]
    Leisure,
    #[serde(rename = "hogar")]
    Home,
    #[serde(rename = "salud")]
    Health,
    #[serde(rename = "suscripciones")]
    Subscriptions,
    #[serde(rename = "compras")]
    Shopping,
    #[serde(rename = "otros")]
    Other,

    // Income
    #[serde(rename = "sueldo")]
    Salary,
    #[serde(rename = "venta")]
    Sale,
    #[serde(rename = "freelance")]
    Freelance,
    #[serde(rename = "inversion")]
    Investment,
    #[serde(rename = "regalo")]
    Gift,
    #[serde(rename = "reembolso")]
    Refund,
    #[serde(rename = "alquiler")]
    Rent,
    #[serde(rename = "negocio")]
    Business,
}

impl Category {
    pub const EXPENSE: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Leisure,
        Category::Home,
        Category::Health,
        Category::Subscriptions,
        Category::Shopping,
        Category::Other,
    ];

    pub const INCOME: [Category; 8] = [
        Category::Salary,
        Category::Sale,
        Category::Freelance,
        Category::Investment,
        Category::Gift,
        Category::Refund,
        Category::Rent,
        Category::Business,
    ];

    pub const ALL: [Category; 16] = [
        Category::Food,
        Category::Transport,
        Category::Leisure,
        Category::Home,
        Category::Health,
        Category::Subscriptions,
        Category::Shopping,
        Category::Other,
        Category::Salary,
        Category::Sale,
        Category::Freelance,
        Category::Investment,
        Category::Gift,
        Category::Refund,
        Category::Rent,
        Category::Business,
    ];

    /// Categories valid for a movement type
    pub fn for_type(movement_type: MovementType) -> &'static [Category] {
        match movement_type {
            MovementType::Expense => &Self::EXPENSE,
            MovementType::Income => &Self::INCOME,
        }
    }

    /// The movement type whose subset contains this category
    pub fn movement_type(&self) -> MovementType {
        match self {
            Self::Food
            | Self::Transport
            | Self::Leisure
            | Self::Home
            | Self::Health
            | Self::Subscriptions
            | Self::Shopping
            | Self::Other => MovementType::Expense,
            Self::Salary
            | Self::Sale
            | Self::Freelance
            | Self::Investment
            | Self::Gift
            | Self::Refund
            | Self::Rent
            | Self::Business => MovementType::Income,
        }
    }

    pub fn is_valid_for(&self, movement_type: MovementType) -> bool {
        self.movement_type() == movement_type
    }

    /// Stable identifier, identical to the serialized name
    pub fn key(&self) -> &'static str {
        match self {
            Self::Food => "comida",
            Self::Transport => "transporte",
            Self::Leisure => "ocio",
            Self::Home => "hogar",
            Self::Health => "salud",
            Self::Subscriptions => "suscripciones",
            Self::Shopping => "compras",
            Self::Other => "otros",
            Self::Salary => "sueldo",
            Self::Sale => "venta",
            Self::Freelance => "freelance",
            Self::Investment => "inversion",
            Self::Gift => "regalo",
            Self::Refund => "reembolso",
            Self::Rent => "alquiler",
            Self::Business => "negocio",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Comida",
            Self::Transport => "Transporte",
            Self::Leisure => "Ocio",
            Self::Home => "Hogar",
            Self::Health => "Salud",
            Self::Subscriptions => "Suscripciones",
            Self::Shopping => "Compras",
            Self::Other => "Otros",
            Self::Salary => "Sueldo",
            Self::Sale => "Venta",
            Self::Freelance => "Freelance",
            Self::Investment => "Inversión",
            Self::Gift => "Regalo",
            Self::Refund => "Reembolso",
            Self::Rent => "Alquiler",
            Self::Business => "Negocio",
        }
    }

    /// Icon identifier for front ends
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "fork.knife",
            Self::Transport => "car.fill",
            Self::Leisure => "gamecontroller.fill",
            Self::Home => "house.fill",
            Self::Health => "cross.case.fill",
            Self::Subscriptions => "repeat",
            Self::Shopping => "bag.fill",
            Self::Other => "sparkles",
            Self::Salary => "dollarsign.circle.fill",
            Self::Sale => "tag.fill",
            Self::Freelance => "laptopcomputer",
            Self::Investment => "chart.line.uptrend.xyaxis",
            Self::Gift => "gift.fill",
            Self::Refund => "arrow.counterclockwise",
            Self::Rent => "key.fill",
            Self::Business => "briefcase.fill",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Accepts the stored key, the display label (case-insensitive, accents
    /// optional for "inversión") or the English variant name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| {
                c.key() == needle
                    || c.label().to_lowercase() == needle
                    || format!("{:?}", c).to_lowercase() == needle
            })
            .ok_or_else(|| CategoryParseError::UnknownCategory(s.trim().to_string()))
    }
}

/// Error type for category and movement type parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    UnknownCategory(String),
    UnknownType(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory(s) => write!(f, "Unknown category: {}", s),
            Self::UnknownType(s) => write!(f, "Unknown movement type: {} (use income or expense)", s),
        }
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_type_sign() {
        assert_eq!(MovementType::Income.sign(), 1);
        assert_eq!(MovementType::Expense.sign(), -1);
    }

    #[test]
    fn test_categories_for_type() {
        let expense = Category::for_type(MovementType::Expense);
        let income = Category::for_type(MovementType::Income);

        assert!(expense.contains(&Category::Food));
        assert!(expense.contains(&Category::Transport));
        assert!(!expense.contains(&Category::Salary));

        assert!(income.contains(&Category::Salary));
        assert!(income.contains(&Category::Sale));
        assert!(!income.contains(&Category::Food));
    }

    #[test]
    fn test_subsets_partition_all() {
        assert_eq!(Category::EXPENSE.len() + Category::INCOME.len(), Category::ALL.len());
        for category in Category::ALL {
            let subset = Category::for_type(category.movement_type());
            assert!(subset.contains(&category), "{:?} missing from its subset", category);
        }
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Category::Food).unwrap(), "\"comida\"");
        assert_eq!(serde_json::to_string(&Category::Investment).unwrap(), "\"inversion\"");
        assert_eq!(serde_json::to_string(&MovementType::Expense).unwrap(), "\"expense\"");

        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("comida".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("Transporte".parse::<Category>().unwrap(), Category::Transport);
        assert_eq!("Inversión".parse::<Category>().unwrap(), Category::Investment);
        assert_eq!("inversion".parse::<Category>().unwrap(), Category::Investment);
        assert_eq!("salary".parse::<Category>().unwrap(), Category::Salary);
        assert!("groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_parse_movement_type() {
        assert_eq!("income".parse::<MovementType>().unwrap(), MovementType::Income);
        assert_eq!("Gasto".parse::<MovementType>().unwrap(), MovementType::Expense);
        assert!("transfer".parse::<MovementType>().is_err());
    }
}
