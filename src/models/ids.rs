//! Strongly-typed ID wrapper for movements
//!
//! A newtype around `Uuid` so movement identifiers can't be confused with
//! arbitrary strings or UUIDs from elsewhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "mov-";

/// Identifier of a movement, generated once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovementId(Uuid);

impl MovementId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Short form shown in listings ("mov-" plus the first 8 hex digits)
    pub fn short(&self) -> String {
        format!("{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Whether `fragment` identifies this ID, either as the full UUID or as a
    /// leading fragment of it (with or without the "mov-" prefix)
    pub fn matches_prefix(&self, fragment: &str) -> bool {
        let fragment = fragment.strip_prefix(DISPLAY_PREFIX).unwrap_or(fragment);
        if fragment.is_empty() {
            return false;
        }
        let fragment = fragment.to_ascii_lowercase();
        self.0.to_string().starts_with(&fragment)
            || self.0.simple().to_string().starts_with(&fragment)
    }
}

impl Default for MovementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}

impl From<Uuid> for MovementId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for MovementId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = MovementId::new();
        assert!(!id.as_uuid().is_nil());
        assert_ne!(id, MovementId::new());
    }

    #[test]
    fn test_id_display() {
        let id = MovementId::new();
        let display = id.to_string();
        assert!(display.starts_with("mov-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_serializes_as_plain_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = MovementId::parse(uuid_str).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid_str));
    }

    #[test]
    fn test_from_str_accepts_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: MovementId = format!("mov-{}", uuid_str).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_matches_prefix() {
        let id = MovementId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(id.matches_prefix("550e84"));
        assert!(id.matches_prefix("mov-550e8400"));
        assert!(id.matches_prefix(&id.short()));
        assert!(!id.matches_prefix("660e"));
        assert!(!id.matches_prefix("mov-"));
    }
}
