//! Movement repositories
//!
//! The JSON store keeps the whole list in `movements.json` as a single array;
//! the in-memory store backs tests and previews.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::error::FinanzasResult;
use crate::models::Movement;

use super::file_io::{read_json, write_json_atomic};
use super::MovementRepository;

/// Repository persisting movements to a JSON file
#[derive(Debug, Clone)]
pub struct JsonMovementStore {
    path: PathBuf,
}

impl JsonMovementStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MovementRepository for JsonMovementStore {
    fn load(&self) -> FinanzasResult<Vec<Movement>> {
        let movements: Vec<Movement> = read_json(&self.path)?;
        tracing::debug!(count = movements.len(), path = %self.path.display(), "Loaded movements");
        Ok(movements)
    }

    fn save(&self, movements: &[Movement]) -> FinanzasResult<()> {
        write_json_atomic(&self.path, movements)?;
        tracing::debug!(count = movements.len(), path = %self.path.display(), "Saved movements");
        Ok(())
    }
}

/// Repository holding the last saved list in memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    cache: RefCell<Vec<Movement>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `movements`, as if saved earlier
    pub fn with_movements(movements: Vec<Movement>) -> Self {
        Self {
            cache: RefCell::new(movements),
        }
    }

    /// Copy of what was last saved
    pub fn saved(&self) -> Vec<Movement> {
        self.cache.borrow().clone()
    }
}

impl MovementRepository for InMemoryStore {
    fn load(&self) -> FinanzasResult<Vec<Movement>> {
        Ok(self.cache.borrow().clone())
    }

    fn save(&self, movements: &[Movement]) -> FinanzasResult<()> {
        *self.cache.borrow_mut() = movements.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::{TimeZone, Utc};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonMovementStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonMovementStore::new(temp_dir.path().join("movements.json"));
        (temp_dir, store)
    }

    fn sample_movements() -> Vec<Movement> {
        let date = Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap();
        vec![
            Movement::income(Category::Salary, Money::from_units(1000))
                .title("Sueldo")
                .date(date)
                .build()
                .unwrap(),
            Movement::expense(Category::Food, Money::from_cents(5025))
                .title("Comida")
                .date(date)
                .recurring(true)
                .build()
                .unwrap(),
        ]
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let (_temp_dir, store) = create_test_store();
        let movements = sample_movements();

        store.save(&movements).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, movements);
        assert_eq!(loaded[0].title, "Sueldo");
        assert_eq!(loaded[1].title, "Comida");
    }

    #[test]
    fn test_last_write_wins() {
        let (_temp_dir, store) = create_test_store();
        let movements = sample_movements();

        store.save(&movements).unwrap();
        store.save(&movements[1..]).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_file_is_decoding_error() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), r#"[{"id": "nope"}]"#).unwrap();

        let err = store.load().unwrap_err();
        assert!(err.is_decoding());
    }

    #[test]
    fn test_reads_hand_written_file() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"[{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "type": "expense",
                "category": "transporte",
                "title": "Uber",
                "amount": 25.5,
                "date": "2026-10-05T14:00:00Z",
                "isRecurring": false
            }]"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category, Category::Transport);
        assert_eq!(loaded[0].amount.cents(), 2550);
    }

    #[test]
    fn test_out_of_range_amount_is_decoding_error() {
        let (_temp_dir, store) = create_test_store();
        let row = |id: &str| {
            format!(
                r#"{{"id": "{}", "type": "income", "category": "sueldo", "title": "",
                    "amount": 90000000000000000, "date": "2026-10-05T14:00:00Z",
                    "isRecurring": false}}"#,
                id
            )
        };
        fs::write(
            store.path(),
            format!(
                "[{},{}]",
                row("550e8400-e29b-41d4-a716-446655440000"),
                row("550e8400-e29b-41d4-a716-446655440001")
            ),
        )
        .unwrap();

        assert!(store.load().unwrap_err().is_decoding());
    }

    #[test]
    fn test_in_memory_round_trip() {
        let store = InMemoryStore::new();
        let movements = sample_movements();
        store.save(&movements).unwrap();
        assert_eq!(store.load().unwrap(), movements);
    }
}
