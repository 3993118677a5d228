//! Storage layer for Finanzas
//!
//! Movements are persisted as one JSON array. The ledger only talks to the
//! `MovementRepository` trait, so other backends can be swapped in.

pub mod file_io;
pub mod movements;

pub use file_io::{read_json, write_json_atomic};
pub use movements::{InMemoryStore, JsonMovementStore};

use crate::error::FinanzasResult;
use crate::models::Movement;

/// Durable sink for the full movement list
///
/// Implementations keep no state beyond what they were last given to save.
pub trait MovementRepository {
    /// Load every persisted movement; an empty list when nothing was saved yet
    ///
    /// Fails with `FinanzasError::Decoding` when stored data is malformed.
    fn load(&self) -> FinanzasResult<Vec<Movement>>;

    /// Replace the persisted list with `movements`
    ///
    /// Fails with `FinanzasError::Encoding` when the list can't be serialized.
    fn save(&self, movements: &[Movement]) -> FinanzasResult<()>;
}

impl<R: MovementRepository + ?Sized> MovementRepository for Box<R> {
    fn load(&self) -> FinanzasResult<Vec<Movement>> {
        (**self).load()
    }

    fn save(&self, movements: &[Movement]) -> FinanzasResult<()> {
        (**self).save(movements)
    }
}

impl<R: MovementRepository + ?Sized> MovementRepository for &R {
    fn load(&self) -> FinanzasResult<Vec<Movement>> {
        (**self).load()
    }

    fn save(&self, movements: &[Movement]) -> FinanzasResult<()> {
        (**self).save(movements)
    }
}
