//! Finanzas - personal income and expense ledger
//!
//! This library records income and expense movements, persists them as a
//! JSON array, and derives the figures a finance dashboard shows: monthly
//! totals and balance, expenses by category, a six-month expense history,
//! daily balances and the one-off versus recurring split.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Movements, categories, amounts and receipt drafts
//! - `storage`: The repository trait and its JSON and in-memory stores
//! - `ledger`: The mutator owning the movement list, plus pure aggregations
//! - `reports`, `display`, `export`: Terminal and file output
//! - `cli`: Command handlers for the `finanzas` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finanzas::config::{FinanzasPaths, Settings};
//! use finanzas::ledger::Ledger;
//! use finanzas::storage::JsonMovementStore;
//!
//! let paths = FinanzasPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let calendar = settings.calendar()?;
//! let month = calendar.year_month(chrono::Utc::now());
//! let ledger = Ledger::open(JsonMovementStore::new(paths.movements_file()), calendar, month);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FinanzasError, FinanzasResult};

use std::sync::Once;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "FINANZAS_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, logging to stderr
///
/// Filter directives come from `FINANZAS_LOG`; only warnings are shown when
/// it is unset or invalid.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("finanzas=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
