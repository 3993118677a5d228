//! The movement ledger
//!
//! `Ledger` is the single owner of the movement list. Every mutation
//! persists the full list, recomputes the cached [`LedgerSnapshot`] and pushes
//! it to subscribers before returning, so readers never observe aggregates
//! that lag behind the list.
//!
//! # Example
//!
//! ```
//! use finanzas::ledger::{Calendar, Ledger, YearMonth};
//! use finanzas::models::{Category, Money, Movement};
//! use finanzas::storage::InMemoryStore;
//! use chrono::{TimeZone, Utc};
//!
//! let october = YearMonth::new(2026, 10).unwrap();
//! let mut ledger = Ledger::open(InMemoryStore::new(), Calendar::utc(), october);
//!
//! let lunch = Movement::expense(Category::Food, Money::from_units(18))
//!     .date(Utc.with_ymd_and_hms(2026, 10, 3, 13, 0, 0).unwrap())
//!     .build()
//!     .unwrap();
//! ledger.add(lunch);
//!
//! assert_eq!(ledger.snapshot().month_expense(), Money::from_units(18));
//! ```

pub mod aggregate;
pub mod calendar;

pub use aggregate::{
    CategoryTotal, DailyBalance, LedgerSnapshot, MonthlyPoint, RecurringSplit, Scope, Totals,
    HISTORY_MONTHS, TOP_CATEGORY_LIMIT,
};
pub use calendar::{Calendar, YearMonth};

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{FinanzasError, FinanzasResult};
use crate::models::{Money, Movement, MovementId};
use crate::storage::MovementRepository;

/// Handle returned by [`Ledger::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&LedgerSnapshot)>;

/// Owns the movement list and keeps its aggregates current
pub struct Ledger<R: MovementRepository> {
    repository: R,
    calendar: Calendar,
    movements: Vec<Movement>,
    snapshot: LedgerSnapshot,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<R: MovementRepository> Ledger<R> {
    /// Load persisted movements and compute the first snapshot
    ///
    /// Unreadable stored data is logged and replaced by an empty ledger.
    pub fn open(repository: R, calendar: Calendar, selected_month: YearMonth) -> Self {
        let mut movements = match repository.load() {
            Ok(movements) => movements,
            Err(e) => {
                tracing::warn!(error = %e, "Could not load movements, starting empty");
                Vec::new()
            }
        };

        for movement in &movements {
            if let Err(e) = movement.validate() {
                tracing::warn!(id = %movement.id, error = %e, "Loaded invalid movement");
            }
        }

        movements.sort_by(|a, b| b.date.cmp(&a.date));
        let snapshot = LedgerSnapshot::compute(&movements, selected_month, &calendar);

        Self {
            repository,
            calendar,
            movements,
            snapshot,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current aggregates
    pub fn snapshot(&self) -> &LedgerSnapshot {
        &self.snapshot
    }

    /// Every movement, most recently added or dated first
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn selected_month(&self) -> YearMonth {
        self.snapshot.selected_month
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    pub fn get(&self, id: MovementId) -> Option<&Movement> {
        self.movements.iter().find(|m| m.id == id)
    }

    /// Find the single movement whose ID starts with `fragment`
    pub fn resolve(&self, fragment: &str) -> FinanzasResult<&Movement> {
        let mut matches = self.movements.iter().filter(|m| m.id.matches_prefix(fragment));
        let first = matches
            .next()
            .ok_or_else(|| FinanzasError::movement_not_found(fragment))?;

        if matches.next().is_some() {
            return Err(FinanzasError::Validation(format!(
                "'{}' matches more than one movement, use a longer ID",
                fragment
            )));
        }

        Ok(first)
    }

    /// Insert a movement at the head of the list
    pub fn add(&mut self, movement: Movement) -> &LedgerSnapshot {
        tracing::info!(id = %movement.id, kind = %movement.movement_type, amount = %movement.amount, "Adding movement");
        self.movements.insert(0, movement);
        self.persist();
        self.recompute();
        &self.snapshot
    }

    /// Remove the movement with `id`, returning whether one was removed
    ///
    /// Deleting an unknown ID leaves the ledger untouched.
    pub fn delete(&mut self, id: MovementId) -> bool {
        let Some(index) = self.movements.iter().position(|m| m.id == id) else {
            tracing::debug!(%id, "Delete ignored, no such movement");
            return false;
        };

        self.movements.remove(index);
        tracing::info!(%id, "Deleted movement");
        self.persist();
        self.recompute();
        true
    }

    /// Change the reporting month
    pub fn select_month(&mut self, month: YearMonth) -> &LedgerSnapshot {
        self.snapshot = LedgerSnapshot::compute(&self.movements, month, &self.calendar);
        self.notify();
        &self.snapshot
    }

    /// Change the reporting month to the one containing `date`
    pub fn set_selected_month(&mut self, date: DateTime<Utc>) -> &LedgerSnapshot {
        let month = self.calendar.year_month(date);
        self.select_month(month)
    }

    /// Register a callback run with the new snapshot after every change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&LedgerSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Net balance of the local day containing `instant`
    pub fn daily_balance(&self, instant: DateTime<Utc>) -> Money {
        aggregate::daily_balance(&self.movements, instant, &self.calendar)
    }

    /// Net balance of a local calendar date
    pub fn daily_balance_on(&self, date: NaiveDate) -> Money {
        aggregate::daily_balance_on(&self.movements, date, &self.calendar)
    }

    /// Daily balances for every day of the selected month
    pub fn month_calendar(&self) -> Vec<DailyBalance> {
        aggregate::month_calendar(&self.movements, self.selected_month(), &self.calendar)
    }

    /// Six months of expense totals ending with the current month
    pub fn monthly_expense_history(&self) -> Vec<MonthlyPoint> {
        self.monthly_expense_history_at(Utc::now())
    }

    /// Six months of expense totals ending with the month of `now`
    pub fn monthly_expense_history_at(&self, now: DateTime<Utc>) -> Vec<MonthlyPoint> {
        aggregate::monthly_expense_history(&self.movements, now, &self.calendar, HISTORY_MONTHS)
    }

    /// Five largest expense categories over all movements
    pub fn top_categories(&self) -> Vec<CategoryTotal> {
        aggregate::top_categories(&self.movements, TOP_CATEGORY_LIMIT)
    }

    pub fn unique_vs_recurring(&self, scope: Scope) -> RecurringSplit {
        match scope {
            Scope::Month => aggregate::unique_vs_recurring(&self.snapshot.month_movements),
            Scope::AllTime => aggregate::unique_vs_recurring(&self.movements),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save(&self.movements) {
            tracing::warn!(error = %e, "Failed to save movements, keeping in-memory state");
        }
    }

    fn recompute(&mut self) {
        self.snapshot =
            LedgerSnapshot::compute(&self.movements, self.snapshot.selected_month, &self.calendar);
        tracing::debug!(
            month = %self.snapshot.selected_month,
            movements = self.movements.len(),
            "Recomputed aggregates"
        );
        self.notify();
    }

    fn notify(&mut self) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.snapshot);
        }
    }
}
