//! Derived reporting values
//!
//! Pure functions over a movement slice. The ledger calls these after every
//! mutation to rebuild its snapshot; reports call them directly for values
//! that aren't cached (history, daily balances, splits).

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use super::calendar::{Calendar, YearMonth};
use crate::models::{Category, Money, Movement, MovementType};

/// Number of months covered by the expense history
pub const HISTORY_MONTHS: u32 = 6;

/// Number of categories kept in the all-time ranking
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Income and expense sums over some set of movements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
}

impl Totals {
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }
}

/// Summed expenses of one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: Money,
}

/// One month of the expense history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyPoint {
    pub month: YearMonth,
    pub label: String,
    pub amount: Money,
}

/// Net balance of one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub balance: Money,
}

/// Expenses split by the recurring flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecurringSplit {
    pub unique: Money,
    pub recurring: Money,
}

impl RecurringSplit {
    pub fn total(&self) -> Money {
        self.unique + self.recurring
    }
}

/// Which movements a split is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Movements of the selected reporting month
    Month,
    /// Every movement
    AllTime,
}

/// Movements whose local (year, month) equals `month`, newest first
pub fn month_movements(movements: &[Movement], month: YearMonth, calendar: &Calendar) -> Vec<Movement> {
    let mut filtered: Vec<Movement> = movements
        .iter()
        .filter(|m| month.contains(calendar.local_date(m.date)))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

/// Income and expense sums
pub fn totals<'a, I>(movements: I) -> Totals
where
    I: IntoIterator<Item = &'a Movement>,
{
    movements
        .into_iter()
        .fold(Totals::default(), |mut acc, m| {
            match m.movement_type {
                MovementType::Income => acc.income += m.amount,
                MovementType::Expense => acc.expense += m.amount,
            }
            acc
        })
}

/// Expenses grouped by category, largest first
///
/// Categories with equal sums keep declaration order.
pub fn expense_by_category<'a, I>(movements: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Movement>,
{
    let mut grouped: BTreeMap<Category, Money> = BTreeMap::new();
    for movement in movements.into_iter().filter(|m| m.is_expense()) {
        *grouped.entry(movement.category).or_default() += movement.amount;
    }

    let mut ranked: Vec<CategoryTotal> = grouped
        .into_iter()
        .map(|(category, amount)| CategoryTotal { category, amount })
        .collect();
    // Stable sort over the BTreeMap's category order
    ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
    ranked
}

/// The all-time top expense categories
pub fn top_categories(movements: &[Movement], limit: usize) -> Vec<CategoryTotal> {
    let mut ranked = expense_by_category(movements);
    ranked.truncate(limit);
    ranked
}

/// Expense totals of the `months` calendar months ending with the month of
/// `now`, oldest first
pub fn monthly_expense_history(
    movements: &[Movement],
    now: DateTime<Utc>,
    calendar: &Calendar,
    months: u32,
) -> Vec<MonthlyPoint> {
    let current = calendar.year_month(now);

    let mut sums: BTreeMap<YearMonth, Money> = BTreeMap::new();
    for movement in movements.iter().filter(|m| m.is_expense()) {
        *sums.entry(calendar.year_month(movement.date)).or_default() += movement.amount;
    }

    (0..months)
        .rev()
        .map(|i| {
            let month = current.months_back(i);
            MonthlyPoint {
                month,
                label: month.label(),
                amount: sums.get(&month).copied().unwrap_or_default(),
            }
        })
        .collect()
}

/// Income minus expense of movements inside the local day `date`
pub fn daily_balance_on(movements: &[Movement], date: NaiveDate, calendar: &Calendar) -> Money {
    let (start, end) = calendar.day_bounds(date);
    totals(movements.iter().filter(|m| m.date >= start && m.date < end)).balance()
}

/// Income minus expense of the local day containing `instant`
pub fn daily_balance(movements: &[Movement], instant: DateTime<Utc>, calendar: &Calendar) -> Money {
    daily_balance_on(movements, calendar.local_date(instant), calendar)
}

/// Daily balances for every day of `month`
pub fn month_calendar(movements: &[Movement], month: YearMonth, calendar: &Calendar) -> Vec<DailyBalance> {
    month
        .days()
        .into_iter()
        .map(|date| DailyBalance {
            date,
            balance: daily_balance_on(movements, date, calendar),
        })
        .collect()
}

/// Expenses summed separately for one-off and recurring movements
pub fn unique_vs_recurring<'a, I>(movements: I) -> RecurringSplit
where
    I: IntoIterator<Item = &'a Movement>,
{
    movements
        .into_iter()
        .filter(|m| m.is_expense())
        .fold(RecurringSplit::default(), |mut acc, m| {
            if m.is_recurring {
                acc.recurring += m.amount;
            } else {
                acc.unique += m.amount;
            }
            acc
        })
}

/// Cached aggregates for the selected month and the whole ledger
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSnapshot {
    pub selected_month: YearMonth,
    /// Movements of the selected month, newest first
    pub month_movements: Vec<Movement>,
    pub month_totals: Totals,
    pub all_time_totals: Totals,
    pub month_expense_by_category: Vec<CategoryTotal>,
}

impl LedgerSnapshot {
    pub fn compute(movements: &[Movement], selected_month: YearMonth, calendar: &Calendar) -> Self {
        let month_movements = month_movements(movements, selected_month, calendar);
        let month_totals = totals(&month_movements);
        let month_expense_by_category = expense_by_category(&month_movements);

        Self {
            selected_month,
            month_totals,
            all_time_totals: totals(movements),
            month_expense_by_category,
            month_movements,
        }
    }

    pub fn month_income(&self) -> Money {
        self.month_totals.income
    }

    pub fn month_expense(&self) -> Money {
        self.month_totals.expense
    }

    pub fn month_balance(&self) -> Money {
        self.month_totals.balance()
    }

    pub fn total_balance(&self) -> Money {
        self.all_time_totals.balance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn expense(category: Category, units: i64, date: DateTime<Utc>) -> Movement {
        Movement::expense(category, Money::from_units(units))
            .date(date)
            .build()
            .unwrap()
    }

    fn income(units: i64, date: DateTime<Utc>) -> Movement {
        Movement::income(Category::Salary, Money::from_units(units))
            .date(date)
            .build()
            .unwrap()
    }

    fn preview_movements() -> Vec<Movement> {
        vec![
            income(120000, now()),
            expense(Category::Food, 18500, now() - Duration::days(1)),
            expense(Category::Transport, 6200, now() - Duration::days(2)),
            expense(Category::Leisure, 4500, now() - Duration::days(3)),
        ]
    }

    #[test]
    fn test_month_filter_uses_calendar_month() {
        let calendar = Calendar::utc();
        let mut movements = preview_movements();
        // 30 days back is still within a rolling window but in September
        movements.push(expense(Category::Home, 999, now() - Duration::days(30)));

        let october = YearMonth::new(2026, 10).unwrap();
        let filtered = month_movements(&movements, october, &calendar);

        assert_eq!(filtered.len(), 4);
        assert!(filtered.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_expense_by_category_sorted_descending() {
        let ranked = expense_by_category(&preview_movements());
        let pairs: Vec<_> = ranked.iter().map(|c| (c.category, c.amount)).collect();
        assert_eq!(
            pairs,
            vec![
                (Category::Food, Money::from_units(18500)),
                (Category::Transport, Money::from_units(6200)),
                (Category::Leisure, Money::from_units(4500)),
            ]
        );
    }

    #[test]
    fn test_category_ties_use_declaration_order() {
        let movements = vec![
            expense(Category::Shopping, 100, now()),
            expense(Category::Food, 100, now()),
            expense(Category::Health, 100, now()),
        ];
        let order: Vec<_> = expense_by_category(&movements)
            .into_iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(order, vec![Category::Food, Category::Health, Category::Shopping]);
    }

    #[test]
    fn test_top_categories_truncates() {
        let movements: Vec<_> = Category::EXPENSE
            .iter()
            .enumerate()
            .map(|(i, c)| expense(*c, (i as i64 + 1) * 10, now()))
            .collect();

        let top = top_categories(&movements, TOP_CATEGORY_LIMIT);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].category, Category::Other);
        assert_eq!(top[0].amount, Money::from_units(80));
        assert_eq!(top[4].category, Category::Home);
    }

    #[test]
    fn test_history_with_current_month_only() {
        let history =
            monthly_expense_history(&preview_movements(), now(), &Calendar::utc(), HISTORY_MONTHS);

        assert_eq!(history.len(), 6);
        assert_eq!(history[0].month, YearMonth::new(2026, 5).unwrap());
        assert_eq!(history[5].month, YearMonth::new(2026, 10).unwrap());
        assert_eq!(history[5].label, "Octubre 2026");
        assert_eq!(history[5].amount, Money::from_units(29200));
        assert!(history[..5].iter().all(|p| p.amount.is_zero()));
    }

    #[test]
    fn test_history_ignores_months_outside_window() {
        let movements = vec![
            expense(Category::Food, 10, Utc.with_ymd_and_hms(2026, 4, 30, 12, 0, 0).unwrap()),
            expense(Category::Food, 20, Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()),
            income(500, Utc.with_ymd_and_hms(2026, 5, 2, 12, 0, 0).unwrap()),
        ];
        let history = monthly_expense_history(&movements, now(), &Calendar::utc(), HISTORY_MONTHS);
        let total: Money = history.iter().map(|p| p.amount).sum();
        assert_eq!(total, Money::from_units(20));
        assert_eq!(history[0].amount, Money::from_units(20));
    }

    #[test]
    fn test_daily_balance_same_day() {
        let calendar = Calendar::utc();
        let day = NaiveDate::from_ymd_opt(2026, 10, 10).unwrap();
        let movements = vec![
            expense(Category::Food, 30, Utc.with_ymd_and_hms(2026, 10, 10, 9, 0, 0).unwrap()),
            expense(Category::Food, 20, Utc.with_ymd_and_hms(2026, 10, 10, 23, 0, 0).unwrap()),
            income(100, Utc.with_ymd_and_hms(2026, 10, 10, 12, 0, 0).unwrap()),
        ];

        assert_eq!(daily_balance_on(&movements, day, &calendar), Money::from_units(50));
        let at = Utc.with_ymd_and_hms(2026, 10, 10, 15, 0, 0).unwrap();
        assert_eq!(daily_balance(&movements, at, &calendar), Money::from_units(50));
        // Pure function of list and date
        assert_eq!(
            daily_balance(&movements, at, &calendar),
            daily_balance(&movements, at, &calendar)
        );
    }

    #[test]
    fn test_daily_balance_boundaries() {
        let calendar = Calendar::utc();
        let last_ms = Utc.with_ymd_and_hms(2026, 10, 10, 23, 59, 59).unwrap()
            + Duration::milliseconds(999);
        let midnight = Utc.with_ymd_and_hms(2026, 10, 11, 0, 0, 0).unwrap();
        let movements = vec![
            expense(Category::Food, 10, last_ms),
            expense(Category::Transport, 25, midnight),
        ];

        let day_n = NaiveDate::from_ymd_opt(2026, 10, 10).unwrap();
        let day_n1 = NaiveDate::from_ymd_opt(2026, 10, 11).unwrap();
        assert_eq!(daily_balance_on(&movements, day_n, &calendar), Money::from_units(-10));
        assert_eq!(daily_balance_on(&movements, day_n1, &calendar), Money::from_units(-25));
    }

    #[test]
    fn test_summer_time_movement_lands_in_local_month() {
        let madrid = Calendar::with_time_zone("Europe/Madrid").unwrap();
        // 00:30 on July 1 local, while CEST is in effect
        let churros = expense(Category::Food, 12, Utc.with_ymd_and_hms(2026, 6, 30, 22, 30, 0).unwrap());
        let movements = vec![churros.clone()];
        let july = YearMonth::new(2026, 7).unwrap();
        let july_first = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();

        assert_eq!(month_movements(&movements, july, &madrid), vec![churros]);
        assert!(month_movements(&movements, YearMonth::new(2026, 6).unwrap(), &madrid).is_empty());
        assert_eq!(daily_balance_on(&movements, july_first, &madrid), Money::from_units(-12));

        let days = month_calendar(&movements, july, &madrid);
        assert_eq!(days[0].balance, Money::from_units(-12));
        assert!(days[1..].iter().all(|d| d.balance.is_zero()));
    }

    #[test]
    fn test_month_calendar_covers_every_day() {
        let october = YearMonth::new(2026, 10).unwrap();
        let days = month_calendar(&preview_movements(), october, &Calendar::utc());

        assert_eq!(days.len(), 31);
        let by_day = |d: u32| days[(d - 1) as usize].balance;
        assert_eq!(by_day(18), Money::from_units(120000));
        assert_eq!(by_day(17), Money::from_units(-18500));
        assert!(by_day(1).is_zero());
    }

    #[test]
    fn test_unique_vs_recurring_sums_to_expense_total() {
        let movements = vec![
            expense(Category::Food, 100, now()),
            Movement::expense(Category::Subscriptions, Money::from_units(50))
                .recurring(true)
                .date(now())
                .build()
                .unwrap(),
            Movement::expense(Category::Subscriptions, Money::from_units(30))
                .recurring(true)
                .date(now())
                .build()
                .unwrap(),
            income(1000, now()),
        ];

        let split = unique_vs_recurring(&movements);
        assert_eq!(split.unique, Money::from_units(100));
        assert_eq!(split.recurring, Money::from_units(80));
        assert_eq!(split.total(), totals(&movements).expense);
    }

    #[test]
    fn test_snapshot_scenario() {
        let october = YearMonth::new(2026, 10).unwrap();
        let snapshot = LedgerSnapshot::compute(&preview_movements(), october, &Calendar::utc());

        assert_eq!(snapshot.month_income(), Money::from_units(120000));
        assert_eq!(snapshot.month_expense(), Money::from_units(29200));
        assert_eq!(snapshot.month_balance(), Money::from_units(90800));
        assert_eq!(snapshot.total_balance(), Money::from_units(90800));
        assert_eq!(
            snapshot.month_income() - snapshot.month_expense(),
            snapshot.month_balance()
        );
    }
}
