//! Calendar arithmetic for reporting
//!
//! Movements are stored in UTC; every "which month / which day" question is
//! answered in the user's calendar: a fixed UTC offset, the machine's local
//! zone, or a named IANA zone. The last two follow daylight saving.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FinanzasError, FinanzasResult};

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Fixed(FixedOffset),
    Local,
    Named(Tz),
}

/// Converts UTC instants into local calendar components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    zone: Zone,
}

impl Calendar {
    /// Calendar aligned with UTC
    pub fn utc() -> Self {
        Self {
            zone: Zone::Fixed(Utc.fix()),
        }
    }

    /// Calendar following the machine's local time zone
    pub fn local() -> Self {
        Self { zone: Zone::Local }
    }

    /// Calendar for a fixed offset east of UTC, in minutes
    pub fn with_offset_minutes(minutes: i32) -> FinanzasResult<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self {
                zone: Zone::Fixed(offset),
            })
            .ok_or_else(|| FinanzasError::Config(format!("Invalid UTC offset: {} minutes", minutes)))
    }

    /// Calendar for an IANA zone name such as "Europe/Madrid"
    pub fn with_time_zone(name: &str) -> FinanzasResult<Self> {
        name.trim()
            .parse::<Tz>()
            .map(|tz| Self {
                zone: Zone::Named(tz),
            })
            .map_err(|_| FinanzasError::Config(format!("Unknown time zone: {}", name)))
    }

    /// UTC offset in effect at `instant`
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self.zone {
            Zone::Fixed(offset) => offset,
            Zone::Local => instant.with_timezone(&Local).offset().fix(),
            Zone::Named(tz) => instant.with_timezone(&tz).offset().fix(),
        }
    }

    /// Local calendar date of an instant
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self.zone {
            Zone::Fixed(offset) => instant.with_timezone(&offset).date_naive(),
            Zone::Local => instant.with_timezone(&Local).date_naive(),
            Zone::Named(tz) => instant.with_timezone(&tz).date_naive(),
        }
    }

    /// Local (year, month) of an instant
    pub fn year_month(&self, instant: DateTime<Utc>) -> YearMonth {
        YearMonth::of(self.local_date(instant))
    }

    /// First instant of a local calendar day
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        match self.zone {
            Zone::Fixed(offset) => first_instant(&offset, date),
            Zone::Local => first_instant(&Local, date),
            Zone::Named(tz) => first_instant(&tz, date),
        }
    }

    /// Half-open bounds `[start, end)` of the local day containing `date`
    ///
    /// Days around a daylight saving change are 23 or 25 hours long.
    pub fn day_bounds(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.start_of_day(date);
        let end = date
            .succ_opt()
            .map(|next| self.start_of_day(next))
            .unwrap_or_else(|| start + Duration::days(1));
        (start, end)
    }
}

/// Earliest instant whose local date is `date`
///
/// Midnight itself may fall in a daylight saving gap; the day then starts at
/// the first local time that exists.
fn first_instant<Z: TimeZone>(zone: &Z, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=24 * 4)
        .map(|quarter| midnight + Duration::minutes(15 * quarter))
        .find_map(|local| zone.from_local_datetime(&local).earliest())
        .map(|start| start.with_timezone(&Utc))
        .unwrap_or_else(|| DateTime::from_naive_utc_and_offset(midnight, Utc))
}

impl Default for Calendar {
    fn default() -> Self {
        Self::local()
    }
}

/// A calendar month, independent of any time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// `month` is 1-based
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The month `n` months before this one
    pub fn months_back(&self, n: u32) -> Self {
        let index = self.year as i64 * 12 + (self.month as i64 - 1) - n as i64;
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn previous(&self) -> Self {
        self.months_back(1)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Every date of the month, in order
    pub fn days(&self) -> Vec<NaiveDate> {
        let month = self.month;
        self.first_day()
            .map(|first| {
                first
                    .iter_days()
                    .take_while(|d| d.month() == month)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Human-readable label, e.g. "Octubre 2026"
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = FinanzasError;

    /// Parse "YYYY-MM"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            FinanzasError::Validation(format!("Invalid month '{}': expected YYYY-MM", s.trim()))
        };

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}
