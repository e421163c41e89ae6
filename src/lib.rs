mod age;
mod config;
mod consts;
mod locale;
mod party;
mod prelude;
mod time;
mod types;

#[cfg(test)]
mod test_utils;

pub use age::{AgeResult, calc_age, calc_years};
pub use config::PartyConfig;
pub use consts::*;
pub use locale::Locale;
pub use party::{
    MilestoneEntry, PartyResult, calc_next_party, calc_next_party_today, calc_parties,
    calc_parties_from_today, next_party_in, parties_in,
};
pub use time::{days_to_milliseconds, milliseconds_to_days};
pub use types::Limit;

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeDelta, Timelike};
use std::fmt;
use std::str::FromStr;

/// A local wall-clock instant with millisecond precision.
///
/// No timezone is attached: callers hand in values already expressed in the
/// local time they care about, and elapsed time is measured on that clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct CalendarDate(NaiveDateTime);

/// Errors raised while validating inputs or doing date arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartyError {
    /// The value is not a well-formed calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A milestone bound that is negative, fractional or not finite.
    #[error("Invalid bound: {0} (must be a non-negative integer)")]
    InvalidBound(String),

    /// A locale tag with no name table.
    #[error("Unsupported locale: {0}")]
    InvalidLocale(String),

    /// Date arithmetic left the representable range.
    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

/// Accepted text layouts, tried in order
const PARSE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Years `%Y` reads and writes without an explicit sign
const UNSIGNED_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Drops sub-millisecond digits and folds a leap second into the last
/// millisecond of its minute.
fn to_millis(dt: NaiveDateTime) -> NaiveDateTime {
    let dt = if dt.nanosecond() >= 1_000_000_000 {
        dt.with_nanosecond(999_000_000).unwrap_or(dt)
    } else {
        dt
    };
    dt.trunc_subsecs(3)
}

impl CalendarDate {
    /// Midnight of the given day. `month` is 1-based (1 = January).
    ///
    /// # Errors
    /// Returns `PartyError::InvalidDate` if the combination is not a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, PartyError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self(date.and_time(NaiveTime::MIN)))
            .ok_or_else(|| PartyError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// A full timestamp. `month` is 1-based.
    ///
    /// # Errors
    /// Returns `PartyError::InvalidDate` if any component is out of range.
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> Result<Self, PartyError> {
        let invalid = || {
            PartyError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{milli:03}"
            ))
        };
        // chrono reserves milli >= 1000 for leap seconds
        if milli >= 1000 {
            return Err(invalid());
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_milli_opt(hour, minute, second, milli))
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Reads the local system clock
    pub fn now() -> Self {
        Self(to_millis(Local::now().naive_local()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1-based
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Month, 0-based (0 = January), as the locale tables index it
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    /// Day of month, 1-based
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of week, 0 = Sunday through 6 = Saturday
    pub fn weekday0(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub const fn date_time(&self) -> NaiveDateTime {
        self.0
    }

    /// Signed milliseconds from `earlier` to `self`
    pub fn millis_since(&self, earlier: &Self) -> i64 {
        (self.0 - earlier.0).num_milliseconds()
    }

    /// Moves the date by a whole number of days using millisecond arithmetic.
    ///
    /// # Errors
    /// Returns `PartyError::OutOfRange` if the result cannot be represented.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn add_days(&self, days: i64) -> Result<Self, PartyError> {
        let out_of_range = || PartyError::OutOfRange(format!("{self} + {days} days"));
        let ms = time::days_to_milliseconds(days as f64) as i64;
        TimeDelta::try_milliseconds(ms)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
            .ok_or_else(out_of_range)
    }

    /// Same month, day and time in another year.
    /// February 29 moved into a common year rolls over to March 1.
    ///
    /// # Errors
    /// Returns `PartyError::OutOfRange` if the year cannot be represented.
    pub fn with_year(&self, year: i32) -> Result<Self, PartyError> {
        if let Some(moved) = self.0.with_year(year) {
            return Ok(Self(moved));
        }
        let rolled = if self.month() == 2 && self.day() == 29 {
            NaiveDate::from_ymd_opt(year, 3, 1).map(|date| date.and_time(self.0.time()))
        } else {
            None
        };
        rolled
            .map(Self)
            .ok_or_else(|| PartyError::OutOfRange(format!("{self} moved to year {year}")))
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(dt: NaiveDateTime) -> Self {
        Self(to_millis(dt))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        if UNSIGNED_YEARS.contains(&year) {
            write!(f, "{year:04}")?;
        } else {
            write!(f, "{year:+05}")?;
        }
        write!(
            f,
            "{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            self.month(),
            self.day()
        )?;
        let time = self.0.time();
        if time == NaiveTime::MIN {
            return Ok(());
        }
        write!(
            f,
            "T{:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second()
        )?;
        let millis = time.nanosecond() / 1_000_000;
        if millis != 0 {
            write!(f, ".{millis:03}")?;
        }
        Ok(())
    }
}

impl FromStr for CalendarDate {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PartyError::InvalidDate("empty date string".to_owned()));
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_ONLY_FORMAT) {
            return Ok(date.into());
        }

        PARSE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(Self::from)
            .ok_or_else(|| PartyError::InvalidDate(trimmed.to_owned()))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
