//! Age between a birth date and a reference date, in days and in years+days.
//!
//! The year count uses the completed-anniversary rule: a year only counts once
//! the birthday's month and day have been reached in the reference year.
//!
//! Total days are floored while the days since the last birthday are ceiled.
//! Both roundings are kept as they are, so near a time-of-day boundary
//! `age_remaining_days` can be one more than the floored gap.

use serde::Serialize;

use crate::time::milliseconds_to_days;
use crate::{CalendarDate, PartyError};

/// Elapsed age at a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AgeResult {
    /// Whole days elapsed since birth (floored)
    pub age_days:           i64,
    /// Completed birthdays on or before the reference date
    pub age_years:          i32,
    /// Days from the last birthday to the reference date (ceiled)
    pub age_remaining_days: i64,
    /// Birth date advanced by `age_years` years
    pub last_birthday_date: CalendarDate,
}

/// Number of completed year-anniversaries of `birth` on or before `reference`.
///
/// Negative when `reference` precedes `birth`.
pub fn calc_years(birth: &CalendarDate, reference: &CalendarDate) -> i32 {
    let years = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}

/// Computes the age of someone born at `birth` as seen from `reference`.
///
/// # Errors
/// Returns `PartyError::OutOfRange` if the last birthday cannot be represented.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn calc_age(birth: &CalendarDate, reference: &CalendarDate) -> Result<AgeResult, PartyError> {
    if reference < birth {
        tracing::warn!(%birth, %reference, "reference date precedes birth date");
    }

    let age_years = calc_years(birth, reference);
    let age_days = milliseconds_to_days(reference.millis_since(birth) as f64).floor() as i64;
    let last_birthday_date = birth.with_year(birth.year() + age_years)?;
    let age_remaining_days =
        milliseconds_to_days(reference.millis_since(&last_birthday_date) as f64).ceil() as i64;

    tracing::debug!(
        %birth,
        %reference,
        age_days,
        age_years,
        age_remaining_days,
        "calculated age"
    );

    Ok(AgeResult {
        age_days,
        age_years,
        age_remaining_days,
        last_birthday_date,
    })
}
