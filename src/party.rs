//! 1000-day parties: the next one from a reference date, and the full table.
//!
//! A party falls on every multiple of `PARTY_INTERVAL_DAYS` elapsed since birth.
//! Day 0 counts: on the birth date itself (and on any exact multiple) the
//! next party is due the same day.

use serde::Serialize;

use crate::age::calc_age;
use crate::consts::PARTY_INTERVAL_DAYS;
use crate::prelude::*;
use crate::{CalendarDate, Limit, Locale, PartyError};

/// Where someone stands relative to their next 1000-day party
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PartyResult {
    pub age_in_days:                  i64,
    /// Age as a localized "N years and M days" label
    pub age_in_years_and_days:        String,
    /// Always in `0..PARTY_INTERVAL_DAYS`
    pub remaining_days_to_next_party: i64,
    pub next_party_date:              CalendarDate,
    /// Multiple of `PARTY_INTERVAL_DAYS`
    pub next_party_age:               i64,
}

/// One row of the milestone table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)]
#[display(fmt = "{party_day}: {party_date} ({party_age})")]
pub struct MilestoneEntry {
    pub party_day:  i64,
    pub party_date: CalendarDate,
    pub party_age:  String,
}

/// Days from an age in days to the next multiple of `PARTY_INTERVAL_DAYS`.
/// Zero when the age already is a multiple, including age 0.
const fn days_to_next_party(age_days: i64) -> i64 {
    (PARTY_INTERVAL_DAYS - age_days.rem_euclid(PARTY_INTERVAL_DAYS)) % PARTY_INTERVAL_DAYS
}

/// Next party as seen from `reference`, labelled in Spanish.
///
/// # Errors
/// Returns `PartyError::OutOfRange` if the party date cannot be represented.
pub fn calc_next_party(
    birth: &CalendarDate,
    reference: &CalendarDate,
) -> Result<PartyResult, PartyError> {
    next_party_in(Locale::Spanish, birth, reference)
}

/// Next party as seen from `reference`, labelled in `locale`.
///
/// # Errors
/// Returns `PartyError::OutOfRange` if the party date cannot be represented.
pub fn next_party_in(
    locale: Locale,
    birth: &CalendarDate,
    reference: &CalendarDate,
) -> Result<PartyResult, PartyError> {
    let age = calc_age(birth, reference)?;
    let remaining_days_to_next_party = days_to_next_party(age.age_days);
    let next_party_age = age.age_days + remaining_days_to_next_party;
    let next_party_date = reference.add_days(remaining_days_to_next_party)?;

    tracing::debug!(
        %birth,
        %reference,
        remaining_days_to_next_party,
        next_party_age,
        %next_party_date,
        "calculated next party"
    );

    Ok(PartyResult {
        age_in_days: age.age_days,
        age_in_years_and_days: locale.years_and_days(age.age_years, age.age_remaining_days),
        remaining_days_to_next_party,
        next_party_date,
        next_party_age,
    })
}

/// Next party as seen from the local clock right now.
///
/// # Errors
/// Returns `PartyError::OutOfRange` if the party date cannot be represented.
pub fn calc_next_party_today(birth: &CalendarDate) -> Result<PartyResult, PartyError> {
    calc_next_party(birth, &CalendarDate::now())
}

/// Parties on day 0, 1000, 2000, ... up to `limit` rows, labelled in Spanish.
///
/// # Errors
/// Returns `PartyError::OutOfRange` if a party date cannot be represented.
pub fn calc_parties(birth: &CalendarDate, limit: Limit) -> Result<Vec<MilestoneEntry>, PartyError> {
    parties_in(Locale::Spanish, birth, limit)
}

/// Parties on day 0, 1000, 2000, ... up to `limit` rows, labelled in `locale`.
///
/// # Errors
/// Returns `PartyError::OutOfRange` if a party date cannot be represented.
pub fn parties_in(
    locale: Locale,
    birth: &CalendarDate,
    limit: Limit,
) -> Result<Vec<MilestoneEntry>, PartyError> {
    tracing::debug!(%birth, %limit, %locale, "building party table");

    (0..i64::from(limit.get()))
        .map(|i| -> Result<MilestoneEntry, PartyError> {
            let party_day = i * PARTY_INTERVAL_DAYS;
            let party_date = birth.add_days(party_day)?;
            let age = calc_age(birth, &party_date)?;
            let entry = MilestoneEntry {
                party_day,
                party_date,
                party_age: locale.years_and_days(age.age_years, age.age_remaining_days),
            };
            tracing::trace!(%entry, "party");
            Ok(entry)
        })
        .collect()
}

/// Party table for someone born right now.
///
/// # Errors
/// Returns `PartyError::OutOfRange` if a party date cannot be represented.
pub fn calc_parties_from_today(limit: Limit) -> Result<Vec<MilestoneEntry>, PartyError> {
    calc_parties(&CalendarDate::now(), limit)
}
