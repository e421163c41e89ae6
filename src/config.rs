//! Presentation settings: which locale labels are rendered in, and how many
//! rows a party table has.

use serde::{Deserialize, Serialize};

use crate::party::{next_party_in, parties_in};
use crate::{CalendarDate, Limit, Locale, MilestoneEntry, PartyError, PartyResult};

/// Locale and table size, deserializable from any serde format.
/// Missing fields fall back to Spanish and `Limit::DEFAULT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyConfig {
    pub locale:      Locale,
    pub party_limit: Limit,
}

impl PartyConfig {
    pub const fn new(locale: Locale, party_limit: Limit) -> Self {
        Self {
            locale,
            party_limit,
        }
    }

    /// # Errors
    /// Returns `PartyError::OutOfRange` if the party date cannot be represented.
    pub fn next_party(
        &self,
        birth: &CalendarDate,
        reference: &CalendarDate,
    ) -> Result<PartyResult, PartyError> {
        next_party_in(self.locale, birth, reference)
    }

    /// Party table with `party_limit` rows.
    ///
    /// # Errors
    /// Returns `PartyError::OutOfRange` if a party date cannot be represented.
    pub fn parties(&self, birth: &CalendarDate) -> Result<Vec<MilestoneEntry>, PartyError> {
        parties_in(self.locale, birth, self.party_limit)
    }

    pub fn format_date(&self, date: &CalendarDate) -> String {
        self.locale.format_date(date)
    }

    pub fn format_number<N: std::fmt::Display>(&self, n: N) -> String {
        self.locale.to_locale_number(n)
    }
}
