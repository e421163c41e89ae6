use crate::PartyError;
use crate::consts::DEFAULT_PARTY_LIMIT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rows in a milestone table, guaranteed to be a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Limit(u32);

impl Limit {
    /// The default table size: parties from day 0 through day 29000
    pub const DEFAULT: Self = Self(DEFAULT_PARTY_LIMIT);

    /// Creates a new Limit, validating that it's non-negative and fits in a `u32`
    ///
    /// # Errors
    /// Returns `PartyError::InvalidBound` if the value is negative or too large.
    pub fn new(value: i64) -> Result<Self, PartyError> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| PartyError::InvalidBound(value.to_string()))
    }

    /// Returns the limit as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Limit {
    type Error = PartyError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Limit {
    type Error = PartyError;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
            return Err(PartyError::InvalidBound(value.to_string()));
        }
        // Integral and within u32, so the cast is exact
        Self::new(value as i64)
    }
}

impl From<Limit> for u32 {
    fn from(limit: Limit) -> Self {
        limit.0
    }
}

impl FromStr for Limit {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(whole) = trimmed.parse::<i64>() {
            return Self::new(whole);
        }
        trimmed
            .parse::<f64>()
            .map_err(|_| PartyError::InvalidBound(trimmed.to_owned()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
