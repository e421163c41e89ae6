//! Conversions between day counts and millisecond counts.
//!
//! Neither direction rounds; callers pick floor or ceil explicitly.

use crate::consts::MS_PER_DAY;

/// Converts days to milliseconds
#[inline]
pub fn days_to_milliseconds(days: f64) -> f64 {
    days * MS_PER_DAY
}

/// Converts milliseconds to (possibly fractional) days
#[inline]
pub fn milliseconds_to_days(ms: f64) -> f64 {
    ms / MS_PER_DAY
}
