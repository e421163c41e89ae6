/// Milliseconds in one calendar day
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Days between two consecutive parties
pub const PARTY_INTERVAL_DAYS: i64 = 1000;

/// Number of rows in a default milestone table (day 0 through day 29000)
pub const DEFAULT_PARTY_LIMIT: u32 = 30;

/// Returned by the name tables for an index outside their range
pub const NOT_APPLICABLE: &str = "n/a";

/// Days in a week, length of every weekday table
pub const DAYS_IN_WEEK: usize = 7;

/// Months in a year, length of every month table
pub const MONTHS_IN_YEAR: usize = 12;

/// Digits per thousands group
pub(crate) const GROUP_SIZE: usize = 3;

/// Separator between integer and fraction in `f64` renderings
pub(crate) const RAW_DECIMAL_SEPARATOR: char = '.';

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
