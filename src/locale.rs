//! Weekday and month names, long date strings and number grouping.
//!
//! Each supported locale is one `LocaleTable`; adding a locale means adding a
//! table, not another branch per lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::consts::{DAYS_IN_WEEK, GROUP_SIZE, MONTHS_IN_YEAR, NOT_APPLICABLE, RAW_DECIMAL_SEPARATOR};
use crate::{CalendarDate, PartyError};

/// Languages the formatter can render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    Spanish,
    English,
}

struct LocaleTable {
    tag:                 &'static str,
    weekdays:            [&'static str; DAYS_IN_WEEK],
    months:              [&'static str; MONTHS_IN_YEAR],
    thousands_separator: char,
    decimal_separator:   char,
    years_word:          &'static str,
    days_word:           &'static str,
    and_word:            &'static str,
}

static SPANISH: LocaleTable = LocaleTable {
    tag:                 "es",
    weekdays:            [
        "domingo",
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
    ],
    months:              [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    thousands_separator: '\u{00A0}',
    decimal_separator:   ',',
    years_word:          "años",
    days_word:           "días",
    and_word:            "y",
};

static ENGLISH: LocaleTable = LocaleTable {
    tag:                 "en",
    weekdays:            [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    months:              [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    thousands_separator: ',',
    decimal_separator:   '.',
    years_word:          "years",
    days_word:           "days",
    and_word:            "and",
};

fn lookup<const N: usize>(names: &[&'static str; N], index: i64) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| names.get(i))
        .copied()
        .unwrap_or(NOT_APPLICABLE)
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::Spanish, Self::English];

    fn table(self) -> &'static LocaleTable {
        match self {
            Self::Spanish => &SPANISH,
            Self::English => &ENGLISH,
        }
    }

    /// Short language tag (`es`, `en`)
    pub fn tag(self) -> &'static str {
        self.table().tag
    }

    /// Name of the weekday `n`, 0 = Sunday through 6 = Saturday; "n/a" otherwise
    pub fn day_of_week_name(self, n: i64) -> &'static str {
        lookup(&self.table().weekdays, n)
    }

    /// Name of the month `n`, 0 = January through 11 = December; "n/a" otherwise
    pub fn month_name(self, n: i64) -> &'static str {
        lookup(&self.table().months, n)
    }

    /// Long form of a date.
    ///
    /// Spanish: `sábado 1 de enero de 2000`. English: `Saturday, January 1, 2000`.
    pub fn format_date(self, date: &CalendarDate) -> String {
        let weekday = self.day_of_week_name(i64::from(date.weekday0()));
        let month = self.month_name(i64::from(date.month0()));
        let (day, year) = (date.day(), date.year());
        match self {
            Self::Spanish => format!("{weekday} {day} de {month} de {year}"),
            Self::English => format!("{weekday}, {month} {day}, {year}"),
        }
    }

    /// Age label such as `2 años y 269 días`
    pub fn years_and_days(self, years: i32, days: i64) -> String {
        let table = self.table();
        format!(
            "{years} {} {} {days} {}",
            table.years_word, table.and_word, table.days_word
        )
    }

    /// Renders a number with the locale's separators.
    ///
    /// Only the integer digits are grouped; fractional digits are copied as they
    /// are. Anything that is not a plain decimal rendering (NaN, inf) passes through.
    pub fn to_locale_number<N: fmt::Display>(self, n: N) -> String {
        let raw = n.to_string();
        let table = self.table();

        let (integer, fraction) = match raw.split_once(RAW_DECIMAL_SEPARATOR) {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (raw.as_str(), None),
        };
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", integer),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return raw;
        }

        let mut out = String::with_capacity(raw.len() + digits.len() / GROUP_SIZE * 2);
        out.push_str(sign);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % GROUP_SIZE == 0 {
                out.push(table.thousands_separator);
            }
            out.push(digit);
        }
        if let Some(fraction) = fraction {
            out.push(table.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PartyError::InvalidLocale(trimmed.to_owned()))
    }
}

impl TryFrom<String> for Locale {
    type Error = PartyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_day_of_week_name_spanish() {
        let expected = [
            "domingo",
            "lunes",
            "martes",
            "miércoles",
            "jueves",
            "viernes",
            "sábado",
        ];
        for (n, name) in (0..).zip(expected) {
            assert_eq!(Locale::Spanish.day_of_week_name(n), name);
        }
    }

    #[test]
    fn test_month_name_spanish() {
        assert_eq!(Locale::Spanish.month_name(0), "enero");
        assert_eq!(Locale::Spanish.month_name(8), "septiembre");
        assert_eq!(Locale::Spanish.month_name(11), "diciembre");
    }

    #[test]
    fn test_names_english() {
        assert_eq!(Locale::English.day_of_week_name(0), "Sunday");
        assert_eq!(Locale::English.day_of_week_name(6), "Saturday");
        assert_eq!(Locale::English.month_name(0), "January");
        assert_eq!(Locale::English.month_name(11), "December");
    }

    #[test]
    fn test_out_of_range_names_are_not_applicable() {
        for locale in Locale::ALL {
            for n in [-1, 7, 100, i64::MIN, i64::MAX] {
                assert_eq!(locale.day_of_week_name(n), NOT_APPLICABLE, "{locale} weekday {n}");
            }
            for n in [-1, 12, 13, i64::MIN, i64::MAX] {
                assert_eq!(locale.month_name(n), NOT_APPLICABLE, "{locale} month {n}");
            }
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            Locale::Spanish.format_date(&date(2000, 1, 1)),
            "sábado 1 de enero de 2000"
        );
        assert_eq!(
            Locale::Spanish.format_date(&date(2002, 9, 27)),
            "viernes 27 de septiembre de 2002"
        );
        assert_eq!(
            Locale::English.format_date(&date(2002, 9, 27)),
            "Friday, September 27, 2002"
        );
    }

    #[test]
    fn test_years_and_days() {
        assert_eq!(Locale::Spanish.years_and_days(2, 269), "2 años y 269 días");
        assert_eq!(Locale::English.years_and_days(0, 0), "0 years and 0 days");
    }

    #[test]
    fn test_to_locale_number_cases() {
        struct TestCase {
            locale:   Locale,
            input:    f64,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                locale:   Locale::Spanish,
                input:    1_234_567.0,
                expected: "1\u{00A0}234\u{00A0}567",
            },
            TestCase {
                locale:   Locale::Spanish,
                input:    1234.5,
                expected: "1\u{00A0}234,5",
            },
            TestCase {
                locale:   Locale::Spanish,
                input:    14_433.23,
                expected: "14\u{00A0}433,23",
            },
            TestCase {
                locale:   Locale::Spanish,
                input:    999.0,
                expected: "999",
            },
            TestCase {
                locale:   Locale::Spanish,
                input:    -1_000_000.0,
                expected: "-1\u{00A0}000\u{00A0}000",
            },
            TestCase {
                locale:   Locale::English,
                input:    1_234_567.0,
                expected: "1,234,567",
            },
            TestCase {
                locale:   Locale::English,
                input:    1234.5,
                expected: "1,234.5",
            },
        ];

        for case in &cases {
            assert_eq!(
                case.locale.to_locale_number(case.input),
                case.expected,
                "{} {}",
                case.locale,
                case.input
            );
        }
    }

    #[test]
    fn test_to_locale_number_integers() {
        assert_eq!(Locale::Spanish.to_locale_number(29_000_i64), "29\u{00A0}000");
        assert_eq!(Locale::English.to_locale_number(0_u32), "0");
        assert_eq!(Locale::English.to_locale_number(100_000_u64), "100,000");
    }

    #[test]
    fn test_to_locale_number_fraction_untouched() {
        assert_eq!(Locale::Spanish.to_locale_number(0.123_456), "0,123456");
        assert_eq!(Locale::English.to_locale_number(1.000_01), "1.00001");
    }

    #[test]
    fn test_to_locale_number_passes_non_numeric_through() {
        assert_eq!(Locale::Spanish.to_locale_number(f64::NAN), "NaN");
        assert_eq!(Locale::Spanish.to_locale_number(f64::INFINITY), "inf");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("es".parse::<Locale>().unwrap(), Locale::Spanish);
        assert_eq!(" EN ".parse::<Locale>().unwrap(), Locale::English);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(PartyError::InvalidLocale(_))
        ));
    }

    #[test]
    fn test_locale_serde() {
        let json = serde_json::to_string(&Locale::English).unwrap();
        assert_eq!(json, "\"en\"");

        let parsed: Locale = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(parsed, Locale::Spanish);
    }

    #[test]
    fn test_default_is_spanish() {
        assert_eq!(Locale::default(), Locale::Spanish);
    }
}
