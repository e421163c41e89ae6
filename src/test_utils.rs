//! Shorthand constructors for tests.

use crate::CalendarDate;

pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("test date must be valid")
}

pub fn date_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    milli: u32,
) -> CalendarDate {
    CalendarDate::from_ymd_hms_milli(year, month, day, hour, minute, second, milli)
        .expect("test timestamp must be valid")
}
