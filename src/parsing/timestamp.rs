//! Strict `DD/MM/YY, H:MM[:SS] AM|PM` timestamp parsing.
//!
//! The clock goes through chrono's `%I:%M[:%S] %p`. The date is split by
//! hand because chrono's `%y` reads `69` as 2069; here `00..=68` maps to
//! 2000-2068 and `69..=99` to 1969-1999.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Highest two-digit year that maps into the 2000s.
pub const YEAR_PIVOT: u32 = 68;

/// Whether the clock carries a seconds field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPrecision {
    /// `H:MM:SS` (bracketed exports)
    Seconds,
    /// `H:MM` (dashed exports)
    Minutes,
}

/// Parses a date, a 12-hour clock and its AM/PM marker.
///
/// Returns `None` for anything outside the strict shape: a day or month that
/// is not two digits, an impossible calendar date, an hour outside `1..=12`,
/// or a meridiem other than am/pm (either case).
///
/// # Example
///
/// ```rust
/// use chatstat::parsing::{ClockPrecision, parse_timestamp};
///
/// let ts = parse_timestamp("15/08/23", "9:05", "am", ClockPrecision::Minutes).unwrap();
/// assert_eq!(ts.to_string(), "2023-08-15 09:05:00");
///
/// assert!(parse_timestamp("31/02/23", "9:05", "am", ClockPrecision::Minutes).is_none());
/// ```
pub fn parse_timestamp(
    date: &str,
    clock: &str,
    meridiem: &str,
    precision: ClockPrecision,
) -> Option<NaiveDateTime> {
    let date = parse_date(date)?;
    let time = parse_clock(clock, meridiem, precision)?;
    Some(date.and_time(time))
}

/// Expands a two-digit year using the fixed pivot.
///
/// ```rust
/// use chatstat::parsing::expand_two_digit_year;
///
/// assert_eq!(expand_two_digit_year(23), 2023);
/// assert_eq!(expand_two_digit_year(68), 2068);
/// assert_eq!(expand_two_digit_year(69), 1969);
/// ```
pub fn expand_two_digit_year(yy: u32) -> i32 {
    let base = if yy <= YEAR_PIVOT { 2000 } else { 1900 };
    base + yy as i32
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    let mut parts = date.split('/');
    let day = fixed_digits(parts.next()?, 2)?;
    let month = fixed_digits(parts.next()?, 2)?;
    let year = fixed_digits(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(expand_two_digit_year(year), month, day)
}

fn parse_clock(clock: &str, meridiem: &str, precision: ClockPrecision) -> Option<NaiveTime> {
    let pattern = match precision {
        ClockPrecision::Seconds => "%I:%M:%S %p",
        ClockPrecision::Minutes => "%I:%M %p",
    };
    NaiveTime::parse_from_str(&format!("{clock} {meridiem}"), pattern).ok()
}

fn fixed_digits(s: &str, len: usize) -> Option<u32> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_seconds_precision() {
        let ts = parse_timestamp("15/08/23", "9:07:30", "AM", ClockPrecision::Seconds).unwrap();
        assert_eq!(ts.year(), 2023);
        assert_eq!(ts.month(), 8);
        assert_eq!(ts.day(), 15);
        assert_eq!(ts.hour(), 9);
        assert_eq!(ts.minute(), 7);
        assert_eq!(ts.second(), 30);
    }

    #[test]
    fn test_twelve_oclock_edges() {
        let midnight = parse_timestamp("01/01/24", "12:00", "am", ClockPrecision::Minutes).unwrap();
        assert_eq!(midnight.hour(), 0);

        let noon = parse_timestamp("01/01/24", "12:00", "pm", ClockPrecision::Minutes).unwrap();
        assert_eq!(noon.hour(), 12);

        let evening = parse_timestamp("01/01/24", "11:59", "PM", ClockPrecision::Minutes).unwrap();
        assert_eq!(evening.hour(), 23);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(parse_timestamp("01/01/24", "13:00", "pm", ClockPrecision::Minutes).is_none());
        assert!(parse_timestamp("01/01/24", "0:30", "am", ClockPrecision::Minutes).is_none());
        assert!(parse_timestamp("01/01/24", "9:60", "am", ClockPrecision::Minutes).is_none());
        assert!(parse_timestamp("01/13/24", "9:00", "am", ClockPrecision::Minutes).is_none());
        assert!(parse_timestamp("29/02/23", "9:00", "am", ClockPrecision::Minutes).is_none());
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(parse_timestamp("1/01/24", "9:00", "am", ClockPrecision::Minutes).is_none());
        assert!(parse_timestamp("01/01/2024", "9:00", "am", ClockPrecision::Minutes).is_none());
        assert!(parse_timestamp("01/01/24", "9:00", "xm", ClockPrecision::Minutes).is_none());
        assert!(parse_timestamp("01/01/24", "9:00", "am", ClockPrecision::Seconds).is_none());
        assert!(parse_timestamp("01/01/24", "9:00:00", "am", ClockPrecision::Minutes).is_none());
        assert!(parse_timestamp("01/01/24", "109:00", "am", ClockPrecision::Minutes).is_none());
    }

    #[test]
    fn test_meridiem_case_insensitive() {
        let lower = parse_timestamp("01/01/24", "12:30:15", "pm", ClockPrecision::Seconds);
        let upper = parse_timestamp("01/01/24", "12:30:15", "PM", ClockPrecision::Seconds);
        assert_eq!(lower, upper);
        assert_eq!(lower.unwrap().hour(), 12);
    }

    #[test]
    fn test_sixty_nine_is_last_century() {
        let ts = parse_timestamp("01/01/69", "12:00:00", "PM", ClockPrecision::Seconds).unwrap();
        assert_eq!(ts.year(), 1969);
        assert_eq!(ts.hour(), 12);

        let ts = parse_timestamp("31/12/68", "11:59:59", "PM", ClockPrecision::Seconds).unwrap();
        assert_eq!(ts.year(), 2068);
    }

    #[test]
    fn test_leap_day_accepted() {
        assert!(parse_timestamp("29/02/24", "9:00", "am", ClockPrecision::Minutes).is_some());
    }

    #[test]
    fn test_year_pivot() {
        assert_eq!(expand_two_digit_year(0), 2000);
        assert_eq!(expand_two_digit_year(68), 2068);
        assert_eq!(expand_two_digit_year(69), 1969);
        assert_eq!(expand_two_digit_year(99), 1999);
    }
}
