//! Calendar and time features derived from a message timestamp.
//!
//! Everything here is computed from the [`NaiveDateTime`] alone; nothing is
//! re-read from the transcript text.

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// Calendar fields of one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarFeatures {
    /// Date part of the timestamp
    pub date_only: NaiveDate,
    pub year: i32,
    /// 1..=12
    pub month_number: u32,
    /// English month name, e.g. "August"
    pub month_name: &'static str,
    pub day_of_month: u32,
    /// English weekday name, e.g. "Tuesday"
    pub day_name: &'static str,
    pub hour: u32,
    pub minute: u32,
    /// One-hour bucket, `"HH-HH"`, wrapping `"23-00"`
    pub hour_range: String,
}

impl CalendarFeatures {
    /// Derives all fields from a timestamp.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstat::features::CalendarFeatures;
    /// use chrono::NaiveDate;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2023, 8, 15).unwrap().and_hms_opt(23, 5, 0).unwrap();
    /// let features = CalendarFeatures::derive(ts);
    /// assert_eq!(features.month_name, "August");
    /// assert_eq!(features.day_name, "Tuesday");
    /// assert_eq!(features.hour_range, "23-00");
    /// ```
    pub fn derive(timestamp: NaiveDateTime) -> Self {
        let date = timestamp.date();
        let hour = timestamp.hour();

        Self {
            date_only: date,
            year: date.year(),
            month_number: date.month(),
            month_name: month_name(date.month()),
            day_of_month: date.day(),
            day_name: weekday_name(date.weekday()),
            hour,
            minute: timestamp.minute(),
            hour_range: hour_range(hour),
        }
    }
}

/// Formats the one-hour bucket starting at `hour`.
///
/// ```rust
/// use chatstat::features::hour_range;
///
/// assert_eq!(hour_range(0), "00-01");
/// assert_eq!(hour_range(9), "09-10");
/// assert_eq!(hour_range(23), "23-00");
/// ```
pub fn hour_range(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

// chrono has no long weekday name counterpart to `Month::name`.
fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_derive_all_fields() {
        let f = CalendarFeatures::derive(at(2023, 8, 15, 9, 5));
        assert_eq!(f.date_only, NaiveDate::from_ymd_opt(2023, 8, 15).unwrap());
        assert_eq!(f.year, 2023);
        assert_eq!(f.month_number, 8);
        assert_eq!(f.month_name, "August");
        assert_eq!(f.day_of_month, 15);
        assert_eq!(f.day_name, "Tuesday");
        assert_eq!(f.hour, 9);
        assert_eq!(f.minute, 5);
        assert_eq!(f.hour_range, "09-10");
    }

    #[test]
    fn test_hour_range_wraps() {
        assert_eq!(hour_range(23), "23-00");
        assert_eq!(hour_range(0), "00-01");
        assert_eq!(hour_range(12), "12-13");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_leap_day() {
        let f = CalendarFeatures::derive(at(2024, 2, 29, 0, 0));
        assert_eq!(f.day_name, "Thursday");
        assert_eq!(f.month_name, "February");
        assert_eq!(f.hour_range, "00-01");
    }
}
