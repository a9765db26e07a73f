// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date keys, labels, and lenient parsing.
//!
//! Attendance records carry a pre-formatted day string that is matched **exactly**; it is never
//! parsed for grouping. Join dates on the other hand are free-form user input and go through
//! [`parse_lenient`].

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, Utc, Weekday};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats the record store uses for calendar-day keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateKeyStyle {
    /// `M/D/YYYY` without zero padding (en-US locale date string).
    #[default]
    UsNumeric,
    /// `YYYY-MM-DD`.
    Iso,
}

impl DateKeyStyle {
    /// Formats `date` as a day key.
    pub fn key(self, date: NaiveDate) -> String {
        match self {
            Self::UsNumeric => format!("{}/{}/{}", date.month(), date.day(), date.year()),
            Self::Iso => format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day()),
        }
    }
}

/// Errors returned by [`parse_lenient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateParseError {
    /// The input was empty or whitespace.
    Empty,
    /// No supported format matched.
    Unrecognized(String),
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty date string"),
            Self::Unrecognized(raw) => write!(f, "unrecognized date {raw:?}"),
        }
    }
}

impl core::error::Error for DateParseError {}

const FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
    "%d %b, %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Parses a user-entered calendar date.
///
/// Accepts ISO days (optionally followed by a time part), US numeric days, and English month
/// names in the common orders (`Jan 5, 2024`, `January 5 2024`, `5 Jan 2024`).
pub fn parse_lenient(raw: &str) -> Result<NaiveDate, DateParseError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(DateParseError::Empty);
    }
    for fmt in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }
    // `2024-04-02T09:30:00Z` and `2024-04-02 09:30`: keep the day part.
    if let (Some(day), Some(sep)) = (s.get(..10), s.as_bytes().get(10))
        && matches!(sep, b'T' | b' ')
        && let Ok(date) = NaiveDate::parse_from_str(day, "%Y-%m-%d")
    {
        return Ok(date);
    }
    Err(DateParseError::Unrecognized(s.into()))
}

/// Parses an event timestamp.
///
/// Accepts RFC 3339 with any offset (`2024-06-15T09:30:00.000Z`) and offset-less ISO date-times,
/// which are taken as UTC. Anything else is `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Returns the date `n` days before `date`, saturating at the earliest representable day.
pub fn days_before(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN)
}

/// Short English month name for a 1-based month.
pub fn month_abbrev(month: u32) -> &'static str {
    let idx = usize::try_from(month.saturating_sub(1)).unwrap_or(0);
    MONTHS.get(idx).copied().unwrap_or("???")
}

/// Short English weekday name.
pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// `Jan 5` style label.
pub fn short_day_label(date: NaiveDate) -> String {
    format!("{} {}", month_abbrev(date.month()), date.day())
}

/// `Jan 2024` style label.
pub fn month_year_label(key: MonthKey) -> String {
    format!("{} {}", month_abbrev(key.month), key.year)
}

/// A calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthKey {
    /// Calendar year.
    pub year: i32,
    /// 1-based month.
    pub month: u32,
}

impl MonthKey {
    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month.
    pub fn last_day(self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// The month `n` months earlier.
    pub fn months_before(self, n: u32) -> Self {
        Self::of(
            self.first_day()
                .checked_sub_months(Months::new(n))
                .unwrap_or(NaiveDate::MIN),
        )
    }

    /// `YYYY-MM` key.
    pub fn key(self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn us_numeric_keys_are_unpadded() {
        assert_eq!(DateKeyStyle::UsNumeric.key(ymd(2024, 1, 5)), "1/5/2024");
        assert_eq!(DateKeyStyle::Iso.key(ymd(2024, 1, 5)), "2024-01-05");
    }

    #[test]
    fn lenient_parse_accepts_common_shapes() {
        let want = ymd(2024, 4, 2);
        for raw in [
            "2024-04-02",
            "4/2/2024",
            "04/02/2024",
            "2024/04/02",
            "Apr 2, 2024",
            "April 2, 2024",
            "April 2 2024",
            "2 April 2024",
            "2 Apr 2024",
            "2024-04-02T09:30:00Z",
            "  2024-04-02  ",
        ] {
            assert_eq!(parse_lenient(raw), Ok(want), "parsing {raw:?}");
        }
    }

    #[test]
    fn lenient_parse_rejects_garbage() {
        assert_eq!(parse_lenient("   "), Err(DateParseError::Empty));
        assert!(
            matches!(parse_lenient("soon"), Err(DateParseError::Unrecognized(_))),
            "garbage should be unrecognized"
        );
        assert!(parse_lenient("2024-13-40").is_err(), "out of range date");
    }

    #[test]
    fn timestamps_accept_offsets_and_fall_back_to_none() {
        let want = ymd(2024, 6, 15).and_hms_opt(9, 30, 0).unwrap().and_utc();
        assert_eq!(parse_timestamp("2024-06-15T09:30:00.000Z"), Some(want));
        assert_eq!(parse_timestamp("2024-06-15T11:30:00+02:00"), Some(want));
        assert_eq!(parse_timestamp("2024-06-15T09:30:00"), Some(want));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn month_stepping_crosses_years() {
        let jan = MonthKey::of(ymd(2024, 1, 31));
        assert_eq!(jan.months_before(2), MonthKey { year: 2023, month: 11 });
        assert_eq!(jan.key(), "2024-01");
        assert_eq!(MonthKey { year: 2024, month: 2 }.last_day(), ymd(2024, 2, 29));
        assert_eq!(month_year_label(jan), "Jan 2024");
    }
}
