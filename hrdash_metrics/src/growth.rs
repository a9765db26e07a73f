// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar-month tallies over a trailing window.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chrono::NaiveDate;
use hashbrown::HashMap;

use crate::bucket::SeriesPoint;
use crate::date::{MonthKey, month_year_label, parse_lenient};
use crate::record::EmployeeRecord;

/// Default trailing window for growth charts.
pub const DEFAULT_GROWTH_MONTHS: usize = 6;

/// A record carrying a free-form date to tally by month.
pub trait DatedRecord {
    /// Identifier used when reporting a dropped record.
    fn record_id(&self) -> &str;
    /// The raw date, if any.
    fn date_field(&self) -> Option<&str>;
}

impl DatedRecord for EmployeeRecord {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn date_field(&self) -> Option<&str> {
        self.joined.as_deref()
    }
}

/// One month of a growth series.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthBucket {
    /// The calendar month.
    pub month: MonthKey,
    /// `YYYY-MM`.
    pub key: String,
    /// `Jan 2024`.
    pub label: String,
    /// Records dated in this month.
    pub count: u64,
}

impl SeriesPoint for MonthBucket {
    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> f64 {
        self.count as f64
    }
}

/// Tallies records by the month of their date over the `months` months ending with the current
/// month, oldest first.
///
/// Months without records are emitted with a zero count. Records whose date is missing or does
/// not parse are left out of every tally; each one is reported at `debug` level.
pub fn monthly_growth<T: DatedRecord>(
    records: &[T],
    months: usize,
    today: NaiveDate,
) -> Vec<MonthBucket> {
    let mut tally: HashMap<MonthKey, u64> = HashMap::new();
    let mut skipped = 0_usize;
    for record in records {
        let Some(raw) = record.date_field() else {
            log::debug!("record {:?} has no date; left out of growth", record.record_id());
            skipped += 1;
            continue;
        };
        match parse_lenient(raw) {
            Ok(date) => *tally.entry(MonthKey::of(date)).or_default() += 1,
            Err(err) => {
                log::debug!("record {:?} left out of growth: {err}", record.record_id());
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        log::trace!("{skipped} of {} records had no usable date", records.len());
    }

    let current = MonthKey::of(today);
    (0..months)
        .rev()
        .map(|back| {
            let month = current.months_before(u32::try_from(back).unwrap_or(u32::MAX));
            MonthBucket {
                month,
                key: month.key(),
                label: month_year_label(month),
                count: tally.get(&month).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Hiring series: employees tallied by join month.
pub fn employee_growth(
    employees: &[EmployeeRecord],
    months: usize,
    today: NaiveDate,
) -> Vec<MonthBucket> {
    monthly_growth(employees, months, today)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn joined(id: &str, date: &str) -> EmployeeRecord {
        EmployeeRecord::new(id, "e@x.com").with_joined(date)
    }

    #[test]
    fn gaps_are_zero_filled() {
        let employees = vec![joined("1", "2024-04-12")];
        let buckets = employee_growth(&employees, 3, ymd(2024, 6, 15));
        let got: Vec<(&str, u64)> = buckets.iter().map(|b| (b.key.as_str(), b.count)).collect();
        assert_eq!(got, vec![("2024-04", 1), ("2024-05", 0), ("2024-06", 0)]);
        assert_eq!(buckets[0].label, "Apr 2024");
    }

    #[test]
    fn unparseable_and_missing_dates_are_skipped() {
        let employees = vec![
            joined("1", "6/1/2024"),
            joined("2", "next tuesday"),
            EmployeeRecord::new("3", "c@x.com"),
            joined("4", "Jun 3, 2024"),
            joined("5", "June 10, 2024"),
        ];
        let buckets = employee_growth(&employees, 1, ymd(2024, 6, 15));
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].count, 3);
    }

    #[test]
    fn window_crosses_year_boundary() {
        let employees = vec![joined("1", "2023-12-01"), joined("2", "2023-11-30")];
        let buckets = employee_growth(&employees, DEFAULT_GROWTH_MONTHS, ymd(2024, 2, 1));
        assert_eq!(buckets.len(), 6);
        assert_eq!(buckets[0].key, "2023-09");
        assert_eq!(buckets[2].count, 1, "November");
        assert_eq!(buckets[3].count, 1, "December");
        assert_eq!(buckets[5].key, "2024-02");
    }

    #[test]
    fn records_outside_window_are_ignored() {
        let employees = vec![joined("1", "2020-01-01"), joined("2", "2030-01-01")];
        let buckets = employee_growth(&employees, 3, ymd(2024, 6, 15));
        assert!(buckets.iter().all(|b| b.count == 0), "nothing in window");
    }

    #[test]
    fn repeated_growth_tallies_agree() {
        let employees = vec![
            joined("1", "2024-05-02"),
            joined("2", "June 1, 2024"),
            joined("3", "garbage"),
        ];
        let today = ymd(2024, 6, 15);
        let first = monthly_growth(&employees, DEFAULT_GROWTH_MONTHS, today);
        assert_eq!(monthly_growth(&employees, DEFAULT_GROWTH_MONTHS, today), first);
        assert_eq!(employee_growth(&employees, 3, today), employee_growth(&employees, 3, today));
    }
}
