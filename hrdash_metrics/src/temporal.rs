// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-window attendance buckets.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chrono::NaiveDate;
use hashbrown::{HashMap, HashSet};

use crate::bucket::SeriesPoint;
use crate::date::{DateKeyStyle, MonthKey, days_before, month_year_label, short_day_label};
use crate::record::AttendanceRecord;

/// Width of one bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Period {
    /// One calendar day.
    #[default]
    Day,
    /// Seven consecutive days ending on the bucket's end day.
    Week,
    /// One calendar month (the current month ends today).
    Month,
}

/// Which attendance kinds a bucket counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttendanceFilter {
    /// Every record counts, whatever its kind.
    #[default]
    AnyKind,
    /// Only `Check In` and `Present` records count.
    PresenceOnly,
}

/// Options for [`aggregate_by_period`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Bucket width.
    pub period: Period,
    /// Number of buckets emitted.
    pub window: usize,
    /// Kind filter.
    pub filter: AttendanceFilter,
    /// Format of the records' `date` field.
    pub style: DateKeyStyle,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            period: Period::Day,
            window: 7,
            filter: AttendanceFilter::AnyKind,
            style: DateKeyStyle::UsNumeric,
        }
    }
}

impl AggregateOptions {
    /// Creates options for `window` buckets of `period`.
    pub fn new(period: Period, window: usize) -> Self {
        Self {
            period,
            window,
            ..Self::default()
        }
    }

    /// Sets the kind filter.
    pub fn with_filter(mut self, filter: AttendanceFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the date-key format.
    pub fn with_style(mut self, style: DateKeyStyle) -> Self {
        self.style = style;
        self
    }
}

/// One bucket of a trailing attendance window.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeBucket {
    /// First day covered.
    pub start: NaiveDate,
    /// Last day covered.
    pub end: NaiveDate,
    /// Day key of `end`.
    pub key: String,
    /// Short display label (`Jan 5`, or `Jan 2024` for months).
    pub label: String,
    /// Distinct emails seen in the bucket.
    pub count: u64,
    /// Raw matching record count, duplicates included.
    pub records: u64,
}

impl SeriesPoint for TimeBucket {
    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> f64 {
        self.count as f64
    }
}

fn bucket_span(period: Period, today: NaiveDate, steps_back: usize) -> (NaiveDate, NaiveDate) {
    let steps = steps_back as u64;
    match period {
        Period::Day => {
            let day = days_before(today, steps);
            (day, day)
        }
        Period::Week => {
            let end = days_before(today, steps * 7);
            (days_before(end, 6), end)
        }
        Period::Month => {
            let month = MonthKey::of(today).months_before(u32::try_from(steps).unwrap_or(u32::MAX));
            (month.first_day(), month.last_day().min(today))
        }
    }
}

/// Buckets attendance into `options.window` periods ending today, oldest first.
///
/// Each bucket counts distinct emails whose record `date` string exactly equals one of the day
/// keys the bucket covers. Buckets are always emitted; an empty input yields all zeros.
pub fn aggregate_by_period(
    records: &[AttendanceRecord],
    today: NaiveDate,
    options: &AggregateOptions,
) -> Vec<TimeBucket> {
    let mut buckets = Vec::with_capacity(options.window);
    let mut slots: HashMap<String, usize> = HashMap::new();

    for (index, steps_back) in (0..options.window).rev().enumerate() {
        let (start, end) = bucket_span(options.period, today, steps_back);
        let mut day = start;
        while day <= end {
            slots.entry(options.style.key(day)).or_insert(index);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        let label = match options.period {
            Period::Day | Period::Week => short_day_label(start),
            Period::Month => month_year_label(MonthKey::of(start)),
        };
        buckets.push(TimeBucket {
            start,
            end,
            key: options.style.key(end),
            label,
            count: 0,
            records: 0,
        });
    }

    let mut attendees: Vec<HashSet<&str>> = alloc::vec![HashSet::new(); buckets.len()];
    for record in records {
        if options.filter == AttendanceFilter::PresenceOnly && !record.kind.is_presence() {
            continue;
        }
        let Some(&slot) = slots.get(record.date.as_str()) else {
            continue;
        };
        buckets[slot].records += 1;
        attendees[slot].insert(record.email.as_str());
    }
    for (bucket, emails) in buckets.iter_mut().zip(&attendees) {
        bucket.count = emails.len() as u64;
    }

    log::trace!(
        "aggregated {} attendance records into {} {:?} buckets",
        records.len(),
        buckets.len(),
        options.period
    );
    buckets
}
