// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Daily attendance-rate series for calendar heatmaps.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chrono::{Datelike, NaiveDate};

use crate::bucket::SeriesPoint;
use crate::date::{DateKeyStyle, days_before, month_abbrev, weekday_abbrev};
use crate::rate::attendance_rate;
use crate::record::AttendanceRecord;

/// Number of days covered by [`build_heatmap`].
pub const HEATMAP_DAYS: usize = 30;

/// Discrete band a daily rate falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intensity {
    /// Below 50%.
    None,
    /// 50% up to (excluding) 70%.
    Low,
    /// 70% up to (excluding) 90%.
    Medium,
    /// 90% and above.
    High,
}

impl Intensity {
    /// Classifies a rate in percent.
    pub fn from_rate(rate: u32) -> Self {
        match rate {
            90.. => Self::High,
            70..=89 => Self::Medium,
            50..=69 => Self::Low,
            _ => Self::None,
        }
    }

    /// Lower-case tier name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One day of the heatmap.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatCell {
    /// The day.
    pub date: NaiveDate,
    /// Day key used to match attendance records.
    pub date_key: String,
    /// `Mon`.
    pub weekday: String,
    /// `Jan`.
    pub month: String,
    /// Day of month.
    pub day: u32,
    /// Attendance rate, `0..=100`.
    pub rate: u32,
    /// Tier for `rate`.
    pub intensity: Intensity,
}

impl SeriesPoint for HeatCell {
    fn label(&self) -> &str {
        &self.date_key
    }

    fn value(&self) -> f64 {
        f64::from(self.rate)
    }
}

/// Builds [`HEATMAP_DAYS`] cells ending today, oldest first.
///
/// Each cell's rate is [`attendance_rate`] for that day's key.
pub fn build_heatmap(
    records: &[AttendanceRecord],
    total_population: usize,
    today: NaiveDate,
    style: DateKeyStyle,
) -> Vec<HeatCell> {
    (0..HEATMAP_DAYS as u64)
        .rev()
        .map(|back| {
            let date = days_before(today, back);
            let date_key = style.key(date);
            let rate = attendance_rate(records, total_population, &date_key);
            HeatCell {
                date,
                weekday: weekday_abbrev(date.weekday()).into(),
                month: month_abbrev(date.month()).into(),
                day: date.day(),
                rate,
                intensity: Intensity::from_rate(rate),
                date_key,
            }
        })
        .collect()
}
