// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-in-time percentages.

use hashbrown::HashSet;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::record::AttendanceRecord;

/// Rounds half up (`2.5 -> 3`, `-2.5 -> -2`), matching how dashboard figures are displayed.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Converts a rounded, finite `f64` to `i64`, saturating.
pub(crate) fn to_i64(x: f64) -> i64 {
    if !x.is_finite() {
        return 0;
    }
    let clamped = x.clamp(i64::MIN as f64, i64::MAX as f64);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i64 range")]
    {
        clamped as i64
    }
}

/// Rounds a non-negative percentage half up to an integer; negative or non-finite input is `0`.
pub fn round_percent(pct: f64) -> u32 {
    u32::try_from(to_i64(round_half_up(pct)).max(0)).unwrap_or(u32::MAX)
}

/// `round(100 * part / total)`, or `0` when `total` is `0`.
pub fn percent(part: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    round_percent(100.0 * part as f64 / total as f64)
}

/// Number of distinct emails with a presence-kind record on `date_key`.
pub fn present_count(records: &[AttendanceRecord], date_key: &str) -> usize {
    records
        .iter()
        .filter(|r| r.date == date_key && r.kind.is_presence())
        .map(|r| r.email.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Attendance rate for one day as an integer percentage in `0..=100`.
///
/// The numerator counts unique emails, so duplicate check-ins do not inflate the rate. A zero
/// population yields `0`. The result is capped at `100` when the attendance list names more
/// people than the population (e.g. a stale head count).
pub fn attendance_rate(records: &[AttendanceRecord], total_population: usize, date_key: &str) -> u32 {
    let present = present_count(records, date_key) as u64;
    percent(present, total_population as u64).min(100)
}

/// Percent change from `previous` to `current`, rounded half up.
///
/// From a zero baseline the change is `100` if anything appeared and `0` otherwise.
pub fn percent_change(current: u64, previous: u64) -> i64 {
    if previous == 0 {
        return if current > 0 { 100 } else { 0 };
    }
    let delta = current as f64 - previous as f64;
    to_i64(round_half_up(delta / previous as f64 * 100.0))
}
