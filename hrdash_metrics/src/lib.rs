// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot aggregations for HR dashboards.
//!
//! This crate turns immutable collection snapshots (employees, attendance events, departments)
//! into chart-ready series:
//! - **Temporal buckets**: unique attendees per day/week/month over a trailing window.
//! - **Rates**: attendance percentage for a single day key.
//! - **Distributions**: counts and percentages over a fixed, ordered category list.
//! - **Growth**: calendar-month tallies of a parsed date field, zero-filled.
//! - **Heatmaps**: a 30-day daily rate series classified into intensity tiers.
//!
//! Every function is a pure, synchronous recomputation from its arguments. "Today" is always
//! injected by the caller, so two calls with the same snapshot and the same day are identical.
//! Degenerate input (empty lists, zero populations, malformed dates) produces defined output
//! rather than errors.
//!
//! Attendance records are joined to employees by **email**, not by employee id. This mirrors the
//! record store's schema; changing the join key changes observable counts.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bucket;
mod date;
mod departments;
mod distribution;
#[cfg(not(feature = "std"))]
mod float;
mod growth;
mod heatmap;
mod rate;
mod record;
mod summary;
mod temporal;

pub use bucket::{Bucket, SeriesPoint};
pub use date::{
    DateKeyStyle, DateParseError, MonthKey, days_before, month_abbrev, month_year_label,
    parse_lenient, parse_timestamp, short_day_label, weekday_abbrev,
};
pub use departments::{DepartmentShare, department_employee_counts, department_series};
pub use distribution::{CategoryBucket, OTHER_LABEL, distribute, status_distribution};
pub use growth::{DEFAULT_GROWTH_MONTHS, DatedRecord, MonthBucket, employee_growth, monthly_growth};
pub use heatmap::{HEATMAP_DAYS, HeatCell, Intensity, build_heatmap};
pub use rate::{attendance_rate, percent, percent_change, present_count, round_percent};
pub use record::{
    AttendanceKind, AttendanceRecord, DepartmentRecord, EmployeeRecord, EmployeeStatus, Snapshot,
};
pub use summary::{DashboardStats, format_compact};
pub use temporal::{AggregateOptions, AttendanceFilter, Period, TimeBucket, aggregate_by_period};
