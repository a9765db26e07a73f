// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headline figures for a dashboard.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

use chrono::NaiveDate;

use crate::date::{DateKeyStyle, days_before};
use crate::rate::{percent, percent_change, present_count};
use crate::record::{EmployeeStatus, Snapshot};

/// Headline counts derived from one snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashboardStats {
    /// Employees in the snapshot.
    pub total_employees: usize,
    /// Distinct emails present today.
    pub today_present: usize,
    /// Distinct emails present yesterday.
    pub yesterday_present: usize,
    /// Today's attendance rate in percent.
    pub attendance_rate: u32,
    /// Change of the present count versus yesterday, in percent.
    ///
    /// `0` when nobody was present yesterday.
    pub attendance_change: i64,
    /// Employees with status `Active`.
    pub active: usize,
    /// Employees with status `On Leave`.
    pub on_leave: usize,
    /// Departments in the snapshot.
    pub departments: usize,
}

impl DashboardStats {
    /// Computes the figures for `today`.
    pub fn compute(snapshot: &Snapshot<'_>, today: NaiveDate, style: DateKeyStyle) -> Self {
        let today_present = present_count(snapshot.attendance, &style.key(today));
        let yesterday_present = present_count(snapshot.attendance, &style.key(days_before(today, 1)));
        let total_employees = snapshot.employees.len();

        let attendance_change = if yesterday_present > 0 {
            percent_change(today_present as u64, yesterday_present as u64)
        } else {
            0
        };
        let count_status = |status: EmployeeStatus| {
            snapshot
                .employees
                .iter()
                .filter(|e| e.status() == status)
                .count()
        };

        Self {
            total_employees,
            today_present,
            yesterday_present,
            attendance_rate: percent(today_present as u64, total_employees as u64),
            attendance_change,
            active: count_status(EmployeeStatus::Active),
            on_leave: count_status(EmployeeStatus::OnLeave),
            departments: snapshot.departments.len(),
        }
    }
}

/// Formats a count with a `K`/`M` suffix and one decimal (`1.5K`); plain below 1000.
pub fn format_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::record::{AttendanceKind, AttendanceRecord, DepartmentRecord, EmployeeRecord};

    #[test]
    fn stats_compare_today_with_yesterday() {
        let employees = vec![
            EmployeeRecord::new("1", "a@x.com").with_status("Active"),
            EmployeeRecord::new("2", "b@x.com").with_status("Active"),
            EmployeeRecord::new("3", "c@x.com").with_status("On Leave"),
            EmployeeRecord::new("4", "d@x.com"),
        ];
        let attendance = vec![
            AttendanceRecord::new("a@x.com", "5/2/2024", AttendanceKind::CheckIn),
            AttendanceRecord::new("b@x.com", "5/2/2024", AttendanceKind::CheckIn),
            AttendanceRecord::new("c@x.com", "5/2/2024", AttendanceKind::CheckIn),
            AttendanceRecord::new("a@x.com", "5/1/2024", AttendanceKind::CheckIn),
            AttendanceRecord::new("b@x.com", "5/1/2024", AttendanceKind::Present),
        ];
        let departments = vec![DepartmentRecord::new("1", "Eng")];
        let snapshot = Snapshot::new(&employees, &attendance, &departments);
        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let stats = DashboardStats::compute(&snapshot, today, DateKeyStyle::UsNumeric);
        assert_eq!(stats.today_present, 3);
        assert_eq!(stats.yesterday_present, 2);
        assert_eq!(stats.attendance_rate, 75);
        assert_eq!(stats.attendance_change, 50);
        assert_eq!((stats.active, stats.on_leave, stats.departments), (2, 1, 1));
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let stats = DashboardStats::compute(&Snapshot::default(), today, DateKeyStyle::Iso);
        assert_eq!(stats.attendance_rate, 0);
        assert_eq!(stats.attendance_change, 0);
        assert_eq!(stats.total_employees, 0);
    }

    #[test]
    fn compact_numbers() {
        assert_eq!(format_compact(999.0), "999");
        assert_eq!(format_compact(1_500.0), "1.5K");
        assert_eq!(format_compact(2_000_000.0), "2.0M");
    }

    #[test]
    fn repeated_stats_agree() {
        let employees = vec![EmployeeRecord::new("1", "a@x.com").with_status("Active")];
        let attendance = vec![AttendanceRecord::new("a@x.com", "5/2/2024", AttendanceKind::CheckIn)];
        let snapshot = Snapshot::new(&employees, &attendance, &[]);
        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let first = DashboardStats::compute(&snapshot, today, DateKeyStyle::UsNumeric);
        assert_eq!(DashboardStats::compute(&snapshot, today, DateKeyStyle::UsNumeric), first);
    }
}
