// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Every series a statistics page draws, computed from one snapshot.

extern crate alloc;

use alloc::vec::Vec;

use chrono::NaiveDate;
use hrdash_metrics::{
    AggregateOptions, DEFAULT_GROWTH_MONTHS, DashboardStats, DateKeyStyle, HeatCell, MonthBucket,
    Period, Snapshot, TimeBucket, aggregate_by_period, build_heatmap, department_series,
    employee_growth, status_distribution,
};

use crate::datum::Datum;
use crate::palette::palette_entry;

/// Days in the attendance trend.
const WEEKLY_WINDOW: usize = 7;

/// Chart inputs for a dashboard page.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSeries {
    /// Headline figures.
    pub stats: DashboardStats,
    /// Unique attendees per day over the last week.
    pub weekly_attendance: Vec<TimeBucket>,
    /// Department head counts, largest first, colored by position.
    pub departments: Vec<Datum>,
    /// Non-empty employee statuses, colored by position after filtering.
    pub statuses: Vec<Datum>,
    /// Thirty days of attendance rates.
    pub heatmap: Vec<HeatCell>,
    /// Hires per month.
    pub growth: Vec<MonthBucket>,
}

impl DashboardSeries {
    /// Recomputes everything for `today`.
    pub fn compute(snapshot: &Snapshot<'_>, today: NaiveDate, style: DateKeyStyle) -> Self {
        let weekly_attendance = aggregate_by_period(
            snapshot.attendance,
            today,
            &AggregateOptions::new(Period::Day, WEEKLY_WINDOW).with_style(style),
        );

        let departments = department_series(snapshot.departments)
            .iter()
            .enumerate()
            .map(|(i, d)| Datum::from_point(d).with_color(palette_entry(i).color()))
            .collect();

        let statuses = status_distribution(snapshot.employees)
            .iter()
            .filter(|b| b.count > 0)
            .enumerate()
            .map(|(i, b)| {
                Datum::from_point(b)
                    .with_color(palette_entry(i).color())
                    .with_percentage(b.percentage)
            })
            .collect();

        log::trace!(
            "dashboard series for {today}: {} employees, {} attendance records",
            snapshot.employees.len(),
            snapshot.attendance.len()
        );
        Self {
            stats: DashboardStats::compute(snapshot, today, style),
            weekly_attendance,
            departments,
            statuses,
            heatmap: build_heatmap(snapshot.attendance, snapshot.employees.len(), today, style),
            growth: employee_growth(snapshot.employees, DEFAULT_GROWTH_MONTHS, today),
        }
    }

    /// The attendance trend as line chart input.
    pub fn weekly_data(&self) -> Vec<Datum> {
        Datum::series(&self.weekly_attendance)
    }

    /// The hiring trend as line chart input.
    pub fn growth_data(&self) -> Vec<Datum> {
        Datum::series(&self.growth)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use hrdash_metrics::{
        AttendanceKind, AttendanceRecord, DepartmentRecord, EmployeeRecord, HEATMAP_DAYS,
    };

    use super::*;

    #[test]
    fn bundle_covers_every_chart() {
        let employees = vec![
            EmployeeRecord::new("1", "a@x.com")
                .with_status("Active")
                .with_joined("2024-04-10"),
            EmployeeRecord::new("2", "b@x.com")
                .with_status("Active")
                .with_joined("not a date"),
            EmployeeRecord::new("3", "c@x.com").with_status("Terminated"),
        ];
        let attendance = vec![
            AttendanceRecord::new("a@x.com", "6/14/2024", AttendanceKind::CheckIn),
            AttendanceRecord::new("a@x.com", "6/14/2024", AttendanceKind::CheckOut),
            AttendanceRecord::new("b@x.com", "6/15/2024", AttendanceKind::Present),
        ];
        let departments = vec![
            DepartmentRecord::new("d1", "Ops").with_employee_count(1),
            DepartmentRecord::new("d2", "Eng").with_employee_count(2),
        ];
        let snapshot = Snapshot::new(&employees, &attendance, &departments);
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let series = DashboardSeries::compute(&snapshot, today, DateKeyStyle::UsNumeric);

        assert_eq!(series.weekly_attendance.len(), 7);
        let weekly: Vec<u64> = series.weekly_attendance.iter().map(|b| b.count).collect();
        assert_eq!(weekly, vec![0, 0, 0, 0, 0, 1, 1]);

        let names: Vec<&str> = series.departments.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(names, vec!["Eng", "Ops"]);
        assert_eq!(series.departments[0].color, Some(palette_entry(0).color()));

        // Active (2) and Terminated (1) survive; zero buckets are dropped before coloring.
        let statuses: Vec<(&str, Option<u32>)> = series
            .statuses
            .iter()
            .map(|d| (d.label.as_str(), d.percentage))
            .collect();
        assert_eq!(statuses, vec![("Active", Some(67)), ("Terminated", Some(33))]);
        assert_eq!(series.statuses[1].color, Some(palette_entry(1).color()));

        assert_eq!(series.heatmap.len(), HEATMAP_DAYS);
        let growth: Vec<u64> = series.growth.iter().map(|b| b.count).collect();
        assert_eq!(growth, vec![0, 0, 0, 1, 0, 0]);
        assert_eq!(series.stats.today_present, 1);
        assert_eq!(series.weekly_data().len(), 7);
        assert_eq!(series.growth_data()[3].value, 1.0);
    }
}
