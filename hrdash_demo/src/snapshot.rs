// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned collections behind a [`Snapshot`], loaded from JSON or generated.

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use hrdash_metrics::{
    AttendanceKind, AttendanceRecord, DateKeyStyle, DepartmentRecord, EmployeeRecord,
    HEATMAP_DAYS, MonthKey, Snapshot, days_before, department_employee_counts,
};
use serde::Deserialize;

const DEPARTMENTS: [(&str, &str); 4] = [
    ("Engineering", "bg-blue-500"),
    ("Sales", "bg-green-500"),
    ("Operations", "bg-purple-500"),
    ("People", "bg-orange-500"),
];

const STATUSES: [&str; 6] = ["Active", "Active", "Active", "On Leave", "Onboarding", "Contractor"];

/// One delivery of every collection, as the record store exports it.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct OwnedSnapshot {
    pub(crate) employees: Vec<EmployeeRecord>,
    pub(crate) attendance: Vec<AttendanceRecord>,
    pub(crate) departments: Vec<DepartmentRecord>,
}

impl OwnedSnapshot {
    /// Reads a `{ "employees": [...], "attendance": [...], "departments": [...] }` document.
    pub(crate) fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let reader = BufReader::new(File::open(path)?);
        let mut snapshot: Self = serde_json::from_reader(reader)?;
        snapshot.refresh_department_counts();
        Ok(snapshot)
    }

    /// A deterministic sample organisation with a month of attendance ending at `today`.
    pub(crate) fn sample(today: NaiveDate, style: DateKeyStyle) -> Self {
        let employees: Vec<EmployeeRecord> = (0..24_u32)
            .map(|i| {
                let slot = i as usize;
                let (department, _) = DEPARTMENTS[slot % DEPARTMENTS.len()];
                let hired = MonthKey::of(today).months_before(i % 7);
                EmployeeRecord::new(format!("e{i}"), format!("user{i}@example.com"))
                    .with_name(format!("Employee {i}"))
                    .with_department(department)
                    .with_status(STATUSES[slot % STATUSES.len()])
                    .with_joined(format!("{}-{:02}-{:02}", hired.year, hired.month, 1 + i % 28))
            })
            .collect();

        let mut attendance = Vec::new();
        for back in 0..HEATMAP_DAYS as u64 {
            let key = style.key(days_before(today, back));
            for (i, employee) in employees.iter().enumerate() {
                // Roughly a different share of people each day.
                if (i as u64 * 7 + back * 3) % 10 < 3 + back % 7 {
                    continue;
                }
                let kind = if i % 5 == 0 {
                    AttendanceKind::Present
                } else {
                    AttendanceKind::CheckIn
                };
                attendance.push(AttendanceRecord::new(employee.email.clone(), key.clone(), kind));
                if i % 3 == 0 {
                    attendance.push(AttendanceRecord::new(
                        employee.email.clone(),
                        key.clone(),
                        AttendanceKind::CheckOut,
                    ));
                }
            }
        }

        let departments = DEPARTMENTS
            .iter()
            .enumerate()
            .map(|(i, (name, color))| {
                DepartmentRecord::new(format!("d{i}"), *name).with_color(*color)
            })
            .collect();

        let mut snapshot = Self {
            employees,
            attendance,
            departments,
        };
        snapshot.refresh_department_counts();
        snapshot
    }

    /// Fills in head counts the export left out by joining on department name.
    fn refresh_department_counts(&mut self) {
        let counts = department_employee_counts(&self.departments, &self.employees);
        for (department, count) in self.departments.iter_mut().zip(counts) {
            if department.employee_count.is_none() {
                department.employee_count = Some(count);
            }
        }
    }

    pub(crate) fn view(&self) -> Snapshot<'_> {
        Snapshot::new(&self.employees, &self.attendance, &self.departments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_deterministic_and_consistent() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let a = OwnedSnapshot::sample(today, DateKeyStyle::UsNumeric);
        let b = OwnedSnapshot::sample(today, DateKeyStyle::UsNumeric);
        assert_eq!(a.attendance, b.attendance);
        assert_eq!(a.employees.len(), 24);
        let total: u32 = a.departments.iter().filter_map(|d| d.employee_count).sum();
        assert_eq!(total, 24, "every employee belongs to a listed department");
        assert!(
            a.attendance.iter().any(|r| r.date == "6/15/2024"),
            "attendance reaches today"
        );
    }

    #[test]
    fn json_uses_store_field_names() {
        let raw = r#"{
            "employees": [{"id": "1", "email": "a@x.com", "dept": "Eng", "joined": "2024-04-02"}],
            "attendance": [{"email": "a@x.com", "date": "6/15/2024", "status": "Check In"}],
            "departments": [{"id": "d", "name": "Eng", "employeeCount": 7}]
        }"#;
        let snapshot: OwnedSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.attendance[0].kind, AttendanceKind::CheckIn);
        assert_eq!(snapshot.departments[0].employee_count, Some(7));
        assert_eq!(snapshot.employees[0].joined.as_deref(), Some("2024-04-02"));
        assert_eq!(snapshot.employees[0].department.as_deref(), Some("Eng"));
    }

    #[test]
    fn exported_department_names_feed_head_counts() {
        let raw = r#"{
            "employees": [
                {"id": "1", "email": "a@x.com", "dept": "Eng"},
                {"id": "2", "email": "b@x.com", "department": "Eng"}
            ],
            "departments": [{"id": "d", "name": "Eng"}]
        }"#;
        let mut snapshot: OwnedSnapshot = serde_json::from_str(raw).unwrap();
        snapshot.refresh_department_counts();
        assert_eq!(snapshot.departments[0].employee_count, Some(2));
    }

    #[test]
    fn attendance_timestamps_load_leniently() {
        let raw = r#"{
            "attendance": [
                {"email": "a@x.com", "date": "6/15/2024", "status": "Check In", "timestamp": "2024-06-15T09:30:00.000Z"},
                {"email": "b@x.com", "date": "6/15/2024", "status": "Check In", "timestamp": "around nine"},
                {"email": "c@x.com", "date": "6/15/2024", "status": "Present", "timestamp": null}
            ]
        }"#;
        let snapshot: OwnedSnapshot = serde_json::from_str(raw).unwrap();
        let stamps: Vec<_> = snapshot.attendance.iter().map(|r| r.timestamp).collect();
        assert_eq!(
            stamps[0].map(|t| t.to_rfc3339()).as_deref(),
            Some("2024-06-15T09:30:00+00:00")
        );
        assert_eq!(stamps[1], None, "unreadable timestamp");
        assert_eq!(stamps[2], None, "null timestamp");
    }
}
