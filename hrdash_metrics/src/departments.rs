// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Department head counts.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::bucket::SeriesPoint;
use crate::record::{DepartmentRecord, EmployeeRecord};

/// Styling token used when a department has none.
const DEFAULT_COLOR_TOKEN: &str = "bg-blue-500";

/// A department's share of the head count.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepartmentShare {
    /// Department name.
    pub name: String,
    /// Head count (`0` when unknown).
    pub value: u64,
    /// The department's styling token.
    pub color_token: String,
}

impl SeriesPoint for DepartmentShare {
    fn label(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.value as f64
    }
}

/// Departments ordered by head count, largest first.
///
/// Ties keep snapshot order.
pub fn department_series(departments: &[DepartmentRecord]) -> Vec<DepartmentShare> {
    let mut out: Vec<DepartmentShare> = departments
        .iter()
        .map(|d| DepartmentShare {
            name: d.name.clone(),
            value: d.employee_count.map_or(0, u64::from),
            color_token: d
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_COLOR_TOKEN.into()),
        })
        .collect();
    out.sort_by(|a, b| b.value.cmp(&a.value));
    out
}

/// Recomputes each department's head count by matching employee department names exactly.
///
/// Returns one count per department, aligned with `departments`.
pub fn department_employee_counts(
    departments: &[DepartmentRecord],
    employees: &[EmployeeRecord],
) -> Vec<u32> {
    let mut by_name: HashMap<&str, u32> = HashMap::new();
    for employee in employees {
        if let Some(department) = employee.department.as_deref() {
            *by_name.entry(department).or_default() += 1;
        }
    }
    departments
        .iter()
        .map(|d| by_name.get(d.name.as_str()).copied().unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn series_sorts_descending_and_keeps_tie_order() {
        let departments = vec![
            DepartmentRecord::new("1", "Ops").with_employee_count(2),
            DepartmentRecord::new("2", "Eng")
                .with_employee_count(9)
                .with_color("bg-green-500"),
            DepartmentRecord::new("3", "Legal"),
            DepartmentRecord::new("4", "Sales").with_employee_count(2),
        ];
        let series = department_series(&departments);
        let names: Vec<&str> = series.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Eng", "Ops", "Sales", "Legal"]);
        assert_eq!(series[0].color_token, "bg-green-500");
        assert_eq!(series[1].color_token, DEFAULT_COLOR_TOKEN);
        assert_eq!(series[3].value, 0);
    }

    #[test]
    fn counts_join_on_department_name() {
        let departments = vec![
            DepartmentRecord::new("1", "Eng"),
            DepartmentRecord::new("2", "Ops"),
        ];
        let employees = vec![
            EmployeeRecord::new("a", "a@x.com").with_department("Eng"),
            EmployeeRecord::new("b", "b@x.com").with_department("Eng"),
            EmployeeRecord::new("c", "c@x.com").with_department("eng"),
            EmployeeRecord::new("d", "d@x.com"),
        ];
        assert_eq!(department_employee_counts(&departments, &employees), vec![2, 0]);
    }

    #[test]
    fn repeated_department_series_agree() {
        let departments = vec![
            DepartmentRecord::new("1", "Ops").with_employee_count(3),
            DepartmentRecord::new("2", "Eng").with_employee_count(3),
        ];
        let employees = vec![EmployeeRecord::new("a", "a@x.com").with_department("Ops")];
        assert_eq!(department_series(&departments), department_series(&departments));
        assert_eq!(
            department_employee_counts(&departments, &employees),
            department_employee_counts(&departments, &employees)
        );
    }
}
