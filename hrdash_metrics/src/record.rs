// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only record snapshots handed in by the record store.

extern crate alloc;

use alloc::string::String;

use chrono::{DateTime, Utc};

/// Employment status buckets.
///
/// Any status string outside the four known labels folds into [`EmployeeStatus::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmployeeStatus {
    /// Currently working.
    Active,
    /// On approved leave.
    OnLeave,
    /// Joined, not yet fully onboarded.
    Onboarding,
    /// No longer employed.
    Terminated,
    /// Missing or unrecognized status.
    Other,
}

impl EmployeeStatus {
    /// Known statuses in display order. `Other` is implied as the trailing bucket.
    pub const KNOWN: [Self; 4] = [Self::Active, Self::OnLeave, Self::Onboarding, Self::Terminated];

    /// The label stored in the record store.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Onboarding => "Onboarding",
            Self::Terminated => "Terminated",
            Self::Other => "Other",
        }
    }

    /// Maps a stored label to a status; matching is exact.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Active" => Self::Active,
            "On Leave" => Self::OnLeave,
            "Onboarding" => Self::Onboarding,
            "Terminated" => Self::Terminated,
            _ => Self::Other,
        }
    }
}

impl From<&str> for EmployeeStatus {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

/// The kind of an attendance event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum AttendanceKind {
    /// Start of a working day.
    CheckIn,
    /// End of a working day.
    CheckOut,
    /// Presence recorded without a check-in/out pair.
    Present,
    /// Any other stored value.
    Other,
}

impl AttendanceKind {
    /// The label stored in the record store.
    pub fn label(self) -> &'static str {
        match self {
            Self::CheckIn => "Check In",
            Self::CheckOut => "Check Out",
            Self::Present => "Present",
            Self::Other => "Other",
        }
    }

    /// Whether this kind counts as presence for the day.
    ///
    /// `Check In` counts even without a matching `Check Out`; a lone `Check Out` does not.
    pub fn is_presence(self) -> bool {
        matches!(self, Self::CheckIn | Self::Present)
    }
}

impl From<&str> for AttendanceKind {
    fn from(label: &str) -> Self {
        match label {
            "Check In" => Self::CheckIn,
            "Check Out" => Self::CheckOut,
            "Present" => Self::Present,
            _ => Self::Other,
        }
    }
}

impl From<String> for AttendanceKind {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<AttendanceKind> for String {
    fn from(kind: AttendanceKind) -> Self {
        kind.label().into()
    }
}

/// An employee record.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct EmployeeRecord {
    /// Store document id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Work email; the join key for attendance.
    pub email: String,
    /// Department name (joined to [`DepartmentRecord::name`] by equality). Stored as `dept`.
    #[cfg_attr(feature = "serde", serde(rename = "dept", alias = "department"))]
    pub department: Option<String>,
    /// Raw status label, see [`EmployeeRecord::status`].
    pub status: Option<String>,
    /// Join date as entered by a user; parsed on demand.
    pub joined: Option<String>,
}

impl EmployeeRecord {
    /// Creates a record with the given id and email and no optional fields.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the department name.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Sets the raw status label.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the raw join date.
    pub fn with_joined(mut self, joined: impl Into<String>) -> Self {
        self.joined = Some(joined.into());
        self
    }

    /// The status bucket; a missing status is `Other`.
    pub fn status(&self) -> EmployeeStatus {
        self.status
            .as_deref()
            .map_or(EmployeeStatus::Other, EmployeeStatus::from_label)
    }
}

/// An attendance event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AttendanceRecord {
    /// Store document id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,
    /// Employee email (the join key, not the employee id).
    pub email: String,
    /// Calendar day in the store's locale format; compared as an exact string.
    pub date: String,
    /// Event kind (stored as `status`).
    #[cfg_attr(feature = "serde", serde(rename = "status"))]
    pub kind: AttendanceKind,
    /// When the action happened. Unreadable values load as `None`.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "lenient_timestamp")
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(feature = "serde")]
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(crate::date::parse_timestamp))
}

impl AttendanceRecord {
    /// Creates a record without id or timestamp.
    pub fn new(email: impl Into<String>, date: impl Into<String>, kind: AttendanceKind) -> Self {
        Self {
            id: String::new(),
            email: email.into(),
            date: date.into(),
            kind,
            timestamp: None,
        }
    }
}

/// A department record.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct DepartmentRecord {
    /// Store document id.
    pub id: String,
    /// Department name.
    pub name: String,
    /// Name of the department head.
    pub head: Option<String>,
    /// Styling token assigned at creation (e.g. `bg-blue-500`).
    pub color: Option<String>,
    /// Derived head count; recomputed externally, never authoritative.
    pub employee_count: Option<u32>,
}

impl DepartmentRecord {
    /// Creates a record with the given id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the derived head count.
    pub fn with_employee_count(mut self, count: u32) -> Self {
        self.employee_count = Some(count);
        self
    }

    /// Sets the styling token.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A borrowed view over one delivery of every collection the core reads.
///
/// The core never holds on to a snapshot: each call recomputes from scratch.
#[derive(Clone, Copy, Debug, Default)]
pub struct Snapshot<'a> {
    /// Employee collection.
    pub employees: &'a [EmployeeRecord],
    /// Attendance collection.
    pub attendance: &'a [AttendanceRecord],
    /// Department collection.
    pub departments: &'a [DepartmentRecord],
}

impl<'a> Snapshot<'a> {
    /// Creates a snapshot view.
    pub fn new(
        employees: &'a [EmployeeRecord],
        attendance: &'a [AttendanceRecord],
        departments: &'a [DepartmentRecord],
    ) -> Self {
        Self {
            employees,
            attendance,
            departments,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn unknown_and_missing_status_fold_into_other() {
        let bogus = EmployeeRecord::new("1", "a@x.com").with_status("Bogus");
        let missing = EmployeeRecord::new("2", "b@x.com");
        let leave = EmployeeRecord::new("3", "c@x.com").with_status("On Leave");
        assert_eq!(bogus.status(), EmployeeStatus::Other, "unknown label");
        assert_eq!(missing.status(), EmployeeStatus::Other, "missing label");
        assert_eq!(leave.status(), EmployeeStatus::OnLeave, "known label");
    }

    #[test]
    fn only_check_in_and_present_count_as_presence() {
        assert!(AttendanceKind::from("Check In").is_presence(), "check in");
        assert!(AttendanceKind::from("Present").is_presence(), "present");
        assert!(!AttendanceKind::from("Check Out").is_presence(), "check out");
        assert_eq!(AttendanceKind::from("Late"), AttendanceKind::Other);
    }
}
