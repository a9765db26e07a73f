// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical distributions over a fixed, ordered label set.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::bucket::SeriesPoint;
use crate::rate::percent;
use crate::record::{EmployeeRecord, EmployeeStatus};

/// Label of the trailing bucket that absorbs unknown and missing values.
pub const OTHER_LABEL: &str = "Other";

/// One category of a distribution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryBucket {
    /// Category label.
    pub name: String,
    /// Records in this category.
    pub count: u64,
    /// `round(100 * count / total)`, `0` for an empty input.
    ///
    /// Rounded independently per bucket; the column does not necessarily sum to 100.
    pub percentage: u32,
}

impl SeriesPoint for CategoryBucket {
    fn label(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.count as f64
    }
}

/// Buckets `records` by a categorical field.
///
/// Output has one bucket per `known` label in the given order, followed by an [`OTHER_LABEL`]
/// bucket for every value outside the known set (including a missing value). Zero-count buckets
/// are kept. Repeated labels in `known`, and a known label equal to `Other`, are folded so each
/// label appears once.
pub fn distribute<T, F>(records: &[T], known: &[&str], field: F) -> Vec<CategoryBucket>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut labels: Vec<&str> = Vec::with_capacity(known.len());
    for &label in known {
        if label != OTHER_LABEL && !labels.contains(&label) {
            labels.push(label);
        }
    }

    let mut counts = alloc::vec![0_u64; labels.len() + 1];
    let other = labels.len();
    for record in records {
        let slot = field(record)
            .and_then(|v| labels.iter().position(|&l| l == v))
            .unwrap_or(other);
        counts[slot] += 1;
    }

    let total = records.len() as u64;
    labels
        .iter()
        .copied()
        .chain(core::iter::once(OTHER_LABEL))
        .zip(counts)
        .map(|(name, count)| CategoryBucket {
            name: name.into(),
            count,
            percentage: percent(count, total),
        })
        .collect()
}

/// Employment-status distribution: `Active`, `On Leave`, `Onboarding`, `Terminated`, `Other`.
pub fn status_distribution(employees: &[EmployeeRecord]) -> Vec<CategoryBucket> {
    let known = EmployeeStatus::KNOWN.map(EmployeeStatus::label);
    distribute(employees, &known, |e| e.status.as_deref())
}
