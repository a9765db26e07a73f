// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The common `{label, value}` view over every series this crate produces.

extern crate alloc;

use alloc::string::String;

/// A labeled value: one unit of a chart-ready series.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    /// Display label.
    pub label: String,
    /// Aggregated value.
    pub value: f64,
}

impl Bucket {
    /// Creates a bucket.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Read access to a point of an ordered series.
///
/// Implemented by every bucket type so geometry code can consume any of them without copying
/// through an intermediate representation first.
pub trait SeriesPoint {
    /// Display label for the point.
    fn label(&self) -> &str;
    /// Numeric value for the point.
    fn value(&self) -> f64;

    /// Copies this point into a plain [`Bucket`].
    fn to_bucket(&self) -> Bucket {
        Bucket::new(self.label(), self.value())
    }
}

impl SeriesPoint for Bucket {
    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> f64 {
        self.value
    }
}
