// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared chart input and output wrappers.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hrdash_metrics::SeriesPoint;
use peniko::Color;

/// One input item for a chart: a label, a value, and optional styling.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    /// Category or point label.
    pub label: String,
    /// Value; negative and non-finite values are drawn as `0`.
    pub value: f64,
    /// Explicit color; engines fall back to the palette by position.
    pub color: Option<Color>,
    /// Precomputed percentage shown in tooltips instead of the raw value.
    pub percentage: Option<u32>,
}

impl Datum {
    /// Creates an uncolored datum.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
            percentage: None,
        }
    }

    /// Copies a point of any `hrdash_metrics` series.
    pub fn from_point(point: &impl SeriesPoint) -> Self {
        Self::new(point.label(), point.value())
    }

    /// Copies a whole series.
    pub fn series<P: SeriesPoint>(points: &[P]) -> Vec<Self> {
        points.iter().map(Self::from_point).collect()
    }

    /// Sets the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the tooltip percentage.
    pub fn with_percentage(mut self, percentage: u32) -> Self {
        self.percentage = Some(percentage);
        self
    }

    /// The value clamped to a drawable magnitude.
    pub(crate) fn magnitude(&self) -> f64 {
        if self.value.is_finite() {
            self.value.max(0.0)
        } else {
            0.0
        }
    }
}

/// Output of a geometry engine.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartGeometry<T> {
    /// Nothing to draw (no items, or nothing with a positive total); show a placeholder.
    Empty,
    /// Drawable geometry.
    Ready(T),
}

impl<T> ChartGeometry<T> {
    /// Whether this is the empty state.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrows the geometry, if any.
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Ready(g) => Some(g),
        }
    }

    /// Takes the geometry, if any.
    pub fn into_ready(self) -> Option<T> {
        match self {
            Self::Empty => None,
            Self::Ready(g) => Some(g),
        }
    }
}
