// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry for `hrdash_metrics` series.
//!
//! This crate maps prepared series onto drawable coordinates:
//! - **Palette**: a fixed, index-addressed color cycle shared by chart bodies and legends.
//! - **Geometry engines**: donut segments, line/area paths, bar lengths, and a calendar heatmap
//!   grid. Each one is a pure function from a series to plain data (points, rects, `BezPath`s and
//!   SVG path strings), so any renderer can paint the result.
//!
//! Empty input is never an error: engines return [`ChartGeometry::Empty`] so the caller can show
//! a placeholder instead of degenerate shapes. Hover is caller-owned state (an optional index)
//! that the geometry types accept when resolving per-item radii, opacities and tooltips.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bar;
mod calendar;
mod dashboard;
mod datum;
mod donut;
#[cfg(not(feature = "std"))]
mod float;
mod line;
mod palette;
mod scale;
mod svg;

pub use bar::{BarGeometry, BarOrientation, BarShape, BarSpec};
pub use calendar::{
    CalendarCell, CalendarLayout, CalendarSpec, CellTooltip, DisplayTier, display_tier, heat_legend,
    tooltip_for,
};
pub use dashboard::DashboardSeries;
pub use datum::{ChartGeometry, Datum};
pub use donut::{ArcSegment, DonutGeometry, DonutSpec};
pub use line::{AxisLabel, ChartPoint, LineGeometry, LineSpec, PointTooltip};
pub use palette::{PALETTE, PaletteEntry, palette_entry};
pub use scale::{ScaleBand, ScaleLinear};
pub use svg::path_data;
