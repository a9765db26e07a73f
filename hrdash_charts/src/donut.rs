// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut (and pie) geometry.
//!
//! Segments are laid out clockwise from 12 o'clock. Angles are in degrees in the usual screen
//! convention (`0°` points right, `-90°` points up, positive is clockwise because y grows down).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use kurbo::{BezPath, Circle, Point, Shape, Vec2};
use peniko::Color;

use hrdash_metrics::round_percent;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::datum::{ChartGeometry, Datum};
use crate::palette::palette_entry;
use crate::svg::{coord, push_point};

const START_ANGLE: f64 = -90.0;
const FULL_TURN: f64 = 360.0;
const FULL_TURN_EPSILON: f64 = 1e-9;

/// Donut configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutSpec {
    /// Width and height of the square drawing area.
    pub size: f64,
    /// Gap between the outer radius and the drawing area edge.
    pub margin: f64,
    /// Inner radius as a fraction of the outer radius (`0` for a pie).
    pub inner_ratio: f64,
    /// Extra outer radius of the hovered segment.
    pub hover_grow: f64,
    /// Opacity of segments while another one is hovered.
    pub dim_opacity: f64,
}

impl Default for DonutSpec {
    fn default() -> Self {
        Self::new(200.0)
    }
}

impl DonutSpec {
    /// Creates a spec for a `size`×`size` drawing area.
    pub fn new(size: f64) -> Self {
        Self {
            size,
            margin: 10.0,
            inner_ratio: 0.6,
            hover_grow: 5.0,
            dim_opacity: 0.5,
        }
    }

    /// Sets the inner radius ratio.
    pub fn with_inner_ratio(mut self, inner_ratio: f64) -> Self {
        self.inner_ratio = inner_ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the hover grow delta.
    pub fn with_hover_grow(mut self, hover_grow: f64) -> Self {
        self.hover_grow = hover_grow;
        self
    }

    /// Sets the dimmed opacity.
    pub fn with_dim_opacity(mut self, dim_opacity: f64) -> Self {
        self.dim_opacity = dim_opacity;
        self
    }

    /// Lays out `data` in input order.
    ///
    /// Returns [`ChartGeometry::Empty`] when the values sum to zero (or there are none).
    /// Segments without a color take the palette entry for their position.
    pub fn layout(&self, data: &[Datum]) -> ChartGeometry<DonutGeometry> {
        let total: f64 = data.iter().map(Datum::magnitude).sum();
        if data.is_empty() || total <= 0.0 {
            return ChartGeometry::Empty;
        }

        // End angles derive from the running sum so the last segment closes exactly at 270°.
        let mut running = 0.0;
        let mut start = START_ANGLE;
        let segments = data
            .iter()
            .enumerate()
            .map(|(index, datum)| {
                let value = datum.magnitude();
                running += value;
                let end = START_ANGLE + running / total * FULL_TURN;
                let segment = ArcSegment {
                    name: datum.label.clone(),
                    value,
                    start_angle: start,
                    end_angle: end,
                    color: datum.color.unwrap_or_else(|| palette_entry(index).color()),
                    percentage: round_percent(value / total * 100.0),
                };
                start = end;
                segment
            })
            .collect();

        let center = Point::new(self.size / 2.0, self.size / 2.0);
        let outer_radius = (self.size / 2.0 - self.margin).max(0.0);
        ChartGeometry::Ready(DonutGeometry {
            center,
            outer_radius,
            inner_radius: outer_radius * self.inner_ratio,
            hover_grow: self.hover_grow,
            dim_opacity: self.dim_opacity,
            total,
            segments,
        })
    }
}

/// One angular slice.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSegment {
    /// Category label.
    pub name: String,
    /// Value drawn.
    pub value: f64,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// End angle in degrees.
    pub end_angle: f64,
    /// Fill color.
    pub color: Color,
    /// `round(100 * value / total)`, rounded on its own.
    pub percentage: u32,
}

impl ArcSegment {
    /// Angular span in degrees.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Laid-out donut.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutGeometry {
    /// Center of the drawing area.
    pub center: Point,
    /// Outer radius of un-hovered segments.
    pub outer_radius: f64,
    /// Inner radius.
    pub inner_radius: f64,
    /// Extra outer radius for the hovered segment.
    pub hover_grow: f64,
    /// Opacity for dimmed segments.
    pub dim_opacity: f64,
    /// Sum of all values; shown in the center.
    pub total: f64,
    /// Segments in input order.
    pub segments: Vec<ArcSegment>,
}

impl DonutGeometry {
    /// Outer radius of segment `index` under the given hover state.
    pub fn outer_radius_for(&self, index: usize, hovered: Option<usize>) -> f64 {
        if hovered == Some(index) {
            self.outer_radius + self.hover_grow
        } else {
            self.outer_radius
        }
    }

    /// Opacity of segment `index`: full when nothing or this segment is hovered.
    pub fn opacity_for(&self, index: usize, hovered: Option<usize>) -> f64 {
        match hovered {
            Some(h) if h != index => self.dim_opacity,
            _ => 1.0,
        }
    }

    fn polar(&self, radius: f64, degrees: f64) -> Point {
        let rad = degrees.to_radians();
        Point::new(
            self.center.x + radius * rad.cos(),
            self.center.y + radius * rad.sin(),
        )
    }

    /// SVG path data for segment `index` using `outer_radius` (pass
    /// [`DonutGeometry::outer_radius_for`] to honor hover).
    ///
    /// A segment covering the full circle is drawn as two half arcs so the path is not
    /// degenerate. With a zero inner radius the path closes through the center (pie slice).
    pub fn arc_path(&self, index: usize, outer_radius: f64) -> Option<String> {
        let seg = self.segments.get(index)?;
        let full = seg.sweep() >= FULL_TURN - FULL_TURN_EPSILON;
        let large_arc = u8::from(seg.sweep() > 180.0);
        let mid = seg.start_angle + seg.sweep() / 2.0;
        let r = coord(outer_radius);
        let ir = coord(self.inner_radius);

        let mut out = String::new();
        push_point(&mut out, 'M', self.polar(outer_radius, seg.start_angle));
        if full {
            self.arc_to(&mut out, r, 0, 1, self.polar(outer_radius, mid));
        }
        self.arc_to(&mut out, r, large_arc & u8::from(!full), 1, self.polar(outer_radius, seg.end_angle));

        if self.inner_radius > 0.0 {
            push_point(&mut out, 'L', self.polar(self.inner_radius, seg.end_angle));
            if full {
                self.arc_to(&mut out, ir, 0, 0, self.polar(self.inner_radius, mid));
            }
            self.arc_to(
                &mut out,
                ir,
                large_arc & u8::from(!full),
                0,
                self.polar(self.inner_radius, seg.start_angle),
            );
        } else {
            push_point(&mut out, 'L', self.center);
        }
        out.push('Z');
        Some(out)
    }

    fn arc_to(&self, out: &mut String, radius: f64, large_arc: u8, sweep: u8, to: Point) {
        let _ = write!(
            out,
            "A {radius} {radius} 0 {large_arc} {sweep} {} {} ",
            coord(to.x),
            coord(to.y)
        );
    }

    /// Segment `index` as a `BezPath`, flattened at `tolerance`.
    pub fn bez_path(&self, index: usize, outer_radius: f64, tolerance: f64) -> Option<BezPath> {
        let seg = self.segments.get(index)?;
        let circle = Circle::new(self.center, outer_radius);
        let segment = circle.segment(
            self.inner_radius,
            seg.start_angle.to_radians(),
            seg.sweep().to_radians(),
        );
        Some(segment.path_elements(tolerance).collect())
    }

    /// The segment under `pos`, if any.
    ///
    /// `hovered` widens the ring for the currently hovered segment so the pointer does not fall
    /// off its enlarged edge.
    pub fn hit_test(&self, pos: Point, hovered: Option<usize>) -> Option<usize> {
        let d: Vec2 = pos - self.center;
        let distance = d.hypot();
        if distance < self.inner_radius {
            return None;
        }
        let mut angle = d.atan2().to_degrees();
        if angle < START_ANGLE {
            angle += FULL_TURN;
        }
        self.segments.iter().enumerate().position(|(i, seg)| {
            angle >= seg.start_angle
                && angle < seg.end_angle
                && distance <= self.outer_radius_for(i, hovered)
        })
    }
}
