// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line and area geometry.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Color;

use crate::datum::{ChartGeometry, Datum};
use crate::palette::palette_entry;
use crate::scale::ScaleLinear;
use crate::svg::path_data;

/// Distance between the plot bottom and the x-axis label baseline.
const AXIS_LABEL_OFFSET: f64 = 20.0;

/// Line chart configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSpec {
    /// Width of the drawing box.
    pub width: f64,
    /// Height of the drawing box.
    pub height: f64,
    /// Padding on every side of the plot area.
    pub padding: f64,
    /// Radius of a point marker.
    pub point_radius: f64,
    /// Radius of the hovered point marker.
    pub hover_radius: f64,
    /// Number of horizontal grid lines, spread evenly from top to bottom.
    pub grid_lines: usize,
    /// Upper bound on the number of x-axis labels.
    pub max_axis_labels: usize,
    /// Stroke, marker and fill color.
    pub color: Color,
}

impl Default for LineSpec {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 200.0,
            padding: 40.0,
            point_radius: 4.0,
            hover_radius: 6.0,
            grid_lines: 5,
            max_axis_labels: 6,
            color: palette_entry(0).color(),
        }
    }
}

impl LineSpec {
    /// Creates a spec with the default box and the given height.
    pub fn new(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    /// Sets the box width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the series color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the number of grid lines (`0` disables them).
    pub fn with_grid_lines(mut self, grid_lines: usize) -> Self {
        self.grid_lines = grid_lines;
        self
    }

    /// Maps `data` into the plot area.
    ///
    /// Points are evenly spaced by index; a single point sits on the left padding edge. Values
    /// map against the series maximum, which is never below `1`.
    pub fn layout(&self, data: &[Datum]) -> ChartGeometry<LineGeometry> {
        if data.is_empty() {
            return ChartGeometry::Empty;
        }

        let max_value = data.iter().map(Datum::magnitude).fold(1.0, f64::max);
        let bottom = self.height - self.padding;
        let x_scale = ScaleLinear::new(
            (0.0, (data.len() - 1) as f64),
            (self.padding, self.width - self.padding),
        );
        let y_scale = ScaleLinear::new((0.0, max_value), (bottom, self.padding));

        let points: Vec<ChartPoint> = data
            .iter()
            .enumerate()
            .map(|(index, datum)| {
                let value = datum.magnitude();
                ChartPoint {
                    position: Point::new(x_scale.map(index as f64), y_scale.map(value)),
                    label: datum.label.clone(),
                    value,
                    index,
                }
            })
            .collect();

        let mut line = BezPath::new();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                line.move_to(p.position);
            } else {
                line.line_to(p.position);
            }
        }

        let mut area = line.clone();
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            area.line_to((last.position.x, bottom));
            area.line_to((first.position.x, bottom));
            area.close_path();
        }

        log::trace!("line layout: {} points, max {max_value}", points.len());
        ChartGeometry::Ready(LineGeometry {
            spec: *self,
            max_value,
            points,
            line,
            area,
        })
    }
}

/// A data point in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    /// Pixel position.
    pub position: Point,
    /// Source label.
    pub label: String,
    /// Source value (clamped to be non-negative).
    pub value: f64,
    /// Position in the input series.
    pub index: usize,
}

/// What a hovered point shows.
#[derive(Clone, Debug, PartialEq)]
pub struct PointTooltip {
    /// Source label.
    pub label: String,
    /// Source value.
    pub value: f64,
}

/// An x-axis label.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    /// Index of the labelled point.
    pub index: usize,
    /// Label text.
    pub text: String,
    /// Anchor (text is centered on `x`, baseline at `y`).
    pub anchor: Point,
}

/// Laid-out line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineGeometry {
    spec: LineSpec,
    /// Value mapped to the top of the plot area.
    pub max_value: f64,
    /// Points in input order.
    pub points: Vec<ChartPoint>,
    /// Polyline through every point.
    pub line: BezPath,
    /// The polyline closed along the plot bottom, for the fill.
    pub area: BezPath,
}

impl LineGeometry {
    /// The [`LineSpec`] this geometry was laid out with.
    pub fn spec(&self) -> &LineSpec {
        &self.spec
    }

    /// y of the plot bottom.
    pub fn baseline(&self) -> f64 {
        self.spec.height - self.spec.padding
    }

    /// SVG path data for the polyline.
    pub fn line_path(&self) -> String {
        path_data(&self.line)
    }

    /// SVG path data for the filled area.
    pub fn area_path(&self) -> String {
        path_data(&self.area)
    }

    /// Marker radius for point `index`.
    pub fn point_radius(&self, index: usize, hovered: Option<usize>) -> f64 {
        if hovered == Some(index) {
            self.spec.hover_radius
        } else {
            self.spec.point_radius
        }
    }

    /// The point whose x is closest to `pos.x`; ties resolve to the earlier point.
    pub fn nearest_point(&self, pos: Point) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for p in &self.points {
            let d = (p.position.x - pos.x).abs();
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((p.index, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// The point whose marker contains `pos`, honoring the hovered marker's larger radius.
    pub fn point_at(&self, pos: Point, hovered: Option<usize>) -> Option<usize> {
        self.points
            .iter()
            .find(|p| p.position.distance(pos) <= self.point_radius(p.index, hovered))
            .map(|p| p.index)
    }

    /// Tooltip for point `index`: the source label and value, not pixel coordinates.
    pub fn tooltip(&self, index: usize) -> Option<PointTooltip> {
        self.points.get(index).map(|p| PointTooltip {
            label: p.label.clone(),
            value: p.value,
        })
    }

    /// y positions of the horizontal grid lines, top first.
    pub fn grid_lines(&self) -> Vec<f64> {
        let n = self.spec.grid_lines;
        if n == 0 {
            return Vec::new();
        }
        let top = self.spec.padding;
        let span = self.baseline() - top;
        let steps = (n - 1).max(1) as f64;
        (0..n).map(|i| top + span * i as f64 / steps).collect()
    }

    /// x-axis labels, thinned to every `ceil(n / max_axis_labels)`-th point.
    pub fn axis_labels(&self) -> Vec<AxisLabel> {
        let stride = self
            .points
            .len()
            .div_ceil(self.spec.max_axis_labels.max(1))
            .max(1);
        let y = self.baseline() + AXIS_LABEL_OFFSET;
        self.points
            .iter()
            .step_by(stride)
            .map(|p| AxisLabel {
                index: p.index,
                text: p.label.clone(),
                anchor: Point::new(p.position.x, y),
            })
            .collect()
    }
}
