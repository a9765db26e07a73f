// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar geometry, vertical columns or horizontal progress rows.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::datum::{ChartGeometry, Datum};
use crate::palette::palette_entry;
use crate::scale::{ScaleBand, ScaleLinear};

/// Which way bars grow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarOrientation {
    /// Columns standing on a shared baseline.
    #[default]
    Vertical,
    /// Rows growing left to right inside a full-width track.
    Horizontal,
}

/// Bar chart configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSpec {
    /// Growth direction.
    pub orientation: BarOrientation,
    /// Width of the drawing area (the track length of horizontal bars).
    pub width: f64,
    /// Track height of vertical bars.
    pub height: f64,
    /// Thickness of a horizontal track.
    pub row_height: f64,
    /// Space reserved for a row's label line above its track.
    pub label_height: f64,
    /// Gap between horizontal rows.
    pub row_gap: f64,
    /// Gap between vertical columns as a fraction of a column's width.
    pub column_padding: f64,
    /// Fill for bars without their own color.
    pub color: Color,
}

impl Default for BarSpec {
    fn default() -> Self {
        Self::new(BarOrientation::Vertical)
    }
}

impl BarSpec {
    /// Creates a spec with the default dimensions for `orientation`.
    pub fn new(orientation: BarOrientation) -> Self {
        Self {
            orientation,
            width: 600.0,
            height: 300.0,
            row_height: 32.0,
            label_height: 20.0,
            row_gap: 16.0,
            column_padding: 0.1,
            color: palette_entry(0).color(),
        }
    }

    /// A horizontal spec.
    pub fn horizontal() -> Self {
        Self::new(BarOrientation::Horizontal)
    }

    /// Sets the drawing width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the vertical track height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Sets the fallback bar color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Lays out `data` in input order.
    ///
    /// Lengths are proportional to `max(values, 1)`, so an all-zero series draws empty tracks
    /// rather than dividing by zero. Only an empty series yields [`ChartGeometry::Empty`].
    pub fn layout(&self, data: &[Datum]) -> ChartGeometry<BarGeometry> {
        if data.is_empty() {
            return ChartGeometry::Empty;
        }
        let max_value = data.iter().map(Datum::magnitude).fold(1.0, f64::max);
        let bars = match self.orientation {
            BarOrientation::Vertical => self.vertical_columns(data, max_value),
            BarOrientation::Horizontal => self.horizontal_rows(data, max_value),
        };
        let height = match self.orientation {
            BarOrientation::Vertical => self.height,
            BarOrientation::Horizontal => bars
                .last()
                .map_or(0.0, |b: &BarShape| b.track.y1),
        };
        ChartGeometry::Ready(BarGeometry {
            orientation: self.orientation,
            width: self.width,
            height,
            max_value,
            bars,
        })
    }

    fn shape(&self, datum: &Datum, fraction: f64, length: f64, rect: Rect, track: Rect) -> BarShape {
        BarShape {
            label: datum.label.clone(),
            value: datum.magnitude(),
            fraction,
            length,
            rect,
            track,
            color: datum.color.unwrap_or(self.color),
            percentage: datum.percentage,
        }
    }

    fn vertical_columns(&self, data: &[Datum], max_value: f64) -> Vec<BarShape> {
        let band =
            ScaleBand::new((0.0, self.width), data.len()).with_padding(self.column_padding, 0.0);
        let bw = band.band_width();
        let y = ScaleLinear::new((0.0, max_value), (self.height, 0.0));
        data.iter()
            .enumerate()
            .map(|(i, datum)| {
                let x0 = band.x(i);
                let top = y.map(datum.magnitude());
                let rect = Rect::new(x0, top, x0 + bw, self.height);
                let track = Rect::new(x0, 0.0, x0 + bw, self.height);
                self.shape(datum, datum.magnitude() / max_value, rect.height(), rect, track)
            })
            .collect()
    }

    fn horizontal_rows(&self, data: &[Datum], max_value: f64) -> Vec<BarShape> {
        let x = ScaleLinear::new((0.0, max_value), (0.0, self.width));
        let step = self.label_height + self.row_height + self.row_gap;
        data.iter()
            .enumerate()
            .map(|(i, datum)| {
                let y0 = i as f64 * step + self.label_height;
                let track = Rect::new(0.0, y0, self.width, y0 + self.row_height);
                let rect = Rect::new(0.0, y0, x.map(datum.magnitude()), y0 + self.row_height);
                self.shape(datum, datum.magnitude() / max_value, rect.width(), rect, track)
            })
            .collect()
    }
}

/// One laid-out bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarShape {
    /// Category label.
    pub label: String,
    /// Value drawn (clamped to be non-negative).
    pub value: f64,
    /// `value / max(values, 1)`, in `0..=1`.
    pub fraction: f64,
    /// Drawn length along the growth axis.
    pub length: f64,
    /// The filled bar.
    pub rect: Rect,
    /// The full track the bar grows inside.
    pub track: Rect,
    /// Fill color.
    pub color: Color,
    /// Optional percentage shown instead of the value in horizontal tooltips.
    pub percentage: Option<u32>,
}

impl BarShape {
    /// Where the category label goes: centered under a column, or at the start of a row's label
    /// line.
    pub fn label_anchor(&self, orientation: BarOrientation) -> Point {
        match orientation {
            BarOrientation::Vertical => Point::new(self.track.center().x, self.track.y1),
            BarOrientation::Horizontal => Point::new(self.track.x0, self.track.y0),
        }
    }
}

/// Laid-out bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    /// Growth direction.
    pub orientation: BarOrientation,
    /// Drawing width.
    pub width: f64,
    /// Drawing height (track height, or the bottom of the last row).
    pub height: f64,
    /// The divisor lengths were computed against.
    pub max_value: f64,
    /// Bars in input order.
    pub bars: Vec<BarShape>,
}

impl BarGeometry {
    /// The bar whose track contains `pos`.
    pub fn hit_test(&self, pos: Point) -> Option<usize> {
        self.bars.iter().position(|b| b.track.contains(pos))
    }

    /// Hover text for bar `index`.
    ///
    /// Horizontal rows prefer the percentage when one was supplied; vertical columns always
    /// show the value.
    pub fn tooltip(&self, index: usize) -> Option<String> {
        let bar = self.bars.get(index)?;
        Some(match (self.orientation, bar.percentage) {
            (BarOrientation::Horizontal, Some(pct)) if pct > 0 => format!("{pct}%"),
            _ => bar.value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn data(values: &[f64]) -> Vec<Datum> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Datum::new(alloc::format!("b{i}"), v))
            .collect()
    }

    #[test]
    fn empty_series_is_empty() {
        assert!(BarSpec::default().layout(&[]).is_empty());
        assert!(BarSpec::horizontal().layout(&[]).is_empty());
    }

    #[test]
    fn vertical_bars_stand_on_the_baseline() {
        let geom = BarSpec::default()
            .layout(&data(&[2.0, 4.0, 0.0]))
            .into_ready()
            .unwrap();
        let lengths: Vec<f64> = geom.bars.iter().map(|b| b.length).collect();
        assert_eq!(lengths, vec![150.0, 300.0, 0.0]);
        assert!(
            geom.bars.iter().all(|b| close(b.rect.y1, 300.0)),
            "shared baseline"
        );
        assert!(close(geom.bars[0].rect.y0, 150.0), "top of first bar");
        let names: Vec<&str> = geom.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(names, vec!["b0", "b1", "b2"], "input order kept");
        for w in geom.bars.windows(2) {
            assert!(w[0].rect.x1 < w[1].rect.x0, "columns do not overlap");
            assert!(close(w[0].rect.width(), w[1].rect.width()), "equal widths");
        }
    }

    #[test]
    fn all_zero_series_uses_unit_maximum() {
        let geom = BarSpec::default()
            .layout(&data(&[0.0, 0.0]))
            .into_ready()
            .unwrap();
        assert!(close(geom.max_value, 1.0), "floor of 1");
        assert!(geom.bars.iter().all(|b| b.length == 0.0), "no NaN lengths");
    }

    #[test]
    fn horizontal_rows_fill_against_the_track() {
        let geom = BarSpec::horizontal()
            .layout(&data(&[1.0, 3.0]))
            .into_ready()
            .unwrap();
        assert!(close(geom.bars[0].length, 200.0), "one third");
        assert!(close(geom.bars[1].length, 600.0), "full");
        assert!(close(geom.bars[1].track.y0, 88.0), "second row below the first");
        assert!(close(geom.height, 120.0), "ends at the last track");
        let anchor = geom.bars[1].label_anchor(BarOrientation::Horizontal);
        assert!(close(anchor.y, 88.0), "label line sits on the track");
    }

    #[test]
    fn tooltips_and_hit_testing() {
        let mut rows = data(&[1.0, 3.0]);
        rows[0] = rows[0].clone().with_percentage(25);
        let horizontal = BarSpec::horizontal().layout(&rows).into_ready().unwrap();
        assert_eq!(horizontal.tooltip(0).as_deref(), Some("25%"));
        assert_eq!(horizontal.tooltip(1).as_deref(), Some("3"));
        assert_eq!(horizontal.hit_test(Point::new(10.0, 100.0)), Some(1));
        assert_eq!(horizontal.hit_test(Point::new(10.0, 60.0)), None, "row gap");

        let vertical = BarSpec::default().layout(&rows).into_ready().unwrap();
        assert_eq!(vertical.tooltip(0).as_deref(), Some("1"));
        assert_eq!(vertical.hit_test(Point::new(10.0, 5.0)), Some(0));
        assert!(vertical.tooltip(2).is_none(), "out of range");
    }

    #[test]
    fn explicit_colors_win() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        let geom = BarSpec::default()
            .layout(&[Datum::new("a", 1.0).with_color(red), Datum::new("b", 1.0)])
            .into_ready()
            .unwrap();
        assert_eq!(geom.bars[0].color, red);
        assert_eq!(geom.bars[1].color, palette_entry(0).color());
    }
}
