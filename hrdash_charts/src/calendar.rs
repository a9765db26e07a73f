// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar heatmap layout.
//!
//! Cells are taken in chronological order and wrapped into rows of seven. The first row starts
//! with the oldest day, not on a fixed weekday, and the last row may be short.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hrdash_metrics::{HeatCell, Intensity};
use kurbo::{Point, Rect};
use peniko::Color;

use crate::datum::ChartGeometry;

/// How one intensity tier is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayTier {
    /// The tier.
    pub intensity: Intensity,
    /// Background styling token.
    pub token: &'static str,
    /// `#rrggbb` fill.
    pub hex: &'static str,
    /// Fill opacity in percent.
    pub opacity: u8,
    /// Legend text.
    pub legend: &'static str,
    rgb: [u8; 3],
}

impl DisplayTier {
    /// The fill as a color, opacity included.
    pub fn color(&self) -> Color {
        let [r, g, b] = self.rgb;
        let alpha = (u16::from(self.opacity) * 255 + 50) / 100;
        Color::from_rgba8(r, g, b, u8::try_from(alpha).unwrap_or(u8::MAX))
    }
}

const TIERS: [DisplayTier; 4] = [
    DisplayTier {
        intensity: Intensity::None,
        token: "bg-red-500/30",
        hex: "#ef4444",
        opacity: 30,
        legend: "<50%",
        rgb: [0xef, 0x44, 0x44],
    },
    DisplayTier {
        intensity: Intensity::Low,
        token: "bg-orange-500",
        hex: "#f97316",
        opacity: 100,
        legend: "50-70%",
        rgb: [0xf9, 0x73, 0x16],
    },
    DisplayTier {
        intensity: Intensity::Medium,
        token: "bg-yellow-500",
        hex: "#eab308",
        opacity: 100,
        legend: "70-90%",
        rgb: [0xea, 0xb3, 0x08],
    },
    DisplayTier {
        intensity: Intensity::High,
        token: "bg-green-500",
        hex: "#22c55e",
        opacity: 100,
        legend: ">90%",
        rgb: [0x22, 0xc5, 0x5e],
    },
];

/// The display tier for `intensity`.
pub fn display_tier(intensity: Intensity) -> &'static DisplayTier {
    match intensity {
        Intensity::None => &TIERS[0],
        Intensity::Low => &TIERS[1],
        Intensity::Medium => &TIERS[2],
        Intensity::High => &TIERS[3],
    }
}

/// Legend entries, lowest tier first.
pub fn heat_legend() -> &'static [DisplayTier; 4] {
    &TIERS
}

/// Hover text for one day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellTooltip {
    /// `Thu, Feb 29`.
    pub heading: String,
    /// `75% Attendance`.
    pub detail: String,
}

/// Tooltip text for `cell`.
pub fn tooltip_for(cell: &HeatCell) -> CellTooltip {
    CellTooltip {
        heading: format!("{}, {} {}", cell.weekday, cell.month, cell.day),
        detail: format!("{}% Attendance", cell.rate),
    }
}

/// Calendar grid configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalendarSpec {
    /// Side of a square cell.
    pub cell_size: f64,
    /// Gap between cells in both directions.
    pub gap: f64,
    /// Cells per row.
    pub week_length: usize,
}

impl Default for CalendarSpec {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            gap: 8.0,
            week_length: 7,
        }
    }
}

impl CalendarSpec {
    /// Sets the cell size.
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Sets the gap.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Wraps `cells` into rows.
    pub fn layout(&self, cells: &[HeatCell]) -> ChartGeometry<CalendarLayout> {
        if cells.is_empty() {
            return ChartGeometry::Empty;
        }
        let week_length = self.week_length.max(1);
        let pitch = self.cell_size + self.gap;
        let weeks: Vec<Vec<CalendarCell>> = cells
            .chunks(week_length)
            .enumerate()
            .map(|(week, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(column, heat)| {
                        let origin = Point::new(column as f64 * pitch, week as f64 * pitch);
                        CalendarCell {
                            week,
                            column,
                            rect: Rect::from_origin_size(origin, (self.cell_size, self.cell_size)),
                            tier: display_tier(heat.intensity),
                            heat: heat.clone(),
                        }
                    })
                    .collect()
            })
            .collect();

        let columns = cells.len().min(week_length) as f64;
        let rows = weeks.len() as f64;
        ChartGeometry::Ready(CalendarLayout {
            width: columns * pitch - self.gap,
            height: rows * pitch - self.gap,
            pitch,
            cell_size: self.cell_size,
            weeks,
        })
    }
}

/// One positioned day.
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarCell {
    /// Row index.
    pub week: usize,
    /// Column index.
    pub column: usize,
    /// Cell bounds.
    pub rect: Rect,
    /// How the cell is painted.
    pub tier: &'static DisplayTier,
    /// The source day.
    pub heat: HeatCell,
}

impl CalendarCell {
    /// Tooltip for this cell.
    pub fn tooltip(&self) -> CellTooltip {
        tooltip_for(&self.heat)
    }
}

/// Laid-out calendar grid.
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarLayout {
    /// Grid width.
    pub width: f64,
    /// Grid height.
    pub height: f64,
    pitch: f64,
    cell_size: f64,
    /// Rows of cells; the last one may be short.
    pub weeks: Vec<Vec<CalendarCell>>,
}

impl CalendarLayout {
    /// All cells in chronological order.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flatten()
    }

    /// The cell under `pos`; gaps and missing trailing cells hit nothing.
    pub fn hit_test(&self, pos: Point) -> Option<&CalendarCell> {
        if pos.x < 0.0 || pos.y < 0.0 || self.pitch <= 0.0 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "non-negative and floored"
        )]
        let (week, column) = ((pos.y / self.pitch) as usize, (pos.x / self.pitch) as usize);
        self.weeks
            .get(week)?
            .get(column)
            .filter(|cell| cell.rect.contains(pos))
    }

    /// Weekday labels centered under each column.
    ///
    /// Rows start at the oldest day, so the labels are read off the first row.
    pub fn weekday_header(&self) -> Vec<(&str, Point)> {
        let y = self.height + self.pitch - self.cell_size / 2.0;
        self.weeks
            .first()
            .into_iter()
            .flatten()
            .map(|cell| {
                let x = cell.column as f64 * self.pitch + self.cell_size / 2.0;
                (cell.heat.weekday.as_str(), Point::new(x, y))
            })
            .collect()
    }
}
