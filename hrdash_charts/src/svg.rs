// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path-data formatting.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write;

use kurbo::{BezPath, PathEl, Point};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Rounds to three decimals and normalizes `-0`.
pub(crate) fn coord(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0 + 0.0
}

pub(crate) fn push_point(out: &mut String, cmd: char, p: Point) {
    let _ = write!(out, "{cmd} {} {} ", coord(p.x), coord(p.y));
}

/// Formats a path as SVG path data (`M x y L x y ... Z`).
pub fn path_data(path: &BezPath) -> String {
    let mut out = String::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => push_point(&mut out, 'M', p),
            PathEl::LineTo(p) => push_point(&mut out, 'L', p),
            PathEl::QuadTo(c, p) => {
                push_point(&mut out, 'Q', c);
                let _ = write!(out, "{} {} ", coord(p.x), coord(p.y));
            }
            PathEl::CurveTo(c1, c2, p) => {
                push_point(&mut out, 'C', c1);
                let _ = write!(
                    out,
                    "{} {} {} {} ",
                    coord(c2.x),
                    coord(c2.y),
                    coord(p.x),
                    coord(p.y)
                );
            }
            PathEl::ClosePath => out.push_str("Z "),
        }
    }
    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn formats_lines_and_close() {
        let mut p = BezPath::new();
        p.move_to((40.0, 160.0));
        p.line_to((560.0, 40.123_456));
        p.close_path();
        assert_eq!(path_data(&p), "M 40 160 L 560 40.123 Z");
    }

    #[test]
    fn negative_zero_is_printed_as_zero() {
        let mut p = BezPath::new();
        p.move_to((-0.0, -0.000_1));
        assert_eq!(path_data(&p), "M 0 0");
    }
}
