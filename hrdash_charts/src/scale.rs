// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! These provide the coordinate mappings the geometry engines share: a continuous linear scale
//! for values and point positions, and a band scale for categorical bar slots.

/// A linear mapping from a continuous domain to a continuous range.
///
/// A degenerate domain (`d0 == d1`) maps everything to the start of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }
}

/// A discrete band scale for categorical charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the start position for a band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((0.0, 0.0), (40.0, 560.0));
        assert_eq!(s.map(0.0), 40.0);
        assert_eq!(s.map(3.0), 40.0);
    }

    #[test]
    fn linear_scale_can_invert_range() {
        let s = ScaleLinear::new((0.0, 10.0), (160.0, 40.0));
        assert!((s.map(0.0) - 160.0).abs() < 1e-9, "bottom");
        assert!((s.map(10.0) - 40.0).abs() < 1e-9, "top");
        assert!((s.map(5.0) - 100.0).abs() < 1e-9, "middle");
    }

    #[test]
    fn bands_fill_the_range() {
        let band = ScaleBand::new((0.0, 100.0), 4).with_padding(0.0, 0.0);
        assert!((band.band_width() - 25.0).abs() < 1e-9, "equal widths");
        assert!((band.x(3) - 75.0).abs() < 1e-9, "last band start");
        assert_eq!(ScaleBand::new((0.0, 100.0), 0).band_width(), 0.0);
    }
}
