// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG rendering of chart geometry.
//!
//! Hover is static in a file, so tooltips become `<title>` children.

use std::fmt::Write;

use hrdash_charts::{BarGeometry, BarOrientation, CalendarLayout, DonutGeometry, LineGeometry};
use hrdash_metrics::format_compact;
use kurbo::Rect;
use peniko::Color;

const LABEL_FILL: &str = "#9ca3af";

fn open_svg(out: &mut String, view: Rect) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    );
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = (rgba.a != 255).then(|| f64::from(rgba.a) / 255.0);
    (fill, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o:.2}""#);
    }
}

fn write_title(out: &mut String, text: &str) {
    let _ = write!(out, "<title>{}</title>", escape_xml(text));
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Donut segments with the total in the hole.
pub(crate) fn donut_svg(geom: &DonutGeometry) -> String {
    let size = 2.0 * geom.center.x;
    let mut out = String::new();
    open_svg(&mut out, Rect::new(0.0, 0.0, size, size));
    for (i, seg) in geom.segments.iter().enumerate() {
        let Some(d) = geom.arc_path(i, geom.outer_radius_for(i, None)) else {
            continue;
        };
        let _ = write!(out, r#"<path d="{d}""#);
        write_paint_attr(&mut out, "fill", seg.color);
        out.push('>');
        write_title(&mut out, &format!("{}: {} ({}%)", seg.name, seg.value, seg.percentage));
        out.push_str("</path>\n");
    }
    let _ = writeln!(
        out,
        r##"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="24" fill="#ffffff">{}</text>"##,
        geom.center.x,
        geom.center.y,
        format_compact(geom.total)
    );
    out.push_str("</svg>\n");
    out
}

/// Grid, gradient area, line, point markers and thinned x labels.
pub(crate) fn line_svg(geom: &LineGeometry, id: &str) -> String {
    let spec = geom.spec();
    let (stroke, _) = svg_paint(spec.color);
    let mut out = String::new();
    open_svg(&mut out, Rect::new(0.0, 0.0, spec.width, spec.height));
    let _ = writeln!(
        out,
        r#"<defs><linearGradient id="{id}" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="{stroke}" stop-opacity="0.3"/><stop offset="100%" stop-color="{stroke}" stop-opacity="0.05"/></linearGradient></defs>"#
    );
    for y in geom.grid_lines() {
        let _ = writeln!(
            out,
            r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{LABEL_FILL}" stroke-opacity="0.1"/>"#,
            spec.padding,
            spec.width - spec.padding
        );
    }
    let _ = writeln!(out, r#"<path d="{}" fill="url(#{id})"/>"#, geom.area_path());
    let _ = writeln!(
        out,
        r#"<path d="{}" fill="none" stroke="{stroke}" stroke-width="3" stroke-linecap="round" stroke-linejoin="round"/>"#,
        geom.line_path()
    );
    for p in &geom.points {
        let _ = write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{stroke}">"#,
            p.position.x,
            p.position.y,
            geom.point_radius(p.index, None)
        );
        if let Some(tip) = geom.tooltip(p.index) {
            write_title(&mut out, &format!("{}: {}", tip.label, tip.value));
        }
        out.push_str("</circle>\n");
    }
    for label in geom.axis_labels() {
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="12" fill="{LABEL_FILL}">{}</text>"#,
            label.anchor.x,
            label.anchor.y,
            escape_xml(&label.text)
        );
    }
    out.push_str("</svg>\n");
    out
}

/// Horizontal rows with a label line, or columns with labels under the baseline.
pub(crate) fn bar_svg(geom: &BarGeometry) -> String {
    let label_room = 24.0;
    let mut out = String::new();
    open_svg(&mut out, Rect::new(0.0, 0.0, geom.width, geom.height + label_room));
    for (i, bar) in geom.bars.iter().enumerate() {
        let track = bar.track;
        let _ = writeln!(
            out,
            r##"<rect x="{}" y="{}" width="{}" height="{}" rx="6" fill="#1f2937"/>"##,
            track.x0,
            track.y0,
            track.width(),
            track.height()
        );
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="6""#,
            bar.rect.x0,
            bar.rect.y0,
            bar.rect.width(),
            bar.rect.height()
        );
        write_paint_attr(&mut out, "fill", bar.color);
        out.push('>');
        if let Some(tip) = geom.tooltip(i) {
            write_title(&mut out, &tip);
        }
        out.push_str("</rect>\n");

        let anchor = bar.label_anchor(geom.orientation);
        let (x, y, align) = match geom.orientation {
            BarOrientation::Vertical => (anchor.x, anchor.y + 16.0, "middle"),
            BarOrientation::Horizontal => (anchor.x, anchor.y - 6.0, "start"),
        };
        let _ = writeln!(
            out,
            r#"<text x="{x}" y="{y}" text-anchor="{align}" font-size="12" fill="{LABEL_FILL}">{}</text>"#,
            escape_xml(&bar.label)
        );
    }
    out.push_str("</svg>\n");
    out
}

/// Heatmap grid, day numbers and weekday header.
pub(crate) fn calendar_svg(layout: &CalendarLayout) -> String {
    let header = layout.weekday_header();
    let bottom = header.first().map_or(layout.height, |(_, p)| p.y + 8.0);
    let width = header.last().map_or(layout.width, |(_, p)| p.x + 20.0).max(layout.width);
    let mut out = String::new();
    open_svg(&mut out, Rect::new(0.0, 0.0, width, bottom));
    for cell in layout.cells() {
        let r = cell.rect;
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="8""#,
            r.x0,
            r.y0,
            r.width(),
            r.height()
        );
        write_paint_attr(&mut out, "fill", cell.tier.color());
        out.push('>');
        let tip = cell.tooltip();
        write_title(&mut out, &format!("{}\n{}", tip.heading, tip.detail));
        out.push_str("</rect>\n");
        let center = r.center();
        let _ = writeln!(
            out,
            r##"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="12" fill="#ffffff" fill-opacity="0.7">{}</text>"##,
            center.x, center.y, cell.heat.day
        );
    }
    for (name, p) in header {
        let _ = writeln!(
            out,
            r##"<text x="{}" y="{}" text-anchor="middle" font-size="12" fill="#6b7280">{name}</text>"##,
            p.x, p.y
        );
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use hrdash_charts::{BarSpec, Datum, DonutSpec, LineSpec};

    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"R&D <"ops">"#), "R&amp;D &lt;&quot;ops&quot;&gt;");
    }

    #[test]
    fn paint_carries_opacity_only_when_translucent() {
        let mut out = String::new();
        write_paint_attr(&mut out, "fill", Color::from_rgba8(0x3b, 0x82, 0xf6, 255));
        assert_eq!(out, r##" fill="#3b82f6""##);
        out.clear();
        write_paint_attr(&mut out, "fill", Color::from_rgba8(0xef, 0x44, 0x44, 77));
        assert_eq!(out, r##" fill="#ef4444" fill-opacity="0.30""##);
    }

    #[test]
    fn charts_render_their_geometry() {
        let data = vec![Datum::new("Eng", 3.0), Datum::new("R&D", 1.0)];
        let donut = DonutSpec::new(200.0).layout(&data).into_ready().unwrap();
        let svg = donut_svg(&donut);
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("R&amp;D: 1 (25%)"), "{svg}");

        let line = LineSpec::default().layout(&data).into_ready().unwrap();
        let svg = line_svg(&line, "g");
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(&line.line_path()), "{svg}");

        let bars = BarSpec::horizontal().layout(&data).into_ready().unwrap();
        assert_eq!(bar_svg(&bars).matches("<rect").count(), 4);
    }
}
