// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Self-contained HTML report.

use std::fmt::Write;

use hrdash_charts::{PALETTE, heat_legend};
use hrdash_metrics::{DashboardStats, format_compact};

use crate::svg::escape_xml;

#[derive(Clone, Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    /// Inline SVG, or `None` for the empty-data placeholder.
    pub(crate) svg: Option<String>,
}

impl HtmlSection {
    pub(crate) fn new(title: impl Into<String>, svg: Option<String>) -> Self {
        Self {
            title: title.into(),
            svg,
        }
    }
}

fn stat_card(out: &mut String, label: &str, value: &str, note: &str) {
    let _ = writeln!(
        out,
        r#"<div class="card stat"><div class="label">{}</div><div class="value">{}</div><div class="note">{}</div></div>"#,
        escape_xml(label),
        escape_xml(value),
        escape_xml(note)
    );
}

pub(crate) fn render_report(title: &str, stats: &DashboardStats, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>",
        escape_xml(title)
    );
    out.push_str(
        "<style>\n\
         body { background: #111827; color: #f9fafb; font-family: system-ui, sans-serif; margin: 24px; }\n\
         .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 16px; }\n\
         .card { background: #1f2937; border: 1px solid #374151; border-radius: 12px; padding: 16px; }\n\
         .stat .label, .note, .legend { color: #9ca3af; font-size: 12px; }\n\
         .stat .value { font-size: 28px; font-weight: 700; margin: 4px 0; }\n\
         .empty { color: #6b7280; padding: 48px 0; text-align: center; }\n\
         .swatch { display: inline-block; width: 12px; height: 12px; border-radius: 3px; margin: 0 4px 0 12px; }\n\
         svg { max-width: 100%; height: auto; }\n\
         </style>\n</head>\n<body>\n",
    );
    let _ = writeln!(out, "<h1>{}</h1>", escape_xml(title));

    out.push_str("<div class=\"grid\">\n");
    stat_card(
        &mut out,
        "Total Employees",
        &format_compact(stats.total_employees as f64),
        &format!("{} active, {} on leave", stats.active, stats.on_leave),
    );
    stat_card(
        &mut out,
        "Present Today",
        &stats.today_present.to_string(),
        &format!("{:+}% vs yesterday", stats.attendance_change),
    );
    stat_card(
        &mut out,
        "Attendance Rate",
        &format!("{}%", stats.attendance_rate),
        "unique check-ins / head count",
    );
    stat_card(
        &mut out,
        "Departments",
        &stats.departments.to_string(),
        "",
    );
    out.push_str("</div>\n<div class=\"grid\" style=\"margin-top:16px\">\n");

    for section in sections {
        let _ = writeln!(out, "<div class=\"card\"><h3>{}</h3>", escape_xml(&section.title));
        match &section.svg {
            Some(svg) => out.push_str(svg),
            None => out.push_str("<div class=\"empty\">No data available</div>\n"),
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");

    out.push_str("<p class=\"legend\">Attendance Rate:");
    for tier in heat_legend() {
        let _ = write!(
            out,
            r#"<span class="swatch" style="background:{};opacity:{}%"></span>{}"#,
            tier.hex,
            tier.opacity,
            escape_xml(tier.legend)
        );
    }
    out.push_str("</p>\n<p class=\"legend\">Palette:");
    for entry in &PALETTE {
        let _ = write!(
            out,
            r#"<span class="swatch" style="background:{}" title="{}"></span>"#,
            entry.hex, entry.fill
        );
    }
    out.push_str("</p>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_shows_placeholders_and_stats() {
        let stats = DashboardStats {
            total_employees: 1500,
            today_present: 3,
            yesterday_present: 4,
            attendance_rate: 75,
            attendance_change: -25,
            active: 2,
            on_leave: 1,
            departments: 1,
        };
        let sections = vec![
            HtmlSection::new("Departments", None),
            HtmlSection::new("Trend", Some("<svg></svg>".into())),
        ];
        let html = render_report("Q2 <draft>", &stats, &sections);
        assert!(html.contains("<h1>Q2 &lt;draft&gt;</h1>"), "title escaped");
        assert!(html.contains("No data available"), "empty placeholder");
        assert!(html.contains("<svg></svg>"), "chart inlined");
        assert!(html.contains("1.5K"), "compact head count");
        assert!(html.contains("-25% vs yesterday"), "signed change");
    }
}
