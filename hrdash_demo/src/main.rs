// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writes an HTML dashboard report for one HR snapshot.
//!
//! Reads `HRDASH_SNAPSHOT` (JSON export of the `employees`, `attendance` and `departments`
//! collections) or generates a sample, then renders every chart to inline SVG.

mod config;
mod html;
mod snapshot;
mod svg;

use std::error::Error;

use hrdash_charts::{
    BarSpec, CalendarSpec, DashboardSeries, DonutSpec, LineSpec, palette_entry,
};
use hrdash_metrics::DateKeyStyle;

use crate::config::DemoConfig;
use crate::html::HtmlSection;
use crate::snapshot::OwnedSnapshot;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::from_env()?;
    let style = DateKeyStyle::default();
    let owned = match &config.snapshot {
        Some(path) => {
            log::info!("reading snapshot from {}", path.display());
            OwnedSnapshot::load(path)?
        }
        None => {
            log::info!("no HRDASH_SNAPSHOT set; using a generated sample");
            OwnedSnapshot::sample(config.today, style)
        }
    };

    let series = DashboardSeries::compute(&owned.view(), config.today, style);
    let sections = sections(&series);
    let title = format!("HR dashboard, {}", config.today.format("%b %-d, %Y"));
    let report = html::render_report(&title, &series.stats, &sections);

    std::fs::write(&config.output, report)?;
    log::info!(
        "wrote {} ({} employees, {} attendance records)",
        config.output.display(),
        owned.employees.len(),
        owned.attendance.len()
    );
    Ok(())
}

fn sections(series: &DashboardSeries) -> Vec<HtmlSection> {
    let weekly = LineSpec::new(250.0)
        .with_color(palette_entry(1).color())
        .layout(&series.weekly_data());
    let departments = DonutSpec::new(250.0).layout(&series.departments);
    let statuses = BarSpec::horizontal().layout(&series.statuses);
    let heatmap = CalendarSpec::default().layout(&series.heatmap);
    let growth = LineSpec::new(200.0)
        .with_color(palette_entry(2).color())
        .layout(&series.growth_data());

    vec![
        HtmlSection::new(
            "Weekly Attendance",
            weekly.as_ready().map(|g| svg::line_svg(g, "weekly-fill")),
        ),
        HtmlSection::new(
            "Department Distribution",
            departments.as_ready().map(svg::donut_svg),
        ),
        HtmlSection::new("Employee Status", statuses.as_ready().map(svg::bar_svg)),
        HtmlSection::new(
            "Attendance Heatmap (Last 30 Days)",
            heatmap.as_ready().map(svg::calendar_svg),
        ),
        HtmlSection::new(
            "Employee Growth",
            growth.as_ready().map(|g| svg::line_svg(g, "growth-fill")),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn sample_report_has_every_chart() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let owned = OwnedSnapshot::sample(today, DateKeyStyle::UsNumeric);
        let series = DashboardSeries::compute(&owned.view(), today, DateKeyStyle::UsNumeric);
        let sections = sections(&series);
        assert_eq!(sections.len(), 5);
        assert!(sections.iter().all(|s| s.svg.is_some()), "sample fills every chart");
    }

    #[test]
    fn empty_snapshot_renders_placeholders() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let owned = OwnedSnapshot::default();
        let series = DashboardSeries::compute(&owned.view(), today, DateKeyStyle::UsNumeric);
        let sections = sections(&series);
        assert!(sections[1].svg.is_none(), "no departments");
        assert!(sections[2].svg.is_none(), "no statuses");
        assert!(sections[0].svg.is_some(), "an all-zero week still draws");
    }
}
