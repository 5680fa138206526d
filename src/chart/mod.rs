//! Chart-ready series transform and date formatting presets.
//!
//! Two independent presets, kept deliberately separate:
//!
//! - axis ticks: month abbreviation + day, no year (`Mar 5`) — compact enough
//!   for a dense x axis
//! - peak-day display: month + day + year (`Mar 5, 2026`) — shown once, so it
//!   carries the full date

use chrono::NaiveDate;

use crate::domain::{ChartSeries, ForecastPoint};

/// Short preset used for chart axis tick labels.
pub fn format_axis_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Full preset used for the peak-day KPI.
pub fn format_full_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Convert a forecast series into index-aligned labels and values.
///
/// Pure and order-preserving: `labels[i]`/`values[i]` derive from
/// `forecast[i]` for every index.
pub fn to_chart_series(forecast: &[ForecastPoint]) -> ChartSeries {
    let labels = forecast.iter().map(|p| format_axis_date(p.date)).collect();
    let values = forecast.iter().map(|p| p.predicted_sales).collect();
    ChartSeries { labels, values }
}
