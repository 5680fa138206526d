//! Formatted terminal output: KPI summary and the day-by-day series.
//!
//! We keep formatting code in one place so:
//! - the acquisition/derivation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::chart::{format_axis_date, format_full_date};
use crate::domain::{DerivedMetrics, ForecastResult};

/// Compact currency formatting for KPI figures: `$1.23M`, `$45.6K`, `$789`.
pub fn format_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        // Tiering is on the raw value, so rounding can still push the
        // display to four digits (999.6 -> "$1,000"); keep the separators.
        format!("${}", group_thousands(value.round() as i64))
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}

/// Format the KPI block shown at the top of the `fetch` report.
pub fn format_kpis(metrics: &DerivedMetrics) -> String {
    let mut out = String::new();

    out.push_str("=== fdeck - Sales Forecast ===\n");
    out.push_str(&format!("Total predicted sales : {}\n", format_currency(metrics.total)));
    out.push_str(&format!("Average per day       : {}\n", format_currency(metrics.average)));
    out.push_str(&format!("Forecast horizon      : {} days\n", metrics.days));
    out.push_str(&format!(
        "Peak day              : {} ({})\n",
        format_currency(metrics.peak.predicted_sales),
        format_full_date(metrics.peak.date),
    ));

    out
}

/// Format the day-by-day predicted series as a two-column table.
pub fn format_series(result: &ForecastResult) -> String {
    let mut out = String::new();

    out.push_str("\nDay-by-day forecast:\n");
    for point in &result.forecast {
        out.push_str(&format!(
            "  {:<8} {:>12.2}\n",
            format_axis_date(point.date),
            point.predicted_sales,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ForecastPoint, ForecastSummary};
    use chrono::NaiveDate;

    #[test]
    fn currency_tiers() {
        assert_eq!(format_currency(2_345_678.0), "$2.35M");
        assert_eq!(format_currency(45_600.0), "$45.6K");
        assert_eq!(format_currency(1_000.0), "$1.0K");
        assert_eq!(format_currency(789.4), "$789");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn sub_thousand_tier_keeps_separators_when_rounding_up() {
        // 999.6 sits below the K tier but rounds to four digits.
        assert_eq!(format_currency(999.6), "$1,000");
        assert_eq!(format_currency(999.4), "$999");
    }

    #[test]
    fn kpi_block_contains_all_four_figures() {
        let metrics = DerivedMetrics {
            total: 1_500_000.0,
            average: 50_000.0,
            days: 30,
            peak: ForecastPoint {
                date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
                predicted_sales: 72_500.0,
            },
        };

        let out = format_kpis(&metrics);
        assert!(out.contains("$1.50M"));
        assert!(out.contains("$50.0K"));
        assert!(out.contains("30 days"));
        assert!(out.contains("$72.5K"));
        assert!(out.contains("Mar 14, 2026"));
    }

    #[test]
    fn series_table_lists_every_day_in_order() {
        let result = ForecastResult {
            forecast: vec![
                ForecastPoint {
                    date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                    predicted_sales: 120.5,
                },
                ForecastPoint {
                    date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
                    predicted_sales: 98.0,
                },
            ],
            summary: ForecastSummary {
                total_predicted_sales: 218.5,
                avg_predicted_sales: 109.25,
                forecast_days: 2,
            },
        };

        let out = format_series(&result);
        let first = out.find("Mar 1").unwrap();
        let second = out.find("Mar 2").unwrap();
        assert!(first < second);
        assert!(out.contains("120.50"));
        assert!(out.contains("98.00"));
    }
}
