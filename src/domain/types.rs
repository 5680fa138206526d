//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - parsed straight off the forecast API's JSON body
//! - loaded from an injected-data file (`--inject`)
//! - handed to the report/TUI layers without further conversion

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the predicted series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_sales: f64,
}

/// Backend-computed aggregates shipped alongside the series.
///
/// The client trusts these three fields verbatim; the only figure it derives
/// on its own is the peak day (see `metrics`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub total_predicted_sales: f64,
    pub avg_predicted_sales: f64,
    pub forecast_days: u32,
}

/// A complete, usable forecast: non-empty chronological series + summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub forecast: Vec<ForecastPoint>,
    pub summary: ForecastSummary,
}

/// Client-side summary figures, recomputed fresh on every acquisition.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub total: f64,
    pub average: f64,
    pub days: u32,
    pub peak: ForecastPoint,
}

/// Chart-ready series: `labels[i]` and `values[i]` both derive from
/// `forecast[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Default polling attempt budget; with [`DEFAULT_INTERVAL_MS`] this bounds
/// the total wait at roughly a minute of backend catch-up time.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;

/// Default wait between polling attempts, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 3000;

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults and `FORECAST_API_URL`).
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Explicit endpoint override (`--endpoint`); falls back to the
    /// `FORECAST_API_URL` env var, then the built-in default.
    pub endpoint: Option<String>,
    /// Total polling attempt budget.
    pub max_attempts: u32,
    /// Fixed wait between attempts, in milliseconds (no backoff).
    pub interval_ms: u64,
    /// Optional injected-data file with the same shape as the 200 body.
    pub inject: Option<PathBuf>,
    /// When false, the network fallback is skipped entirely and only
    /// injected data can satisfy the load.
    pub poll: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval_ms: DEFAULT_INTERVAL_MS,
            inject: None,
            poll: true,
        }
    }
}
