//! Shared "load dashboard" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! injected read -> acquire (fast path or polling) -> derive metrics -> chart series
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::chart::to_chart_series;
use crate::client::{acquire, ForecastClient};
use crate::domain::{ChartSeries, DashboardConfig, DerivedMetrics, ForecastResult};
use crate::error::AppError;
use crate::metrics::derive_metrics;

/// Everything the presentation layer needs from one successful load.
///
/// Owned by the load that produced it; the TUI replaces its snapshot
/// wholesale on reload.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub result: ForecastResult,
    pub metrics: DerivedMetrics,
    pub series: ChartSeries,
}

/// Acquire the forecast and compute everything the dashboard displays.
pub fn load_dashboard(config: &DashboardConfig) -> Result<DashboardData, AppError> {
    let injected = crate::io::read_injected(config.inject.as_deref())?;

    let mut client = ForecastClient::new(config.endpoint.as_deref());
    let result = acquire(injected, &mut client, config, &mut std::thread::sleep)?;

    finish_load(result)
}

/// Derivation + transform for an already-acquired result.
///
/// Split out so it can be exercised without a network-capable client.
pub fn finish_load(result: ForecastResult) -> Result<DashboardData, AppError> {
    let metrics = derive_metrics(&result)?;
    let series = to_chart_series(&result.forecast);

    Ok(DashboardData {
        result,
        metrics,
        series,
    })
}
