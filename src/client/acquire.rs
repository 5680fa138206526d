//! Top-level acquisition strategy: injected fast path, polling fallback.
//!
//! Some deployments can hand the client a precomputed forecast out-of-band
//! (the `--inject` file). When that data is usable we never touch the network; otherwise
//! we fall back to the bounded polling loop. Disabling polling turns this
//! into the fast-path-only deployment mode — one strategy, one knob.

use std::time::Duration;

use crate::client::classify::ResponseBody;
use crate::client::poll::{poll, ForecastEndpoint, PollResult};
use crate::domain::{DashboardConfig, ForecastResult};
use crate::error::AppError;

/// User-facing message for a spent retry budget. No automatic full retry is
/// attempted; the user re-runs when the backend has caught up.
const EXHAUSTED_MESSAGE: &str =
    "Forecast data not available. The backend may still be computing; please try again shortly.";

/// Acquire a complete forecast, preferring injected data over the network.
///
/// - usable injected data (non-empty series + summary) returns immediately
///   with zero exchanges;
/// - unusable injected data falls through to polling rather than failing;
/// - exhaustion (or polling disabled with nothing injected) surfaces a single
///   acquisition failure.
pub fn acquire<E, S>(
    injected: Option<ResponseBody>,
    endpoint: &mut E,
    config: &DashboardConfig,
    sleep: &mut S,
) -> Result<ForecastResult, AppError>
where
    E: ForecastEndpoint + ?Sized,
    S: FnMut(Duration),
{
    if let Some(body) = injected {
        match body.into_ready() {
            Some(result) => {
                log::info!("Using injected forecast data ({} days).", result.forecast.len());
                return Ok(result);
            }
            None => log::warn!("Injected forecast data is empty or incomplete; ignoring it."),
        }
    }

    if !config.poll {
        return Err(AppError::new(
            3,
            "No usable injected forecast data and polling is disabled (--no-poll).",
        ));
    }

    let interval = Duration::from_millis(config.interval_ms);
    match poll(endpoint, config.max_attempts, interval, sleep) {
        PollResult::Ready(result) => Ok(result),
        PollResult::Exhausted => Err(AppError::new(3, EXHAUSTED_MESSAGE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::classify::Exchange;
    use crate::client::testutil::{computing_exchange, ready_exchange, ScriptedEndpoint};
    use crate::domain::{ForecastPoint, ForecastSummary};
    use chrono::NaiveDate;

    fn injected_body(days: u32) -> ResponseBody {
        let forecast = (1..=days)
            .map(|d| ForecastPoint {
                date: NaiveDate::from_ymd_opt(2026, 3, d).unwrap(),
                predicted_sales: 100.0 * d as f64,
            })
            .collect::<Vec<_>>();
        let total: f64 = forecast.iter().map(|p| p.predicted_sales).sum();
        ResponseBody {
            summary: Some(ForecastSummary {
                total_predicted_sales: total,
                avg_predicted_sales: total / days as f64,
                forecast_days: days,
            }),
            forecast,
            message: None,
            error: None,
        }
    }

    fn config() -> DashboardConfig {
        DashboardConfig {
            max_attempts: 5,
            interval_ms: 1,
            ..DashboardConfig::default()
        }
    }

    #[test]
    fn injected_data_short_circuits_the_network() {
        let mut endpoint = ScriptedEndpoint::new(vec![ready_exchange()]);
        let mut sleeps = 0;
        let result = acquire(
            Some(injected_body(3)),
            &mut endpoint,
            &config(),
            &mut |_| sleeps += 1,
        )
        .unwrap();
        assert_eq!(result.forecast.len(), 3);
        assert_eq!(endpoint.exchanges, 0);
        assert_eq!(sleeps, 0);
    }

    #[test]
    fn empty_injected_data_falls_through_to_polling() {
        let mut endpoint = ScriptedEndpoint::new(vec![ready_exchange()]);
        let empty = ResponseBody::default();
        let result =
            acquire(Some(empty), &mut endpoint, &config(), &mut |_| {}).unwrap();
        assert_eq!(result.forecast.len(), 1);
        assert_eq!(endpoint.exchanges, 1);
    }

    #[test]
    fn absent_injected_data_polls_until_ready() {
        // 202 twice, then a valid 200: three exchanges total.
        let mut endpoint = ScriptedEndpoint::new(vec![
            computing_exchange(),
            computing_exchange(),
            ready_exchange(),
        ]);
        let result = acquire(None, &mut endpoint, &config(), &mut |_| {}).unwrap();
        assert_eq!(result.summary.forecast_days, 1);
        assert_eq!(endpoint.exchanges, 3);
    }

    #[test]
    fn exhaustion_surfaces_one_acquisition_failure() {
        let mut endpoint = ScriptedEndpoint::new(
            (0..5).map(|_| computing_exchange()).collect::<Vec<_>>(),
        );
        let err = acquire(None, &mut endpoint, &config(), &mut |_| {}).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(endpoint.exchanges, 5);
    }

    #[test]
    fn no_poll_without_injected_data_fails_without_exchanging() {
        let mut endpoint = ScriptedEndpoint::new(vec![ready_exchange()]);
        let cfg = DashboardConfig {
            poll: false,
            ..config()
        };
        let err = acquire(None, &mut endpoint, &cfg, &mut |_| {}).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(endpoint.exchanges, 0);
    }

    #[test]
    fn no_poll_with_injected_data_still_succeeds() {
        let mut endpoint = ScriptedEndpoint::new(vec![]);
        let cfg = DashboardConfig {
            poll: false,
            ..config()
        };
        let result =
            acquire(Some(injected_body(2)), &mut endpoint, &cfg, &mut |_| {}).unwrap();
        assert_eq!(result.forecast.len(), 2);
        assert_eq!(endpoint.exchanges, 0);
    }

    #[test]
    fn transport_only_backend_exhausts_cleanly() {
        let mut endpoint = ScriptedEndpoint::new(
            (0..5)
                .map(|_| Exchange::Transport("dns failure".to_string()))
                .collect::<Vec<_>>(),
        );
        let err = acquire(None, &mut endpoint, &config(), &mut |_| {}).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(endpoint.exchanges, 5);
    }
}
