//! Derived KPI figures layered on top of the backend summary.
//!
//! Total, average, and day count come verbatim from the backend — the client
//! does not second-guess its aggregation. The one figure the backend does not
//! provide is the peak day, which we derive here.

use crate::domain::{DerivedMetrics, ForecastResult};
use crate::error::AppError;

/// Compute the dashboard KPI figures from an acquired forecast.
///
/// Errors only on an empty series, which acquisition validation rules out;
/// hitting that branch means a caller broke the contract.
pub fn derive_metrics(result: &ForecastResult) -> Result<DerivedMetrics, AppError> {
    let peak = peak_day(&result.forecast).ok_or_else(|| {
        AppError::new(4, "Cannot derive metrics from an empty forecast series.")
    })?;

    Ok(DerivedMetrics {
        total: result.summary.total_predicted_sales,
        average: result.summary.avg_predicted_sales,
        days: result.summary.forecast_days,
        peak: peak.clone(),
    })
}

/// Linear scan for the highest predicted day.
///
/// Replacement requires a strict greater-than, so ties keep the earliest day.
fn peak_day(forecast: &[crate::domain::ForecastPoint]) -> Option<&crate::domain::ForecastPoint> {
    let mut best = forecast.first()?;
    for point in &forecast[1..] {
        if point.predicted_sales > best.predicted_sales {
            best = point;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ForecastPoint, ForecastSummary};
    use chrono::NaiveDate;

    fn point(day: u32, sales: f64) -> ForecastPoint {
        ForecastPoint {
            date: NaiveDate::from_ymd_opt(2026, 4, day).unwrap(),
            predicted_sales: sales,
        }
    }

    fn result(points: Vec<ForecastPoint>) -> ForecastResult {
        ForecastResult {
            summary: ForecastSummary {
                total_predicted_sales: 1234.5,
                avg_predicted_sales: 411.5,
                forecast_days: points.len() as u32,
            },
            forecast: points,
        }
    }

    #[test]
    fn peak_is_the_maximum_day() {
        let r = result(vec![point(1, 100.0), point(2, 300.0), point(3, 200.0)]);
        let metrics = derive_metrics(&r).unwrap();
        assert_eq!(metrics.peak, point(2, 300.0));
    }

    #[test]
    fn duplicate_maxima_keep_the_earliest_day() {
        let r = result(vec![
            point(1, 100.0),
            point(2, 300.0),
            point(3, 300.0),
            point(4, 300.0),
        ]);
        let metrics = derive_metrics(&r).unwrap();
        assert_eq!(metrics.peak.date, NaiveDate::from_ymd_opt(2026, 4, 2).unwrap());
    }

    #[test]
    fn single_point_is_its_own_peak() {
        let r = result(vec![point(7, 42.0)]);
        let metrics = derive_metrics(&r).unwrap();
        assert_eq!(metrics.peak, point(7, 42.0));
    }

    #[test]
    fn summary_fields_pass_through_verbatim() {
        // The series deliberately disagrees with the summary: the backend's
        // aggregates win for total/average/days.
        let r = result(vec![point(1, 1.0), point(2, 2.0)]);
        let metrics = derive_metrics(&r).unwrap();
        assert_eq!(metrics.total, 1234.5);
        assert_eq!(metrics.average, 411.5);
        assert_eq!(metrics.days, 2);
    }

    #[test]
    fn empty_series_is_a_contract_error() {
        let r = result(vec![]);
        let err = derive_metrics(&r).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
