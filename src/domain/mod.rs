//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the wire-shaped forecast types (`ForecastPoint`, `ForecastResult`)
//! - client-computed outputs (`DerivedMetrics`, `ChartSeries`)
//! - run configuration (`DashboardConfig`)

pub mod types;

pub use types::*;
