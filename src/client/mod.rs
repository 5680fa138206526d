//! Forecast acquisition: HTTP exchange, classification, polling, strategy.
//!
//! - one-shot exchange + body schema (`http`, `classify`)
//! - bounded fixed-interval retry loop (`poll`)
//! - injected-data fast path with polling fallback (`acquire`)

pub mod acquire;
pub mod classify;
pub mod http;
pub mod poll;

pub use acquire::*;
pub use classify::*;
pub use http::*;
pub use poll::*;

#[cfg(test)]
pub(crate) mod testutil {
    //! Scripted endpoints shared by the polling and acquisition tests.

    use chrono::NaiveDate;

    use crate::client::classify::{Exchange, ResponseBody};
    use crate::client::poll::ForecastEndpoint;
    use crate::domain::{ForecastPoint, ForecastSummary};

    /// Plays back a scripted list of exchanges and counts how many were taken.
    pub(crate) struct ScriptedEndpoint {
        script: Vec<Exchange>,
        pub exchanges: usize,
    }

    impl ScriptedEndpoint {
        pub(crate) fn new(script: Vec<Exchange>) -> Self {
            Self {
                script,
                exchanges: 0,
            }
        }
    }

    impl ForecastEndpoint for ScriptedEndpoint {
        fn exchange(&mut self) -> Exchange {
            let i = self.exchanges;
            self.exchanges += 1;
            self.script
                .get(i)
                .cloned()
                .unwrap_or(Exchange::Transport("script exhausted".to_string()))
        }
    }

    /// A valid 200 exchange with a one-day forecast.
    pub(crate) fn ready_exchange() -> Exchange {
        let forecast = vec![ForecastPoint {
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            predicted_sales: 100.0,
        }];
        Exchange::Response {
            status: 200,
            body: Some(ResponseBody {
                forecast,
                summary: Some(ForecastSummary {
                    total_predicted_sales: 100.0,
                    avg_predicted_sales: 100.0,
                    forecast_days: 1,
                }),
                message: None,
                error: None,
            }),
        }
    }

    /// A 202 "still computing" exchange.
    pub(crate) fn computing_exchange() -> Exchange {
        Exchange::Response {
            status: 202,
            body: Some(ResponseBody {
                message: Some("computing".to_string()),
                ..Default::default()
            }),
        }
    }
}
