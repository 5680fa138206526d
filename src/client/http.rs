//! Blocking HTTP client for the forecast endpoint.

use reqwest::blocking::Client;

use crate::client::classify::{Exchange, ResponseBody};
use crate::client::poll::ForecastEndpoint;

/// Default for a locally run backend.
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/v1/forecast";

pub struct ForecastClient {
    client: Client,
    endpoint: String,
}

impl ForecastClient {
    /// Resolve the endpoint: explicit override, then `FORECAST_API_URL`
    /// (via `.env`), then the built-in default.
    pub fn new(endpoint_override: Option<&str>) -> Self {
        dotenvy::dotenv().ok();
        let endpoint = endpoint_override
            .map(str::to_string)
            .or_else(|| std::env::var("FORECAST_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ForecastEndpoint for ForecastClient {
    /// One GET against the endpoint, reduced to what classification needs.
    ///
    /// Body parse failures are folded into `body: None` rather than an error:
    /// classification treats an unusable body as retryable.
    fn exchange(&mut self) -> Exchange {
        match self.client.get(&self.endpoint).send() {
            Ok(resp) => {
                let status = resp.status().as_u16();
                let body = resp.json::<ResponseBody>().ok();
                Exchange::Response { status, body }
            }
            Err(e) => Exchange::Transport(e.to_string()),
        }
    }
}
