//! Response classification for the forecast endpoint.
//!
//! The backend computes the forecast in the background, so a single GET can
//! land in several states. Classification is a pure mapping from one
//! completed exchange to exactly one [`AttemptOutcome`]; it never decides
//! whether to keep trying — that is the polling loop's job.

use serde::Deserialize;

use crate::domain::{ForecastResult, ForecastSummary};

/// Lenient superset of every body shape the endpoint may send.
///
/// `200` carries `forecast` + `summary`, `202` carries `message`, `503`
/// carries `message` and/or `error`. Parsing all of them through one schema
/// means a malformed field degrades to "not usable yet" instead of a hard
/// parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub forecast: Vec<crate::domain::ForecastPoint>,
    #[serde(default)]
    pub summary: Option<ForecastSummary>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ResponseBody {
    /// A body is usable only with a non-empty series and a present summary.
    ///
    /// Anything less is treated as a premature response and retried, never
    /// as a terminal failure.
    pub fn into_ready(self) -> Option<ForecastResult> {
        if self.forecast.is_empty() {
            return None;
        }
        let summary = self.summary?;
        Some(ForecastResult {
            forecast: self.forecast,
            summary,
        })
    }
}

/// One completed acquisition exchange, reduced to what classification needs.
#[derive(Debug, Clone)]
pub enum Exchange {
    /// A response was obtained. `body` is `None` when the body was missing
    /// or did not parse as JSON.
    Response {
        status: u16,
        body: Option<ResponseBody>,
    },
    /// The request failed before any response (DNS, connection reset, timeout).
    Transport(String),
}

/// Classification of a single attempt.
///
/// Every variant except `Ready` is retryable.
#[derive(Debug, Clone)]
pub enum AttemptOutcome {
    Ready(ForecastResult),
    StillComputing(Option<String>),
    Degraded(Option<String>),
    Unexpected(u16),
    TransportFailure(String),
}

/// Map an exchange to its outcome. Status-code driven; no other signal is
/// consulted.
pub fn classify(exchange: Exchange) -> AttemptOutcome {
    let (status, body) = match exchange {
        Exchange::Transport(err) => return AttemptOutcome::TransportFailure(err),
        Exchange::Response { status, body } => (status, body),
    };

    match status {
        200 => {
            let body = body.unwrap_or_default();
            let message = body.message.clone();
            match body.into_ready() {
                Some(result) => AttemptOutcome::Ready(result),
                // A 200 with no usable payload is a premature response, not a
                // terminal failure.
                None => AttemptOutcome::StillComputing(message),
            }
        }
        202 => AttemptOutcome::StillComputing(body.and_then(|b| b.message)),
        503 => AttemptOutcome::Degraded(body.and_then(|b| b.message.or(b.error))),
        other => AttemptOutcome::Unexpected(other),
    }
}
