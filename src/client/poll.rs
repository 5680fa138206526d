//! Bounded, fixed-interval polling against the forecast endpoint.
//!
//! The backend may still be computing when we first ask, so acquisition is a
//! small retry loop: one exchange per attempt, classify, stop on `Ready` or
//! when the budget runs out. The interval is constant — the whole window is
//! tens of seconds, so backoff buys nothing here.

use std::time::Duration;

use crate::client::classify::{classify, AttemptOutcome, Exchange};
use crate::domain::ForecastResult;

/// A source of acquisition exchanges.
///
/// The real implementation is the blocking HTTP client; tests substitute
/// scripted sequences of responses.
pub trait ForecastEndpoint {
    fn exchange(&mut self) -> Exchange;
}

/// Terminal result of one polling run. `Exhausted` is produced only here,
/// never by classification.
#[derive(Debug, Clone)]
pub enum PollResult {
    Ready(ForecastResult),
    Exhausted,
}

/// Status-line wording for attempt `n`: the first few attempts read as
/// "generating", later ones show the attempt counter so a long wait is
/// visibly progressing.
pub fn attempt_status(attempt: u32, max_attempts: u32) -> String {
    if attempt <= 3 {
        format!("Generating forecast... (attempt {attempt}/{max_attempts})")
    } else {
        format!("Computing forecast ({attempt}/{max_attempts})...")
    }
}

/// Run up to `max_attempts` sequential exchanges, sleeping `interval` between
/// attempts via `sleep`.
///
/// Guarantees:
/// - `Ready` on attempt K returns after exactly K exchanges and K−1 sleeps.
/// - a fully retryable run performs `max_attempts` exchanges and
///   `max_attempts − 1` sleeps.
/// - `max_attempts = 0` returns `Exhausted` without a single exchange.
///
/// The sleep hook is injected so tests can count delays instead of waiting
/// them out.
pub fn poll<E, S>(
    endpoint: &mut E,
    max_attempts: u32,
    interval: Duration,
    sleep: &mut S,
) -> PollResult
where
    E: ForecastEndpoint + ?Sized,
    S: FnMut(Duration),
{
    for attempt in 1..=max_attempts {
        log::info!("{}", attempt_status(attempt, max_attempts));

        match classify(endpoint.exchange()) {
            AttemptOutcome::Ready(result) => {
                log::info!("Forecast ready after {attempt} attempt(s).");
                return PollResult::Ready(result);
            }
            AttemptOutcome::StillComputing(msg) => {
                log::info!("Server: {}", msg.as_deref().unwrap_or("still computing"));
            }
            AttemptOutcome::Degraded(msg) => {
                // Not fatal: the backend may recover within the budget.
                log::warn!("Server degraded: {}", msg.as_deref().unwrap_or("no detail"));
            }
            AttemptOutcome::Unexpected(code) => {
                log::warn!("Endpoint returned unexpected status {code}.");
            }
            AttemptOutcome::TransportFailure(err) => {
                log::warn!("Attempt {attempt} failed before a response: {err}");
            }
        }

        if attempt < max_attempts {
            sleep(interval);
        }
    }

    PollResult::Exhausted
}
