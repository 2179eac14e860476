//! Fetch orchestration state machine
//!
//! One logical fetch walks (url_index, strategy_index, cycle) in order:
//! URL variants outer, strategies inner, whole-matrix retry cycles with
//! linear backoff outermost. First success wins and nothing partial is
//! ever returned. Every failure class (rejected status, transport
//! error, per-attempt timeout, empty body) advances to the next
//! combination; when retries are exhausted the most specific error
//! observed is surfaced.

use crate::config::FetchConfig;
use crate::fetch::strategy::{request_strategies, RequestStrategy};
use crate::fetch::transport::Transport;
use crate::fetch::variants::derive_url_variants;
use crate::{Error, Result};
use std::time::Duration;

/// Resilient text fetcher over an injected transport.
pub struct FetchOrchestrator<T: Transport> {
    transport: T,
    config: FetchConfig,
}

impl<T: Transport> FetchOrchestrator<T> {
    pub fn new(transport: T, config: FetchConfig) -> Self {
        Self { transport, config }
    }

    /// Fetch a CSV body from the primary URL or any derived variant.
    ///
    /// Suspends on network I/O and on inter-cycle backoff delays.
    /// All-or-nothing: either a body with at least header + one data
    /// line, or the most specific error seen across every attempt.
    pub async fn fetch_text(&self, primary_url: &str) -> Result<String> {
        let mut best_error: Option<Error> = None;
        let total_cycles = self.config.max_retries + 1;

        for cycle in 0..total_cycles {
            if cycle > 0 {
                // Linear backoff: cycle n waits n * base delay
                let delay_ms = self.config.retry_delay_ms * u64::from(cycle);
                tracing::info!(cycle, delay_ms, "All combinations failed, retrying after backoff");
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }

            if let Some(body) = self.run_cycle(primary_url, cycle > 0, &mut best_error).await {
                return Ok(body);
            }
        }

        Err(best_error
            .unwrap_or_else(|| Error::Network("all fetch URLs and strategies failed".to_string())))
    }

    /// One complete pass over the URL x strategy matrix.
    ///
    /// Variants are recomputed each cycle; derivation is deterministic,
    /// which keeps the skip-first-combination rule safe.
    async fn run_cycle(
        &self,
        primary_url: &str,
        is_retry: bool,
        best_error: &mut Option<Error>,
    ) -> Option<String> {
        let urls = derive_url_variants(primary_url);
        let strategies = request_strategies();

        for (url_index, url) in urls.iter().enumerate() {
            for (strategy_index, strategy) in strategies.iter().enumerate() {
                if is_retry && url_index == 0 && strategy_index == 0 {
                    // This exact combination already failed last cycle
                    continue;
                }

                match self.attempt(url, strategy).await {
                    Ok(body) => {
                        tracing::info!(
                            url_index,
                            strategy = strategy.name,
                            bytes = body.len(),
                            "Fetched CSV body"
                        );
                        return Some(body);
                    }
                    Err(err) => {
                        tracing::debug!(
                            url_index,
                            strategy = strategy.name,
                            %err,
                            "Fetch attempt failed, advancing"
                        );
                        record_most_specific(best_error, err);
                    }
                }
            }
        }

        None
    }

    /// Single request with the per-attempt deadline applied.
    async fn attempt(&self, url: &str, strategy: &RequestStrategy) -> Result<String> {
        let deadline = Duration::from_millis(self.config.request_timeout_ms);
        let response =
            match tokio::time::timeout(deadline, self.transport.get(url, strategy.headers)).await {
                Err(_) => return Err(Error::Timeout(self.config.request_timeout_ms)),
                Ok(Err(err)) => return Err(err),
                Ok(Ok(response)) => response,
            };

        if !response.is_success() {
            return Err(Error::Network(format!("HTTP {}", response.status)));
        }

        let trimmed = response.body.trim();
        if trimmed.is_empty() {
            return Err(Error::NoData("empty response body".to_string()));
        }
        let line_count = trimmed.lines().count();
        if line_count < 2 {
            return Err(Error::NoData(format!(
                "insufficient data: only {} line(s)",
                line_count
            )));
        }

        Ok(response.body)
    }
}

/// Keep whichever error is more diagnostically specific.
fn record_most_specific(best: &mut Option<Error>, candidate: Error) {
    let keep = match best {
        Some(current) => candidate.specificity() > current.specificity(),
        None => true,
    };
    if keep {
        *best = Some(candidate);
    }
}
