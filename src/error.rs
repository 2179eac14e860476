//! Common error types for brewsight

use thiserror::Error;

/// Common result type for brewsight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error classes surfaced by the ingestion layer.
///
/// The fetch orchestrator exhausts every URL/strategy combination and
/// retry cycle before surfacing any of these; the statistics engine
/// never produces them (invalid inputs yield `None` / empty results).
#[derive(Error, Debug)]
pub enum Error {
    /// Non-timeout transport or HTTP failure
    #[error("Network error: {0}")]
    Network(String),

    /// Per-attempt deadline exceeded
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// Body was empty or too short to contain header + data
    #[error("No data received: {0}")]
    NoData(String),

    /// Structurally insufficient CSV document (fewer than 2 lines)
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Rank by diagnostic specificity; used when the orchestrator has
    /// collected several failures and must pick one to surface.
    /// `NoData` beats `Timeout` beats `Network`.
    pub(crate) fn specificity(&self) -> u8 {
        match self {
            Error::NoData(_) => 3,
            Error::Timeout(_) => 2,
            Error::Network(_) => 1,
            _ => 0,
        }
    }
}
