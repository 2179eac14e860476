//! Resilient CSV retrieval from loosely-specified publishing endpoints
//!
//! The publisher (Google Sheets published-CSV) is unreliable: the same
//! sheet answers on several URL shapes, some request header sets get
//! rejected intermittently, and bodies occasionally come back empty.
//! This module derives alternate URL variants, tries an ordered matrix
//! of (URL x request strategy) combinations with per-attempt timeouts,
//! and retries whole cycles with linear backoff before surfacing the
//! most specific failure observed.

pub mod orchestrator;
pub mod strategy;
pub mod transport;
pub mod variants;

pub use orchestrator::FetchOrchestrator;
pub use strategy::{request_strategies, RequestStrategy};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use variants::derive_url_variants;
