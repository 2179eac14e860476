//! Dataset assembly
//!
//! Drives the fetch orchestrator and row mapper once per configured
//! feed and merges the results into a single immutable `SurveyDataset`
//! snapshot. On total failure the caller may permit degradation to the
//! built-in sample dataset instead of an error.

use crate::cache::{expiry_in_hours, Cache, NoopCache};
use crate::config::AppConfig;
use crate::csv::mapper::{parse_feed, FeedSchema};
use crate::fetch::{FetchOrchestrator, Transport};
use crate::models::sample::sample_dataset;
use crate::models::{
    CoffeeMetadata, CoffeeQualityEstimate, ParticipantHarshnessEstimate, PreferenceResponse,
    SurveyDataset, TasteTestResponse,
};
use crate::{Error, Result};
use tracing::{debug, info, warn};

const COFFEE_METADATA_CACHE_KEY: &str = "coffee_metadata_csv";

/// Sole producer of `SurveyDataset` values.
pub struct DatasetAssembler<T: Transport> {
    orchestrator: FetchOrchestrator<T>,
    config: AppConfig,
    cache: Box<dyn Cache>,
}

impl<T: Transport> DatasetAssembler<T> {
    pub fn new(transport: T, config: AppConfig) -> Self {
        Self {
            orchestrator: FetchOrchestrator::new(transport, config.fetch.clone()),
            config,
            cache: Box::new(NoopCache),
        }
    }

    /// Attach an expiring cache; only the coffee metadata feed uses it.
    pub fn with_cache(mut self, cache: Box<dyn Cache>) -> Self {
        self.cache = cache;
        self
    }

    /// Fetch both response feeds and assemble a fresh dataset.
    ///
    /// Any unrecovered fetch or document failure either degrades to the
    /// sample dataset (when `permit_fallback`) or propagates.
    pub async fn assemble(&self, permit_fallback: bool) -> Result<SurveyDataset> {
        match self.assemble_live().await {
            Ok(dataset) => Ok(dataset),
            Err(err) if permit_fallback => {
                warn!(%err, "Survey feed assembly failed, using built-in sample dataset");
                Ok(sample_dataset())
            }
            Err(err) => Err(err),
        }
    }

    async fn assemble_live(&self) -> Result<SurveyDataset> {
        let taste_test_data: Vec<TasteTestResponse> =
            self.fetch_feed(&self.config.feeds.taste_test).await?;
        let preference_data: Vec<PreferenceResponse> =
            self.fetch_feed(&self.config.feeds.preference).await?;

        let dataset = SurveyDataset::from_feeds(preference_data, taste_test_data);
        info!(
            preference_responses = dataset.preference_data.len(),
            taste_test_responses = dataset.taste_test_data.len(),
            unique_coffees = dataset.unique_coffees.len(),
            completion_rate = dataset.data_quality.completion_rate,
            "Assembled survey dataset"
        );
        Ok(dataset)
    }

    /// Coffee metadata, served from the expiring cache when possible.
    pub async fn fetch_coffee_metadata(&self) -> Result<Vec<CoffeeMetadata>> {
        if let Some(bytes) = self.cache.get(COFFEE_METADATA_CACHE_KEY) {
            if let Ok(body) = String::from_utf8(bytes) {
                if let Ok(records) = parse_feed::<CoffeeMetadata>(&body) {
                    debug!(count = records.len(), "Using cached coffee metadata");
                    return Ok(records);
                }
            }
            // Unreadable cache entry; fall through to a live fetch
        }

        let body = self
            .orchestrator
            .fetch_text(&self.require_url(&self.config.feeds.coffee_metadata)?)
            .await?;
        let records = parse_feed::<CoffeeMetadata>(&body)?;
        self.cache.put(
            COFFEE_METADATA_CACHE_KEY,
            body.into_bytes(),
            expiry_in_hours(self.config.cache_ttl_hours),
        );
        Ok(records)
    }

    /// Per-coffee quality estimates (always live).
    pub async fn fetch_quality_estimates(&self) -> Result<Vec<CoffeeQualityEstimate>> {
        self.fetch_feed(&self.config.feeds.coffee_quality).await
    }

    /// Per-participant harshness/discrimination estimates (always live).
    pub async fn fetch_harshness_estimates(&self) -> Result<Vec<ParticipantHarshnessEstimate>> {
        self.fetch_feed(&self.config.feeds.participant_harshness)
            .await
    }

    async fn fetch_feed<R: FeedSchema>(&self, url: &str) -> Result<Vec<R>> {
        let url = self.require_url(url)?;
        let body = self.orchestrator.fetch_text(&url).await?;
        parse_feed::<R>(&body)
    }

    fn require_url(&self, url: &str) -> Result<String> {
        if url.trim().is_empty() {
            return Err(Error::Config("feed URL not configured".to_string()));
        }
        Ok(url.to_string())
    }
}
