//! brewsight - coffee survey retrieval and comparison engine
//!
//! Pulls published survey CSV feeds through a resilient fetch
//! orchestrator, maps rows into typed records, and computes
//! percentile-based comparison reports for individual participants.
//!
//! The library is organized as a pipeline: `fetch` retrieves feed
//! documents, `csv` tokenizes and maps them, `assembler` merges the
//! feeds into a `SurveyDataset` snapshot, and `personalize` + `stats`
//! derive per-participant views and reports from that snapshot.

pub mod assembler;
pub mod cache;
pub mod config;
pub mod csv;
pub mod error;
pub mod fetch;
pub mod identity;
pub mod models;
pub mod personalize;
pub mod stats;
pub mod submit;

pub use crate::error::{Error, Result};

use crate::models::SurveyDataset;
use crate::personalize::{personalize, PersonalizedView};
use crate::stats::{comparison_report, AggregateSummary, ComparisonReport, UserSummary};

/// Build the full comparison report for one participant against the
/// assembled dataset.
///
/// The crowd aggregates are recomputed here on every call; datasets are
/// small (hundreds of rows) and the snapshot is rebuilt per run anyway.
pub fn participant_report(
    dataset: &SurveyDataset,
    participant_id: Option<&str>,
) -> ComparisonReport {
    let view = personalize(dataset, participant_id);
    let user = user_summary(&view);
    let aggregate = aggregate_summary(dataset);
    comparison_report(&user, &aggregate)
}

fn user_summary(view: &PersonalizedView<'_>) -> UserSummary {
    let preferences = view.coffee_preferences();
    UserSummary {
        favorite_brewing_method: view
            .preference_response
            .map(|r| r.coffee_types.clone())
            .filter(|m| !m.trim().is_empty()),
        favorite_coffee: preferences.favorite_coffees.first().cloned(),
        worst_coffee: preferences.least_favorite_coffees.first().cloned(),
        ratings: view.own_ratings(),
        tasting_notes: view.own_notes(),
    }
}

fn aggregate_summary(dataset: &SurveyDataset) -> AggregateSummary {
    let brewing_methods = dataset
        .preference_data
        .iter()
        .map(|r| r.coffee_types.clone())
        .collect();

    // Every participant's favorite and least-favorite coffees, ties
    // contributing one entry each
    let mut favorite_choices = Vec::new();
    let mut worst_choices = Vec::new();
    let mut seen: Vec<&str> = Vec::new();
    for response in &dataset.taste_test_data {
        if seen.contains(&response.uuid.as_str()) {
            continue;
        }
        seen.push(&response.uuid);
        let preferences = personalize(dataset, Some(&response.uuid)).coffee_preferences();
        favorite_choices.extend(preferences.favorite_coffees);
        worst_choices.extend(preferences.least_favorite_coffees);
    }

    AggregateSummary {
        brewing_methods,
        favorite_choices,
        worst_choices,
        all_ratings: dataset.ratings_by_participant(),
        all_tasting_notes: dataset.all_tasting_notes(),
    }
}
