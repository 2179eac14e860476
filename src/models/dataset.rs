//! Assembled in-memory survey dataset

use crate::models::{PreferenceResponse, TasteTestResponse};
use serde::{Deserialize, Serialize};

/// Simple data-quality metrics computed at assembly time.
///
/// `completion_rate` is an observable metric, not correctness-critical:
/// 1.0 when both feeds produced records, 0.5 when one did, 0.0 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataQuality {
    pub total_responses: usize,
    pub completion_rate: f64,
}

/// Snapshot of both response feeds plus derived coffee identifiers.
///
/// Built fresh on every top-level assembly; downstream consumers treat
/// it as immutable for the duration of one render cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyDataset {
    pub preference_data: Vec<PreferenceResponse>,
    pub taste_test_data: Vec<TasteTestResponse>,
    /// Distinct coffee identifiers observed in taste test rows,
    /// in first-encounter order
    pub unique_coffees: Vec<String>,
    pub data_quality: DataQuality,
}

impl SurveyDataset {
    /// Assemble a dataset from mapped feed records, deriving unique
    /// coffees and quality metrics.
    pub fn from_feeds(
        preference_data: Vec<PreferenceResponse>,
        taste_test_data: Vec<TasteTestResponse>,
    ) -> Self {
        let mut unique_coffees: Vec<String> = Vec::new();
        for response in &taste_test_data {
            if !unique_coffees.contains(&response.which_coffee) {
                unique_coffees.push(response.which_coffee.clone());
            }
        }

        let completion_rate = match (
            !preference_data.is_empty(),
            !taste_test_data.is_empty(),
        ) {
            (true, true) => 1.0,
            (false, false) => 0.0,
            _ => 0.5,
        };

        let data_quality = DataQuality {
            total_responses: preference_data.len() + taste_test_data.len(),
            completion_rate,
        };

        Self {
            preference_data,
            taste_test_data,
            unique_coffees,
            data_quality,
        }
    }

    /// All enjoyment ratings for one coffee.
    pub fn ratings_for(&self, coffee_id: &str) -> Vec<f64> {
        self.taste_test_data
            .iter()
            .filter(|r| r.which_coffee == coffee_id)
            .map(|r| r.overall_enjoyment)
            .collect()
    }

    /// Enjoyment ratings grouped per participant, for generosity and
    /// consistency percentiles.
    pub fn ratings_by_participant(&self) -> Vec<Vec<f64>> {
        let mut order: Vec<&str> = Vec::new();
        let mut grouped: std::collections::HashMap<&str, Vec<f64>> =
            std::collections::HashMap::new();
        for response in &self.taste_test_data {
            if !grouped.contains_key(response.uuid.as_str()) {
                order.push(&response.uuid);
            }
            grouped
                .entry(response.uuid.as_str())
                .or_default()
                .push(response.overall_enjoyment);
        }
        order
            .into_iter()
            .map(|uuid| grouped.remove(uuid).unwrap_or_default())
            .collect()
    }

    /// Every participant's tasting-note lists.
    pub fn all_tasting_notes(&self) -> Vec<Vec<String>> {
        self.taste_test_data
            .iter()
            .map(|r| r.notes_list())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_dataset;

    #[test]
    fn unique_coffees_preserve_encounter_order() {
        let dataset = sample_dataset();
        // Sample rows rate D, then E, then F
        assert_eq!(dataset.unique_coffees, vec!["D", "E", "F"]);
    }

    #[test]
    fn completion_rate_reflects_feed_presence() {
        let both = SurveyDataset::from_feeds(
            sample_dataset().preference_data,
            sample_dataset().taste_test_data,
        );
        assert_eq!(both.data_quality.completion_rate, 1.0);

        let one = SurveyDataset::from_feeds(sample_dataset().preference_data, Vec::new());
        assert_eq!(one.data_quality.completion_rate, 0.5);

        let neither = SurveyDataset::from_feeds(Vec::new(), Vec::new());
        assert_eq!(neither.data_quality.completion_rate, 0.0);
        assert_eq!(neither.data_quality.total_responses, 0);
    }

    #[test]
    fn ratings_by_participant_groups_by_uuid() {
        let dataset = sample_dataset();
        let grouped = dataset.ratings_by_participant();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0], vec![2.0]);
        assert_eq!(grouped[1], vec![4.5, 4.5]);
    }
}
