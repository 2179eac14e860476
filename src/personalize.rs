//! Per-participant view over the assembled dataset
//!
//! Pure lookups by identity key. The view borrows from the dataset
//! snapshot and is never persisted.

use crate::models::{PreferenceResponse, SurveyDataset, TasteTestResponse};
use serde::Serialize;

/// Which feeds the participant has completed.
///
/// Personalized results unlock only when the participant appears in
/// every feed that requires completion (preference and taste test).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantStatus {
    pub has_participant_id: bool,
    pub has_preference_response: bool,
    pub has_taste_test_response: bool,
    pub can_view_personalized_results: bool,
    pub participant_id: Option<String>,
}

/// One participant's slice of the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalizedView<'a> {
    pub status: ParticipantStatus,
    pub preference_response: Option<&'a PreferenceResponse>,
    pub taste_test_responses: Vec<&'a TasteTestResponse>,
}

/// The participant's own coffee rankings, ties preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoffeePreferences {
    pub favorite_coffees: Vec<String>,
    pub least_favorite_coffees: Vec<String>,
    /// (coffee id, enjoyment) in encounter order; a re-rating of the
    /// same coffee overwrites the earlier value
    pub ratings: Vec<(String, f64)>,
}

/// Membership test for the participant across both response feeds.
pub fn participant_status(
    dataset: &SurveyDataset,
    participant_id: Option<&str>,
) -> ParticipantStatus {
    let Some(id) = participant_id else {
        return ParticipantStatus {
            has_participant_id: false,
            has_preference_response: false,
            has_taste_test_response: false,
            can_view_personalized_results: false,
            participant_id: None,
        };
    };

    let has_preference_response = dataset.preference_data.iter().any(|r| r.uuid == id);
    let has_taste_test_response = dataset.taste_test_data.iter().any(|r| r.uuid == id);

    ParticipantStatus {
        has_participant_id: true,
        has_preference_response,
        has_taste_test_response,
        can_view_personalized_results: has_preference_response && has_taste_test_response,
        participant_id: Some(id.to_string()),
    }
}

/// Extract the participant's own records by identity-key equality.
pub fn personalize<'a>(
    dataset: &'a SurveyDataset,
    participant_id: Option<&str>,
) -> PersonalizedView<'a> {
    let status = participant_status(dataset, participant_id);

    let preference_response = status.participant_id.as_deref().and_then(|id| {
        dataset.preference_data.iter().find(|r| r.uuid == id)
    });
    let taste_test_responses = match status.participant_id.as_deref() {
        Some(id) => dataset
            .taste_test_data
            .iter()
            .filter(|r| r.uuid == id)
            .collect(),
        None => Vec::new(),
    };

    PersonalizedView {
        status,
        preference_response,
        taste_test_responses,
    }
}

impl PersonalizedView<'_> {
    /// Highest- and lowest-rated coffees for this participant.
    ///
    /// No favorites are reported when only one coffee was rated or when
    /// every rating is identical; a single data point ranks nothing.
    pub fn coffee_preferences(&self) -> CoffeePreferences {
        let mut ratings: Vec<(String, f64)> = Vec::new();
        for response in &self.taste_test_responses {
            match ratings.iter_mut().find(|(id, _)| *id == response.which_coffee) {
                Some(entry) => entry.1 = response.overall_enjoyment,
                None => ratings.push((response.which_coffee.clone(), response.overall_enjoyment)),
            }
        }

        if ratings.len() <= 1 {
            return CoffeePreferences {
                ratings,
                ..Default::default()
            };
        }

        let max = ratings.iter().map(|(_, r)| *r).fold(f64::MIN, f64::max);
        let min = ratings.iter().map(|(_, r)| *r).fold(f64::MAX, f64::min);
        if max == min {
            return CoffeePreferences {
                ratings,
                ..Default::default()
            };
        }

        let favorite_coffees = ratings
            .iter()
            .filter(|(_, r)| *r == max)
            .map(|(id, _)| id.clone())
            .collect();
        let least_favorite_coffees = ratings
            .iter()
            .filter(|(_, r)| *r == min)
            .map(|(id, _)| id.clone())
            .collect();

        CoffeePreferences {
            favorite_coffees,
            least_favorite_coffees,
            ratings,
        }
    }

    /// All of the participant's enjoyment ratings.
    pub fn own_ratings(&self) -> Vec<f64> {
        self.taste_test_responses
            .iter()
            .map(|r| r.overall_enjoyment)
            .collect()
    }

    /// All of the participant's tasting notes, flattened.
    pub fn own_notes(&self) -> Vec<String> {
        self.taste_test_responses
            .iter()
            .flat_map(|r| r.notes_list())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_dataset;

    #[test]
    fn no_id_means_no_personalization() {
        let dataset = sample_dataset();
        let status = participant_status(&dataset, None);
        assert!(!status.has_participant_id);
        assert!(!status.can_view_personalized_results);

        let view = personalize(&dataset, None);
        assert!(view.preference_response.is_none());
        assert!(view.taste_test_responses.is_empty());
    }

    #[test]
    fn participant_in_both_feeds_unlocks_results() {
        let dataset = sample_dataset();
        let status = participant_status(&dataset, Some("q7oa8cg3vws"));
        assert!(status.has_preference_response);
        assert!(status.has_taste_test_response);
        assert!(status.can_view_personalized_results);
    }

    #[test]
    fn unknown_participant_locks_results() {
        let dataset = sample_dataset();
        let status = participant_status(&dataset, Some("stranger"));
        assert!(status.has_participant_id);
        assert!(!status.can_view_personalized_results);
    }

    #[test]
    fn personalize_extracts_own_rows_only() {
        let dataset = sample_dataset();
        let view = personalize(&dataset, Some("q7oa8cg3vws"));
        assert_eq!(view.taste_test_responses.len(), 2);
        assert!(view
            .taste_test_responses
            .iter()
            .all(|r| r.uuid == "q7oa8cg3vws"));
        assert_eq!(view.preference_response.unwrap().preference, "Tea");
    }

    #[test]
    fn equal_ratings_produce_no_favorites() {
        let dataset = sample_dataset();
        // q7oa8cg3vws rated E and F both 4.5
        let preferences = personalize(&dataset, Some("q7oa8cg3vws")).coffee_preferences();
        assert!(preferences.favorite_coffees.is_empty());
        assert!(preferences.least_favorite_coffees.is_empty());
        assert_eq!(preferences.ratings.len(), 2);
    }

    #[test]
    fn single_rating_produces_no_favorites() {
        let dataset = sample_dataset();
        let preferences = personalize(&dataset, Some("jq9hqap3f7g")).coffee_preferences();
        assert!(preferences.favorite_coffees.is_empty());
        assert_eq!(preferences.ratings, vec![("D".to_string(), 2.0)]);
    }

    #[test]
    fn distinct_ratings_split_favorites_with_ties() {
        let mut dataset = sample_dataset();
        let mut extra = dataset.taste_test_data[1].clone(); // E @ 4.5
        extra.which_coffee = "G".into();
        extra.overall_enjoyment = 2.0;
        dataset.taste_test_data.push(extra);

        let preferences = personalize(&dataset, Some("q7oa8cg3vws")).coffee_preferences();
        assert_eq!(preferences.favorite_coffees, vec!["E", "F"]);
        assert_eq!(preferences.least_favorite_coffees, vec!["G"]);
    }
}
