//! Built-in sample dataset
//!
//! Deterministic fallback used when every live fetch fails and the
//! caller permits degradation. Small and non-representative; suitable
//! for demos and tests, not for drawing conclusions.

use crate::models::{PreferenceResponse, SurveyDataset, TasteTestResponse};

fn preference(uuid: &str, preference: &str, timestamp: &str) -> PreferenceResponse {
    PreferenceResponse {
        uuid: uuid.to_string(),
        timestamp: timestamp.to_string(),
        preference: preference.to_string(),
        coffees_per_day: 0.0,
        teas_per_day: 0.0,
        black_coffee: String::new(),
        coffee_types: String::new(),
        roast_preference: String::new(),
        why_drink_coffee: String::new(),
        other_caffeinated_drinks: 0.0,
        frequency: String::new(),
        why_not_more_coffee: String::new(),
        decaf_coffee: String::new(),
        coffee_additions: String::new(),
    }
}

/// The fixed fallback dataset.
pub fn sample_dataset() -> SurveyDataset {
    let preference_data = vec![
        preference("jq9hqap3f7g", "Coffee", "6/2/2025 12:43:15"),
        preference("q7oa8cg3vws", "Tea", "6/2/2025 12:43:16"),
    ];

    let taste_test_data = vec![
        TasteTestResponse {
            uuid: "jq9hqap3f7g".into(),
            timestamp: "6/2/2025 12:43:15".into(),
            which_coffee: "D".into(),
            aroma: 2.5,
            flavor: 2.0,
            acidity: "Pleasant Acidity".into(),
            body: "Heavy".into(),
            aftertaste: 2.0,
            tasting_notes: "Woody".into(),
            overall_enjoyment: 2.0,
        },
        TasteTestResponse {
            uuid: "q7oa8cg3vws".into(),
            timestamp: "6/2/2025 12:43:16".into(),
            which_coffee: "E".into(),
            aroma: 4.0,
            flavor: 4.5,
            acidity: "No acidity".into(),
            body: "Light".into(),
            aftertaste: 4.5,
            tasting_notes: "Floral".into(),
            overall_enjoyment: 4.5,
        },
        TasteTestResponse {
            uuid: "q7oa8cg3vws".into(),
            timestamp: "6/2/2025 12:43:16".into(),
            which_coffee: "F".into(),
            aroma: 4.5,
            flavor: 4.5,
            acidity: "Pleasant Acidity".into(),
            body: "Medium".into(),
            aftertaste: 5.0,
            tasting_notes: "Earthy,Berry,Floral".into(),
            overall_enjoyment: 4.5,
        },
    ];

    SurveyDataset::from_feeds(preference_data, taste_test_data)
}
