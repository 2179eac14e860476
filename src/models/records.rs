//! Typed records, one variant per feed
//!
//! Each record type knows how to extract itself from a tokenized row
//! (`FeedRecord` impls live in `csv::mapper`). Numeric fields coerce to
//! 0.0 on failure and string fields to empty, so declared fields are
//! never absent. A record only enters the dataset if its validity
//! predicate holds (non-empty identity key plus feed-specific minimums).

use serde::{Deserialize, Serialize};

/// One taste test response row.
///
/// Identity key: `uuid`. Valid only when uuid and coffee are present
/// and `overall_enjoyment >= 0.5` (the rating scale floor; a zero means
/// the participant skipped the question).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasteTestResponse {
    pub uuid: String,
    pub timestamp: String,
    pub which_coffee: String,
    pub aroma: f64,
    pub flavor: f64,
    /// Categorical: "Pleasant Acidity", "No acidity", "Too Acidic"
    pub acidity: String,
    /// Categorical: "Light", "Medium", "Heavy"
    pub body: String,
    pub aftertaste: f64,
    /// Comma-separated free-form notes as published
    pub tasting_notes: String,
    pub overall_enjoyment: f64,
}

impl TasteTestResponse {
    /// Individual tasting notes, trimmed, empties dropped.
    pub fn notes_list(&self) -> Vec<String> {
        self.tasting_notes
            .split(',')
            .map(|note| note.trim().to_string())
            .filter(|note| !note.is_empty())
            .collect()
    }
}

/// One preference survey response row.
///
/// Identity key: `uuid`. Valid only when uuid and the coffee/tea
/// preference are both present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceResponse {
    pub uuid: String,
    pub timestamp: String,
    /// Coffee / Tea / Both
    pub preference: String,
    pub coffees_per_day: f64,
    pub teas_per_day: f64,
    pub black_coffee: String,
    pub coffee_types: String,
    pub roast_preference: String,
    pub why_drink_coffee: String,
    pub other_caffeinated_drinks: f64,
    pub frequency: String,
    pub why_not_more_coffee: String,
    pub decaf_coffee: String,
    pub coffee_additions: String,
}

/// Coffee metadata row (positional feed, no header keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeMetadata {
    pub coffee_id: String,
    pub coffee_name: String,
    pub coffee_geography: String,
    pub process: String,
    pub brew_method: String,
    /// Price per cup, kept verbatim (currency formatting varies upstream)
    pub price: String,
}

/// Per-coffee quality estimate row (positional feed).
///
/// Columns upstream: C, mean_Q, p13, p87, Which Coffee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeQualityEstimate {
    pub coffee_id: String,
    pub mean_quality: f64,
    /// p13 lower confidence bound
    pub lower_confidence: f64,
    /// p87 upper confidence bound
    pub upper_confidence: f64,
    /// C column, purpose unknown upstream; stored verbatim
    pub c_value: String,
}

/// Per-participant harshness and discrimination estimate row
/// (positional feed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantHarshnessEstimate {
    pub uuid: String,
    pub taster_id: String,
    pub mean_harshness: f64,
    pub p13_harshness: f64,
    pub p87_harshness: f64,
    pub mean_discrim: f64,
    pub p13_discrim: f64,
    pub p87_discrim: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_list_splits_and_trims() {
        let response = TasteTestResponse {
            uuid: "u1".into(),
            timestamp: String::new(),
            which_coffee: "A".into(),
            aroma: 0.0,
            flavor: 0.0,
            acidity: String::new(),
            body: String::new(),
            aftertaste: 0.0,
            tasting_notes: "Earthy, Berry ,,Floral".into(),
            overall_enjoyment: 3.0,
        };
        assert_eq!(response.notes_list(), vec!["Earthy", "Berry", "Floral"]);
    }
}
