//! Data model for survey feeds and the assembled dataset

pub mod dataset;
pub mod records;
pub mod sample;

pub use dataset::{DataQuality, SurveyDataset};
pub use records::{
    CoffeeMetadata, CoffeeQualityEstimate, ParticipantHarshnessEstimate, PreferenceResponse,
    TasteTestResponse,
};
