//! Percentile and comparison engine
//!
//! Every function here is pure and total over its documented domain:
//! no I/O, no shared state, and no errors. Invalid or empty inputs
//! yield `None` or empty result structures so presentation code can
//! call these speculatively.

pub mod categorical;
pub mod coffee;
pub mod notes;
pub mod percentile;
pub mod profile;
pub mod rating;
pub mod statement;

pub use categorical::{agreement_percentage, categorical_percentile, CategoricalPercentile};
pub use coffee::{coffee_taste_stats, CategoryMode, CoffeeTasteStats};
pub use notes::{tasting_notes_comparison, NotePopularity, TastingNotesComparison};
pub use percentile::{percentile_rank, percentile_value, Interpolation};
pub use profile::{
    categorize_profile, comparison_report, AggregateSummary, CoffeeChoiceComparison,
    ComparisonReport, ProfileCategory, TasterProfile, UserSummary,
};
pub use rating::{
    coffee_rating_percentile, overall_performance_percentile, CoffeeRatingPercentile,
    OverallPerformance, RatingComparison,
};
pub use statement::{comparison_statement, ComparisonType, StatementOptions};

/// Round to two decimal places, the precision used in report figures.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
