//! Comprehensive comparison report and taster profile categorization

use crate::stats::categorical::{categorical_percentile, CategoricalPercentile};
use crate::stats::notes::{tasting_notes_comparison, TastingNotesComparison};
use crate::stats::rating::{overall_performance_percentile, OverallPerformance};
use serde::Serialize;

/// One participant's answers, as the report inputs.
#[derive(Debug, Clone, Default)]
pub struct UserSummary {
    pub favorite_brewing_method: Option<String>,
    pub favorite_coffee: Option<String>,
    pub worst_coffee: Option<String>,
    pub ratings: Vec<f64>,
    pub tasting_notes: Vec<String>,
}

/// The crowd's answers, one entry per participant or response.
#[derive(Debug, Clone, Default)]
pub struct AggregateSummary {
    pub brewing_methods: Vec<String>,
    pub favorite_choices: Vec<String>,
    pub worst_choices: Vec<String>,
    /// Per-participant rating lists
    pub all_ratings: Vec<Vec<f64>>,
    /// Per-participant note lists
    pub all_tasting_notes: Vec<Vec<String>>,
}

/// Favorite and least-favorite coffee comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoffeeChoiceComparison {
    pub favorite: CategoricalPercentile,
    pub worst: Option<CategoricalPercentile>,
}

/// Everything the personalized results page shows, one section per
/// survey dimension. A section is `None` when its inputs are missing.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub brewing_method: Option<CategoricalPercentile>,
    pub coffee_preferences: Option<CoffeeChoiceComparison>,
    pub taste_test_performance: Option<OverallPerformance>,
    pub tasting_notes: Option<TastingNotesComparison>,
    pub overall_profile: TasterProfile,
}

/// Build the full comparison report for one participant.
///
/// Each section needs both the user's answer and the matching
/// aggregate data; either one missing leaves the section out without
/// affecting the rest.
pub fn comparison_report(user: &UserSummary, aggregate: &AggregateSummary) -> ComparisonReport {
    let brewing_method = user
        .favorite_brewing_method
        .as_deref()
        .filter(|_| !aggregate.brewing_methods.is_empty())
        .map(|method| categorical_percentile(method, &aggregate.brewing_methods));

    let coffee_preferences = user
        .favorite_coffee
        .as_deref()
        .filter(|_| !aggregate.favorite_choices.is_empty())
        .map(|favorite| CoffeeChoiceComparison {
            favorite: categorical_percentile(favorite, &aggregate.favorite_choices),
            worst: user
                .worst_coffee
                .as_deref()
                .map(|worst| categorical_percentile(worst, &aggregate.worst_choices)),
        });

    let taste_test_performance = (!user.ratings.is_empty() && !aggregate.all_ratings.is_empty())
        .then(|| overall_performance_percentile(&user.ratings, &aggregate.all_ratings));

    let tasting_notes = (!user.tasting_notes.is_empty()
        && !aggregate.all_tasting_notes.is_empty())
    .then(|| tasting_notes_comparison(&user.tasting_notes, &aggregate.all_tasting_notes));

    let overall_profile = categorize_profile(
        brewing_method.as_ref(),
        taste_test_performance.as_ref(),
        tasting_notes.as_ref(),
    );

    ComparisonReport {
        brewing_method,
        coffee_preferences,
        taste_test_performance,
        tasting_notes,
        overall_profile,
    }
}

/// Profile categories, in the order the rules are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileCategory {
    MainstreamBrewer,
    UniqueBrewer,
    GenerousRater,
    CriticalRater,
    ConsistentTaster,
    VariedTaster,
    DescriptiveTaster,
    ConventionalTaster,
    BalancedTaster,
}

impl ProfileCategory {
    fn description(self) -> &'static str {
        match self {
            Self::MainstreamBrewer => "You prefer popular brewing methods",
            Self::UniqueBrewer => "You have unique brewing preferences",
            Self::GenerousRater => "You tend to rate coffees generously",
            Self::CriticalRater => "You have discerning taste in coffee",
            Self::ConsistentTaster => "You have consistent tasting preferences",
            Self::VariedTaster => "You appreciate diverse coffee experiences",
            Self::DescriptiveTaster => "You notice unique flavors and notes",
            Self::ConventionalTaster => "You identify classic coffee characteristics",
            Self::BalancedTaster => "You have well-balanced coffee preferences",
        }
    }
}

/// The participant's profile as derived from their report sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TasterProfile {
    pub categories: Vec<ProfileCategory>,
    /// First matched category, `balanced_taster` when none matched
    pub primary_category: ProfileCategory,
    /// Matched category descriptions joined with ", "
    pub description: String,
}

/// Apply the fixed category rules to the computed report sections.
///
/// Each dimension contributes at most one category. The notes rule is
/// one dimension too: more than 2 unique notes makes a descriptive
/// taster, otherwise more than 3 common notes makes a conventional
/// taster, never both.
pub fn categorize_profile(
    brewing_method: Option<&CategoricalPercentile>,
    performance: Option<&OverallPerformance>,
    notes: Option<&TastingNotesComparison>,
) -> TasterProfile {
    let mut categories = Vec::new();

    if let Some(agreement) = brewing_method.and_then(|b| b.agreement_percentage) {
        if agreement >= 40.0 {
            categories.push(ProfileCategory::MainstreamBrewer);
        } else if agreement <= 10.0 {
            categories.push(ProfileCategory::UniqueBrewer);
        }
    }

    if let Some(generosity) = performance.and_then(|p| p.generosity_percentile) {
        if generosity >= 75.0 {
            categories.push(ProfileCategory::GenerousRater);
        } else if generosity <= 25.0 {
            categories.push(ProfileCategory::CriticalRater);
        }
    }

    if let Some(consistency) = performance.and_then(|p| p.consistency_percentile) {
        if consistency >= 75.0 {
            categories.push(ProfileCategory::ConsistentTaster);
        } else if consistency <= 25.0 {
            categories.push(ProfileCategory::VariedTaster);
        }
    }

    if let Some(notes) = notes {
        if notes.unique_notes.len() > 2 {
            categories.push(ProfileCategory::DescriptiveTaster);
        } else if notes.common_notes.len() > 3 {
            categories.push(ProfileCategory::ConventionalTaster);
        }
    }

    let primary_category = categories
        .first()
        .copied()
        .unwrap_or(ProfileCategory::BalancedTaster);
    let description = if categories.is_empty() {
        ProfileCategory::BalancedTaster.description().to_string()
    } else {
        categories
            .iter()
            .map(|c| c.description())
            .collect::<Vec<_>>()
            .join(", ")
    };

    TasterProfile {
        categories,
        primary_category,
        description,
    }
}
