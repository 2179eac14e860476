//! Coffee rating percentiles and per-participant performance figures

use crate::stats::percentile::{percentile_rank, std_deviation};
use crate::stats::round2;
use serde::Serialize;

/// The valid rating scale for taste test responses.
const RATING_MIN: f64 = 0.5;
const RATING_MAX: f64 = 5.0;

/// Qualitative bucket relative to the crowd average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingComparison {
    MuchHigher,
    Higher,
    Similar,
    Lower,
    MuchLower,
}

/// Detailed percentile information for one coffee rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoffeeRatingPercentile {
    /// Inclusive percentile rank (2 dp), `None` when not computable
    pub percentile: Option<f64>,
    pub comparison: Option<RatingComparison>,
    /// Crowd average (2 dp)
    pub average_rating: Option<f64>,
    /// Fixed half-point histogram over [0.5, 5.0]: (rating, count)
    pub distribution: Vec<(f64, usize)>,
    pub total_ratings: usize,
}

impl CoffeeRatingPercentile {
    fn empty() -> Self {
        Self {
            percentile: None,
            comparison: None,
            average_rating: None,
            distribution: Vec::new(),
            total_ratings: 0,
        }
    }
}

/// Where one participant's rating of a coffee sits among everyone's
/// ratings of that same coffee.
///
/// Ratings outside the [0.5, 5.0] scale are discarded first. The
/// comparison bucket is relative to the unrounded crowd average:
/// more than 0.5 above is `much_higher`, more than 0.2 above is
/// `higher`, mirrored below, otherwise `similar`.
pub fn coffee_rating_percentile(user_rating: f64, all_ratings: &[f64]) -> CoffeeRatingPercentile {
    if user_rating < RATING_MIN || all_ratings.is_empty() {
        return CoffeeRatingPercentile::empty();
    }

    let valid: Vec<f64> = all_ratings
        .iter()
        .copied()
        .filter(|r| (RATING_MIN..=RATING_MAX).contains(r))
        .collect();
    if valid.is_empty() {
        return CoffeeRatingPercentile::empty();
    }

    let percentile = percentile_rank(user_rating, &valid, false).map(round2);
    let average = valid.iter().sum::<f64>() / valid.len() as f64;

    let mut distribution = Vec::with_capacity(10);
    let mut bucket = RATING_MIN;
    while bucket <= RATING_MAX {
        let count = valid.iter().filter(|&&r| r == bucket).count();
        distribution.push((bucket, count));
        bucket += 0.5;
    }

    let comparison = if user_rating > average + 0.5 {
        RatingComparison::MuchHigher
    } else if user_rating > average + 0.2 {
        RatingComparison::Higher
    } else if user_rating < average - 0.5 {
        RatingComparison::MuchLower
    } else if user_rating < average - 0.2 {
        RatingComparison::Lower
    } else {
        RatingComparison::Similar
    };

    CoffeeRatingPercentile {
        percentile,
        comparison: Some(comparison),
        average_rating: Some(round2(average)),
        distribution,
        total_ratings: valid.len(),
    }
}

/// Aggregate percentiles across the whole tasting session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallPerformance {
    pub average_rating_percentile: Option<f64>,
    /// Same figure as the average-rating percentile; kept separate
    /// because the profile rules read it by this name
    pub generosity_percentile: Option<f64>,
    /// Rank of the negated standard deviation: a narrower spread
    /// scores a higher consistency percentile
    pub consistency_percentile: Option<f64>,
}

/// Compare one participant's mean and spread against every
/// participant's per-person mean and spread.
pub fn overall_performance_percentile(
    user_ratings: &[f64],
    all_participant_ratings: &[Vec<f64>],
) -> OverallPerformance {
    if user_ratings.is_empty() || all_participant_ratings.is_empty() {
        return OverallPerformance {
            average_rating_percentile: None,
            generosity_percentile: None,
            consistency_percentile: None,
        };
    }

    let user_average = user_ratings.iter().sum::<f64>() / user_ratings.len() as f64;
    let user_std_dev = std_deviation(user_ratings);

    let all_averages: Vec<f64> = all_participant_ratings
        .iter()
        .filter(|ratings| !ratings.is_empty())
        .map(|ratings| ratings.iter().sum::<f64>() / ratings.len() as f64)
        .collect();
    let negated_std_devs: Vec<f64> = all_participant_ratings
        .iter()
        .map(|ratings| -std_deviation(ratings))
        .collect();

    OverallPerformance {
        average_rating_percentile: percentile_rank(user_average, &all_averages, false),
        generosity_percentile: percentile_rank(user_average, &all_averages, false),
        consistency_percentile: percentile_rank(-user_std_dev, &negated_std_devs, false),
    }
}
