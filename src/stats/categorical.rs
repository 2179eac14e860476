//! Agreement and rank statistics for categorical responses

use crate::stats::round2;
use serde::Serialize;

/// How a categorical choice sits within the whole response set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalPercentile {
    /// Share of all responses matching the choice, percent (2 dp);
    /// `None` when the choice or dataset is empty
    pub agreement_percentage: Option<f64>,
    /// 1-based position in descending-count order; ties keep the
    /// grouping step's encounter order. `None` when the choice never
    /// appears
    pub rank: Option<usize>,
    /// Number of distinct normalized labels
    pub total_choices: usize,
    /// (label, count) in descending-count order
    pub distribution: Vec<(String, usize)>,
}

impl CategoricalPercentile {
    fn empty() -> Self {
        Self {
            agreement_percentage: None,
            rank: None,
            total_choices: 0,
            distribution: Vec::new(),
        }
    }
}

/// Agreement percentage and popularity rank of `choice` within
/// `dataset`. Labels are normalized by trimming only; case is
/// preserved because upstream labels are controlled vocabulary.
pub fn categorical_percentile<S: AsRef<str>>(
    choice: &str,
    dataset: &[S],
) -> CategoricalPercentile {
    if choice.is_empty() || dataset.is_empty() {
        return CategoricalPercentile::empty();
    }

    // Count per label in encounter order so rank ties are stable
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in dataset {
        let normalized = entry.as_ref().trim();
        if normalized.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(label, _)| label == normalized) {
            Some((_, count)) => *count += 1,
            None => counts.push((normalized.to_string(), 1)),
        }
    }

    let choice_count = counts
        .iter()
        .find(|(label, _)| label == choice)
        .map(|(_, count)| *count)
        .unwrap_or(0);
    // Denominator is every response, including blanks
    let agreement = round2(choice_count as f64 / dataset.len() as f64 * 100.0);

    let total_choices = counts.len();
    let mut distribution = counts;
    distribution.sort_by(|a, b| b.1.cmp(&a.1)); // stable: ties keep encounter order

    let rank = distribution
        .iter()
        .position(|(label, _)| label == choice)
        .map(|i| i + 1);

    CategoricalPercentile {
        agreement_percentage: Some(agreement),
        rank,
        total_choices,
        distribution,
    }
}

/// Share of `all_choices` matching `choice`, case-insensitively,
/// percent (2 dp). `None` for empty inputs.
pub fn agreement_percentage<S: AsRef<str>>(choice: &str, all_choices: &[S]) -> Option<f64> {
    if choice.is_empty() || all_choices.is_empty() {
        return None;
    }

    let target = choice.trim().to_lowercase();
    let matching = all_choices
        .iter()
        .filter(|c| c.as_ref().trim().to_lowercase() == target)
        .count();

    Some(round2(matching as f64 / all_choices.len() as f64 * 100.0))
}
