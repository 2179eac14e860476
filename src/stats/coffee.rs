//! Per-coffee aggregate taste statistics

use crate::models::TasteTestResponse;
use serde::Serialize;

/// Most common answer for a categorical dimension of one coffee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMode {
    pub option: String,
    pub count: usize,
    /// Share of that coffee's responses, percent (unrounded)
    pub percentage: f64,
}

/// Aggregate figures for one coffee across every taste test response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoffeeTasteStats {
    pub coffee_id: String,
    pub average_aroma: f64,
    pub average_flavor: f64,
    pub average_aftertaste: f64,
    pub average_overall_enjoyment: f64,
    pub total_ratings: usize,
    /// `None` when every response left the field blank
    pub most_common_body: Option<CategoryMode>,
    pub most_common_acidity: Option<CategoryMode>,
}

/// Group responses by coffee and average the numeric dimensions.
///
/// Categorical modes pick the strictly most frequent answer; on a tie
/// the first answer encountered wins. Output is sorted by coffee id.
pub fn coffee_taste_stats(responses: &[TasteTestResponse]) -> Vec<CoffeeTasteStats> {
    let mut groups: Vec<(String, Vec<&TasteTestResponse>)> = Vec::new();
    for response in responses {
        match groups.iter_mut().find(|(id, _)| *id == response.which_coffee) {
            Some((_, group)) => group.push(response),
            None => groups.push((response.which_coffee.clone(), vec![response])),
        }
    }

    let mut stats: Vec<CoffeeTasteStats> = groups
        .into_iter()
        .map(|(coffee_id, group)| {
            let n = group.len() as f64;
            CoffeeTasteStats {
                coffee_id,
                average_aroma: group.iter().map(|r| r.aroma).sum::<f64>() / n,
                average_flavor: group.iter().map(|r| r.flavor).sum::<f64>() / n,
                average_aftertaste: group.iter().map(|r| r.aftertaste).sum::<f64>() / n,
                average_overall_enjoyment: group.iter().map(|r| r.overall_enjoyment).sum::<f64>()
                    / n,
                total_ratings: group.len(),
                most_common_body: category_mode(group.iter().map(|r| r.body.as_str()), group.len()),
                most_common_acidity: category_mode(
                    group.iter().map(|r| r.acidity.as_str()),
                    group.len(),
                ),
            }
        })
        .collect();

    stats.sort_by(|a, b| a.coffee_id.cmp(&b.coffee_id));
    stats
}

fn category_mode<'a>(
    answers: impl Iterator<Item = &'a str>,
    total: usize,
) -> Option<CategoryMode> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for answer in answers {
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(a, _)| *a == trimmed) {
            Some((_, count)) => *count += 1,
            None => counts.push((trimmed, 1)),
        }
    }

    // Strict > keeps the first-encountered answer on ties
    let mut best: Option<(&str, usize)> = None;
    for (option, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((option, count));
        }
    }

    best.map(|(option, count)| CategoryMode {
        option: option.to_string(),
        count,
        percentage: count as f64 / total as f64 * 100.0,
    })
}
