//! Percentile rank and percentile value estimation

use serde::{Deserialize, Serialize};

/// Index interpolation method for `percentile_value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Standard linear interpolation between neighboring order
    /// statistics (the common "R-7" estimator)
    #[default]
    Linear,
    /// Round to the nearest order statistic
    Nearest,
    /// Floor the fractional index
    Lower,
    /// Ceil the fractional index
    Higher,
}

/// Percentile rank (0-100) of `value` within `dataset`.
///
/// Non-finite entries are ignored; `None` when nothing remains.
/// Inclusive mode counts `x <= value`, exclusive counts `x < value`,
/// so a value tied with every element scores 100 inclusive and a
/// unique minimum scores 0 exclusive.
pub fn percentile_rank(value: f64, dataset: &[f64], exclusive: bool) -> Option<f64> {
    let valid: Vec<f64> = dataset.iter().copied().filter(|v| v.is_finite()).collect();
    if valid.is_empty() {
        return None;
    }

    let count = if exclusive {
        valid.iter().filter(|&&v| v < value).count()
    } else {
        valid.iter().filter(|&&v| v <= value).count()
    };

    Some(count as f64 / valid.len() as f64 * 100.0)
}

/// Value at `percentile` (0-100) of `dataset`, or `None` for empty
/// input or an out-of-range percentile.
pub fn percentile_value(dataset: &[f64], percentile: f64, method: Interpolation) -> Option<f64> {
    if !(0.0..=100.0).contains(&percentile) {
        return None;
    }

    let mut valid: Vec<f64> = dataset.iter().copied().filter(|v| v.is_finite()).collect();
    if valid.is_empty() {
        return None;
    }
    valid.sort_by(|a, b| a.total_cmp(b));

    if valid.len() == 1 {
        return Some(valid[0]);
    }

    let index = percentile / 100.0 * (valid.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    let result = match method {
        Interpolation::Nearest => valid[index.round() as usize],
        Interpolation::Lower => valid[lower],
        Interpolation::Higher => valid[upper],
        Interpolation::Linear => {
            if lower == upper {
                valid[lower]
            } else {
                let weight = index - lower as f64;
                valid[lower] * (1.0 - weight) + valid[upper] * weight
            }
        }
    };

    Some(result)
}

/// Population standard deviation; 0.0 for fewer than two values.
pub(crate) fn std_deviation(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_yields_none() {
        assert_eq!(percentile_rank(3.0, &[], false), None);
        assert_eq!(percentile_value(&[], 50.0, Interpolation::Linear), None);
    }

    #[test]
    fn non_finite_values_are_filtered() {
        let data = [f64::NAN, 1.0, 2.0, f64::INFINITY];
        assert_eq!(percentile_rank(2.0, &data, false), Some(100.0));
    }

    #[test]
    fn inclusive_rank_is_at_least_exclusive_rank() {
        let data = [1.0, 2.0, 2.0, 3.0, 4.0];
        for value in data {
            let inclusive = percentile_rank(value, &data, false).unwrap();
            let exclusive = percentile_rank(value, &data, true).unwrap();
            assert!(inclusive >= exclusive, "{} vs {}", inclusive, exclusive);
        }
    }

    #[test]
    fn tie_with_every_element_spans_zero_to_hundred() {
        let data = [2.0, 2.0, 2.0];
        assert_eq!(percentile_rank(2.0, &data, false), Some(100.0));
        assert_eq!(percentile_rank(2.0, &data, true), Some(0.0));
    }

    #[test]
    fn extremes_are_min_and_max_under_every_method() {
        let data = [7.0, 1.0, 4.0, 9.0, 2.0];
        for method in [
            Interpolation::Linear,
            Interpolation::Nearest,
            Interpolation::Lower,
            Interpolation::Higher,
        ] {
            assert_eq!(percentile_value(&data, 0.0, method), Some(1.0));
            assert_eq!(percentile_value(&data, 100.0, method), Some(9.0));
        }
    }

    #[test]
    fn singleton_dataset_is_constant() {
        for p in [0.0, 12.5, 50.0, 99.0, 100.0] {
            assert_eq!(percentile_value(&[5.0], p, Interpolation::Linear), Some(5.0));
            assert_eq!(percentile_value(&[5.0], p, Interpolation::Nearest), Some(5.0));
        }
    }

    #[test]
    fn linear_interpolates_between_order_statistics() {
        let data = [1.0, 2.0, 3.0, 4.0];
        // index = 0.5 * 3 = 1.5 -> midway between 2.0 and 3.0
        assert_eq!(percentile_value(&data, 50.0, Interpolation::Linear), Some(2.5));
        assert_eq!(percentile_value(&data, 50.0, Interpolation::Lower), Some(2.0));
        assert_eq!(percentile_value(&data, 50.0, Interpolation::Higher), Some(3.0));
    }

    #[test]
    fn out_of_range_percentile_yields_none() {
        let data = [1.0, 2.0];
        assert_eq!(percentile_value(&data, -0.1, Interpolation::Linear), None);
        assert_eq!(percentile_value(&data, 100.1, Interpolation::Linear), None);
    }

    #[test]
    fn std_deviation_is_population_form() {
        assert_eq!(std_deviation(&[]), 0.0);
        assert_eq!(std_deviation(&[3.0]), 0.0);
        assert_eq!(std_deviation(&[2.0, 4.0]), 1.0);
        let sd = std_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((sd - 2.0).abs() < 1e-12);
    }
}
