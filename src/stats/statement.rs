//! Human-readable comparison statements
//!
//! A fixed ladder of sentences keyed by percentile band. The `lower`
//! ladder intentionally has fewer bands than the `higher` ladder;
//! the asymmetry is part of the published wording.

use serde::Serialize;

/// Direction of the comparison being narrated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonType {
    #[default]
    Higher,
    Similar,
    Lower,
}

/// Statement rendering options.
#[derive(Debug, Clone)]
pub struct StatementOptions {
    /// Append the raw value in parentheses after the metric name
    pub include_value: bool,
    /// Decimal places shown for the percentile
    pub precision: u32,
    pub comparison: ComparisonType,
}

impl Default for StatementOptions {
    fn default() -> Self {
        Self {
            include_value: true,
            precision: 0,
            comparison: ComparisonType::Higher,
        }
    }
}

/// Render one comparison sentence for a percentile figure.
///
/// `None` percentiles produce a static "unable to compare" sentence so
/// callers can render speculatively.
pub fn comparison_statement(
    percentile: Option<f64>,
    metric: &str,
    value: &str,
    options: &StatementOptions,
) -> String {
    let Some(percentile) = percentile else {
        return format!("Unable to compare your {}.", metric);
    };

    let factor = 10f64.powi(options.precision as i32);
    let rounded = (percentile * factor).round() / factor;
    let shown = format_percentile(rounded, options.precision);
    let value_text = if options.include_value {
        format!(" ({})", value)
    } else {
        String::new()
    };

    match options.comparison {
        ComparisonType::Higher => {
            if rounded >= 95.0 {
                format!(
                    "Your {}{} ranks in the top 5% of all participants - truly exceptional!",
                    metric, value_text
                )
            } else if rounded >= 90.0 {
                format!(
                    "Your {}{} is higher than {}% of participants - you're in the top 10%!",
                    metric, value_text, shown
                )
            } else if rounded >= 75.0 {
                format!(
                    "Your {}{} is higher than {}% of participants - well above average.",
                    metric, value_text, shown
                )
            } else if rounded >= 50.0 {
                format!(
                    "Your {}{} is higher than {}% of participants - above average.",
                    metric, value_text, shown
                )
            } else if rounded >= 25.0 {
                format!(
                    "Your {}{} is higher than {}% of participants - below average.",
                    metric, value_text, shown
                )
            } else if rounded >= 10.0 {
                format!(
                    "Your {}{} is higher than only {}% of participants - you're quite conservative.",
                    metric, value_text, shown
                )
            } else {
                format!(
                    "Your {}{} is in the bottom 10% - you're very selective!",
                    metric, value_text
                )
            }
        }
        ComparisonType::Similar => {
            format!("{}% of participants share your {}{}.", shown, metric, value_text)
        }
        ComparisonType::Lower => {
            let reverse = 100.0 - rounded;
            let reverse_shown = format_percentile(reverse, options.precision);
            if reverse >= 95.0 {
                format!(
                    "Your {}{} is more critical than 95% of participants - very discerning taste!",
                    metric, value_text
                )
            } else if reverse >= 75.0 {
                format!(
                    "Your {}{} is more critical than {}% of participants.",
                    metric, value_text, reverse_shown
                )
            } else {
                format!(
                    "Your {}{} aligns with {}% of participants.",
                    metric, value_text, shown
                )
            }
        }
    }
}

fn format_percentile(value: f64, precision: u32) -> String {
    if precision == 0 {
        format!("{}", value as i64)
    } else {
        format!("{:.*}", precision as usize, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_percentile_is_unable_to_compare() {
        let statement =
            comparison_statement(None, "coffee rating", "4.5", &StatementOptions::default());
        assert_eq!(statement, "Unable to compare your coffee rating.");
    }

    #[test]
    fn higher_ladder_bands() {
        let options = StatementOptions::default();
        let cases = [
            (97.0, "top 5%"),
            (92.0, "top 10%"),
            (80.0, "well above average"),
            (60.0, "above average."),
            (30.0, "below average."),
            (15.0, "quite conservative"),
            (5.0, "bottom 10%"),
        ];
        for (percentile, fragment) in cases {
            let statement =
                comparison_statement(Some(percentile), "coffee rating", "4.5", &options);
            assert!(
                statement.contains(fragment),
                "{} should contain {:?}: {}",
                percentile,
                fragment,
                statement
            );
        }
    }

    #[test]
    fn value_is_parenthesized_when_included() {
        let statement = comparison_statement(
            Some(82.0),
            "coffee rating",
            "4.5",
            &StatementOptions::default(),
        );
        assert!(statement.contains("coffee rating (4.5)"));
        assert!(statement.contains("82%"));

        let bare = comparison_statement(
            Some(82.0),
            "coffee rating",
            "4.5",
            &StatementOptions {
                include_value: false,
                ..Default::default()
            },
        );
        assert!(!bare.contains("(4.5)"));
    }

    #[test]
    fn similar_uses_single_template() {
        let statement = comparison_statement(
            Some(40.0),
            "brewing preference",
            "V60",
            &StatementOptions {
                comparison: ComparisonType::Similar,
                ..Default::default()
            },
        );
        assert_eq!(
            statement,
            "40% of participants share your brewing preference (V60)."
        );
    }

    #[test]
    fn lower_ladder_has_three_bands_only() {
        let options = StatementOptions {
            comparison: ComparisonType::Lower,
            include_value: false,
            ..Default::default()
        };
        // Reverse percentile 97 -> most critical band
        let harsh = comparison_statement(Some(3.0), "rating", "", &options);
        assert!(harsh.contains("more critical than 95%"));
        // Reverse 80 -> middle band; no 75-95 refinement exists
        let critical = comparison_statement(Some(20.0), "rating", "", &options);
        assert!(critical.contains("more critical than 80% of participants."));
        // Reverse 50 -> aligned band quotes the forward percentile
        let aligned = comparison_statement(Some(50.0), "rating", "", &options);
        assert!(aligned.contains("aligns with 50% of participants."));
    }

    #[test]
    fn precision_controls_decimal_places() {
        let statement = comparison_statement(
            Some(82.346),
            "rating",
            "4",
            &StatementOptions {
                precision: 1,
                include_value: false,
                ..Default::default()
            },
        );
        assert!(statement.contains("82.3%"), "{}", statement);
    }
}
