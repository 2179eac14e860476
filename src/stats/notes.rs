//! Tasting note popularity comparison

use serde::Serialize;

/// A note is "common" when at least this share of participants used it.
const COMMON_THRESHOLD_PCT: f64 = 20.0;
/// A note is "unique" when fewer than this share of participants used it.
const UNIQUE_THRESHOLD_PCT: f64 = 5.0;

/// One of the participant's notes with its crowd prevalence,
/// rounded to a whole percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotePopularity {
    pub note: String,
    pub percentage: f64,
}

/// How a participant's tasting vocabulary compares to the crowd's.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TastingNotesComparison {
    /// Notes shared with at least 20% of participants, most common first
    pub common_notes: Vec<NotePopularity>,
    /// Notes fewer than 5% of participants used, rarest first
    pub unique_notes: Vec<NotePopularity>,
    /// (note, unrounded prevalence percent) for every user note
    pub popularity: Vec<(String, f64)>,
}

/// Classify the participant's notes by prevalence across all
/// participants' note lists. Notes are normalized to trimmed
/// lowercase; prevalence is occurrences over the number of
/// participants (the outer list length). Thresholds are fixed.
pub fn tasting_notes_comparison<S: AsRef<str>>(
    user_notes: &[S],
    all_notes: &[Vec<String>],
) -> TastingNotesComparison {
    if user_notes.is_empty() || all_notes.is_empty() {
        return TastingNotesComparison::default();
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    for note in all_notes.iter().flatten() {
        let normalized = note.trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(n, _)| *n == normalized) {
            Some((_, count)) => *count += 1,
            None => counts.push((normalized, 1)),
        }
    }

    let mut comparison = TastingNotesComparison::default();
    for note in user_notes {
        let normalized = note.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }

        let count = counts
            .iter()
            .find(|(n, _)| *n == normalized)
            .map(|(_, c)| *c)
            .unwrap_or(0);
        let percentage = count as f64 / all_notes.len() as f64 * 100.0;
        comparison.popularity.push((normalized.clone(), percentage));

        if percentage >= COMMON_THRESHOLD_PCT {
            comparison.common_notes.push(NotePopularity {
                note: normalized,
                percentage: percentage.round(),
            });
        } else if percentage < UNIQUE_THRESHOLD_PCT {
            comparison.unique_notes.push(NotePopularity {
                note: normalized,
                percentage: percentage.round(),
            });
        }
    }

    comparison
        .common_notes
        .sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    comparison
        .unique_notes
        .sort_by(|a, b| a.percentage.total_cmp(&b.percentage));

    comparison
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crowd() -> Vec<Vec<String>> {
        vec![
            vec!["Earthy".into(), "Berry".into()],
            vec!["earthy".into(), "Floral".into()],
            vec!["Earthy ".into()],
            vec!["Chocolate".into()],
            vec!["Berry".into()],
        ]
    }

    #[test]
    fn widely_shared_note_is_common() {
        let result = tasting_notes_comparison(&["Earthy"], &crowd());
        assert_eq!(result.common_notes.len(), 1);
        assert_eq!(result.common_notes[0].note, "earthy");
        // 3 of 5 participants
        assert_eq!(result.common_notes[0].percentage, 60.0);
        assert!(result.unique_notes.is_empty());
    }

    #[test]
    fn unheard_of_note_is_unique() {
        let result = tasting_notes_comparison(&["Petrichor"], &crowd());
        assert!(result.common_notes.is_empty());
        assert_eq!(result.unique_notes.len(), 1);
        assert_eq!(result.unique_notes[0].percentage, 0.0);
    }

    #[test]
    fn mid_prevalence_note_is_neither() {
        // 10 participants, one shares the note: 10%, between thresholds
        let mut many = crowd();
        many.extend(vec![Vec::new(); 5]);
        let result = tasting_notes_comparison(&["Chocolate"], &many);
        assert!(result.common_notes.is_empty());
        assert!(result.unique_notes.is_empty());
        assert_eq!(result.popularity, vec![("chocolate".to_string(), 10.0)]);
    }

    #[test]
    fn common_notes_sort_most_popular_first() {
        let result = tasting_notes_comparison(&["Berry", "Earthy"], &crowd());
        assert_eq!(result.common_notes[0].note, "earthy");
        assert_eq!(result.common_notes[1].note, "berry");
    }

    #[test]
    fn empty_inputs_yield_default() {
        let none: [&str; 0] = [];
        assert_eq!(
            tasting_notes_comparison(&none, &crowd()),
            TastingNotesComparison::default()
        );
        assert_eq!(
            tasting_notes_comparison(&["Earthy"], &[]),
            TastingNotesComparison::default()
        );
    }
}
