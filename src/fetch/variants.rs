//! Alternate URL derivation for published sheets
//!
//! A published Google Sheets CSV answers on several query-parameter
//! shapes. When the primary URL contains a recognizable publisher
//! identifier (`/d/e/{id}`), the known alternate forms are appended;
//! unrecognized URL shapes pass through untouched. Heuristic expansion,
//! not validation. Pure and deterministic: the orchestrator recomputes
//! variants every retry cycle and relies on getting the same list.

/// Build the deduplicated ordered candidate list: primary URL first,
/// then derived alternates.
pub fn derive_url_variants(primary_url: &str) -> Vec<String> {
    let mut variants = vec![primary_url.to_string()];

    if let Some(id) = extract_publisher_id(primary_url) {
        let base = format!("https://docs.google.com/spreadsheets/d/e/{}/pub", id);
        for alternate in [
            format!("{}?output=csv", base),
            format!("{}?gid=0&single=true&output=csv", base),
            format!("{}?gid=0&output=csv", base),
        ] {
            if !variants.contains(&alternate) {
                variants.push(alternate);
            }
        }
    }

    variants
}

/// Extract the publisher identifier following `/d/e/`.
/// Identifier charset is `[A-Za-z0-9_-]`.
fn extract_publisher_id(url: &str) -> Option<&str> {
    let start = url.find("/d/e/")? + "/d/e/".len();
    let rest = &url[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(rest.len());
    let id = &rest[..end];
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMARY: &str =
        "https://docs.google.com/spreadsheets/d/e/2PACX-abc_123/pub?gid=81480195&single=true&output=csv";

    #[test]
    fn recognized_url_gains_three_alternates() {
        let variants = derive_url_variants(PRIMARY);
        assert_eq!(variants.len(), 4);
        assert_eq!(variants[0], PRIMARY);
        assert_eq!(
            variants[1],
            "https://docs.google.com/spreadsheets/d/e/2PACX-abc_123/pub?output=csv"
        );
        assert!(variants[2].contains("gid=0&single=true"));
    }

    #[test]
    fn primary_matching_an_alternate_is_not_duplicated() {
        let url = "https://docs.google.com/spreadsheets/d/e/2PACX-abc_123/pub?output=csv";
        let variants = derive_url_variants(url);
        assert_eq!(variants.len(), 3);
        assert_eq!(variants[0], url);
    }

    #[test]
    fn unrecognized_url_passes_through_alone() {
        let variants = derive_url_variants("https://example.com/data.csv");
        assert_eq!(variants, vec!["https://example.com/data.csv"]);
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(derive_url_variants(PRIMARY), derive_url_variants(PRIMARY));
    }

    #[test]
    fn empty_identifier_is_ignored() {
        let variants = derive_url_variants("https://docs.google.com/spreadsheets/d/e/?output=csv");
        assert_eq!(variants.len(), 1);
    }
}
