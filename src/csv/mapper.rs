//! Header-aware row mapping from tokenized CSV lines to typed records
//!
//! The mapper never fails on a malformed *row* (short or invalid rows
//! are dropped, with a debug trace); it fails only on a malformed
//! *document*, meaning fewer than two lines (no header + data).

use crate::csv::tokenize_line;
use crate::models::{
    CoffeeMetadata, CoffeeQualityEstimate, ParticipantHarshnessEstimate, PreferenceResponse,
    TasteTestResponse,
};
use crate::{Error, Result};

/// One tokenized data row paired with the document's header row.
///
/// Lookups by header name fall back to empty string / 0.0 when the
/// column is absent, so extractors are total.
pub struct RowView<'a> {
    headers: &'a [String],
    fields: &'a [String],
}

impl<'a> RowView<'a> {
    pub fn new(headers: &'a [String], fields: &'a [String]) -> Self {
        Self { headers, fields }
    }

    /// Field under the named header, or empty string.
    pub fn text(&self, key: &str) -> String {
        self.headers
            .iter()
            .position(|h| h == key)
            .and_then(|i| self.fields.get(i))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Numeric field under the named header, or 0.0.
    pub fn number(&self, key: &str) -> f64 {
        coerce_number(&self.text(key))
    }

    /// Field at a fixed position, or empty string (positional feeds).
    pub fn col_text(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Numeric field at a fixed position, or 0.0.
    pub fn col_number(&self, index: usize) -> f64 {
        coerce_number(&self.col_text(index))
    }
}

/// Lenient numeric coercion: longest leading numeric prefix, else 0.0.
/// "4.5 stars" is 4.5, "n/a" is 0.0, as upstream cells mix text in.
fn coerce_number(value: &str) -> f64 {
    let trimmed = value.trim();
    if let Ok(parsed) = trimmed.parse::<f64>() {
        return parsed;
    }
    let prefix: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-' || *c == '+')
        .collect();
    prefix.parse::<f64>().unwrap_or(0.0)
}

/// Per-feed extraction schema: minimum row width, plus the extractor
/// that coerces a row into a typed record and applies the validity
/// predicate (`None` drops the row).
pub trait FeedSchema: Sized {
    /// Feed name for logging
    const FEED: &'static str;

    /// Minimum field count for a row to be considered at all.
    /// `header_count` lets header-keyed feeds require full-width rows.
    fn min_columns(header_count: usize) -> usize;

    /// Build a record from one row; `None` means the row is invalid.
    fn from_row(row: &RowView<'_>) -> Option<Self>;
}

/// Split a raw feed body into a header line and data lines.
///
/// Fails with `Error::Parse` when the document has fewer than two
/// lines; anything else, even if every data row is later dropped, is
/// tolerated input.
pub fn split_document(body: &str) -> Result<(&str, Vec<&str>)> {
    let mut lines = body.trim().lines();
    let header = lines.next().filter(|l| !l.trim().is_empty());
    let data: Vec<&str> = lines.collect();

    match header {
        Some(header) if !data.is_empty() => Ok((header, data)),
        _ => Err(Error::Parse(format!(
            "document has {} line(s), need header + data",
            body.trim().lines().count()
        ))),
    }
}

/// Map tokenized data rows into typed records under a feed schema.
pub fn map_rows<T: FeedSchema>(header_line: &str, data_lines: &[&str]) -> Vec<T> {
    let headers = tokenize_line(header_line);
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for line in data_lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = tokenize_line(line);
        if fields.len() < T::min_columns(headers.len()) {
            dropped += 1;
            continue;
        }
        match T::from_row(&RowView::new(&headers, &fields)) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(
            feed = T::FEED,
            kept = records.len(),
            dropped,
            "Dropped rows failing shape or validity checks"
        );
    }

    records
}

/// Parse a whole feed body: split, then map.
pub fn parse_feed<T: FeedSchema>(body: &str) -> Result<Vec<T>> {
    let (header, data) = split_document(body)?;
    Ok(map_rows(header, &data))
}

impl FeedSchema for TasteTestResponse {
    const FEED: &'static str = "taste_test";

    // Full-width rows only; a truncated row would silently shift columns
    fn min_columns(header_count: usize) -> usize {
        header_count
    }

    fn from_row(row: &RowView<'_>) -> Option<Self> {
        let record = Self {
            uuid: row.text("UUID"),
            timestamp: row.text("Timestamp"),
            which_coffee: row.text("Which Coffee"),
            aroma: row.number("Aroma"),
            flavor: row.number("Flavor"),
            acidity: row.text("Acidity"),
            body: row.text("Body"),
            aftertaste: row.number("Aftertaste"),
            tasting_notes: row.text("Tasting Notes"),
            overall_enjoyment: row.number("Overall Enjoyment"),
        };

        let valid = !record.uuid.is_empty()
            && !record.which_coffee.is_empty()
            && record.overall_enjoyment >= 0.5;
        valid.then_some(record)
    }
}

impl FeedSchema for PreferenceResponse {
    const FEED: &'static str = "preference";

    fn min_columns(_header_count: usize) -> usize {
        3
    }

    fn from_row(row: &RowView<'_>) -> Option<Self> {
        let record = Self {
            uuid: row.text("UUID"),
            timestamp: row.text("Timestamp"),
            preference: row.text("Coffee Person"),
            coffees_per_day: row.number("Coffees Per Day"),
            teas_per_day: row.number("Teas Per Day"),
            black_coffee: row.text("Black Coffee"),
            coffee_types: row.text("Coffee Types"),
            roast_preference: row.text("Roast Preference"),
            why_drink_coffee: row.text("Why do you drink coffee?"),
            other_caffeinated_drinks: row.number("Other Caffeinated Drinks"),
            frequency: row.text("Frequency"),
            why_not_more_coffee: row.text("Why don't you drink more coffee?"),
            decaf_coffee: row.text("Decaf Coffee"),
            coffee_additions: row.text("Coffee Additions"),
        };

        let valid = !record.uuid.is_empty() && !record.preference.is_empty();
        valid.then_some(record)
    }
}

impl FeedSchema for CoffeeMetadata {
    const FEED: &'static str = "coffee_metadata";

    fn min_columns(_header_count: usize) -> usize {
        5
    }

    fn from_row(row: &RowView<'_>) -> Option<Self> {
        let record = Self {
            coffee_id: row.col_text(0),
            coffee_name: row.col_text(1),
            coffee_geography: row.col_text(2),
            process: row.col_text(3),
            brew_method: row.col_text(4),
            price: row.col_text(5),
        };

        (!record.coffee_id.is_empty()).then_some(record)
    }
}

impl FeedSchema for CoffeeQualityEstimate {
    const FEED: &'static str = "coffee_quality";

    fn min_columns(_header_count: usize) -> usize {
        5
    }

    fn from_row(row: &RowView<'_>) -> Option<Self> {
        let record = Self {
            c_value: row.col_text(0),
            mean_quality: row.col_number(1),
            lower_confidence: row.col_number(2),
            upper_confidence: row.col_number(3),
            coffee_id: row.col_text(4),
        };

        (!record.coffee_id.is_empty()).then_some(record)
    }
}

impl FeedSchema for ParticipantHarshnessEstimate {
    const FEED: &'static str = "participant_harshness";

    fn min_columns(_header_count: usize) -> usize {
        8
    }

    fn from_row(row: &RowView<'_>) -> Option<Self> {
        let record = Self {
            uuid: row.col_text(0),
            taster_id: row.col_text(1),
            mean_harshness: row.col_number(2),
            p13_harshness: row.col_number(3),
            p87_harshness: row.col_number(4),
            mean_discrim: row.col_number(5),
            p13_discrim: row.col_number(6),
            p87_discrim: row.col_number(7),
        };

        (!record.uuid.is_empty()).then_some(record)
    }
}
