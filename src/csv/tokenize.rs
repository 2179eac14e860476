//! Single-line CSV tokenizer

/// Split one line of CSV text into trimmed fields.
///
/// A `"` toggles the in-quotes flag (doubled quotes are not unescaped;
/// the upstream publisher never emits them), a comma outside quotes
/// ends the current field, everything else accumulates. The final field
/// is always flushed, so every line produces at least one field.
/// Malformed quoting still yields a best-effort field sequence.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}
