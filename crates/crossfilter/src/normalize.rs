//! Display-text canonicalization.
//!
//! Names are shown as `"Last, First"` and table cells often carry a trailing
//! separator (`"Smith, John, "`). Comparison and storage always use the
//! normalized form.

/// Strip any trailing mix of commas and whitespace, plus leading whitespace.
/// Stripping the full trailing mix (rather than a single comma run) keeps the
/// operation idempotent.
pub fn normalize(s: &str) -> String {
    s.trim_end_matches(|c: char| c == ',' || c.is_whitespace())
        .trim_start()
        .to_string()
}
