//! Role-name normalization.
//!
//! Two role names are equal when they match after whitespace collapsing
//! (runs of whitespace become one space, ends trimmed) and Unicode
//! lowercasing.

/// Collapse whitespace runs and trim. Returns `None` for blank input.
pub fn display_form(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}

/// The lookup key used to compare role names.
pub fn canonical_key(raw: &str) -> String {
    display_form(raw).unwrap_or_default().to_lowercase()
}
