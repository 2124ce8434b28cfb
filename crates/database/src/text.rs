/// Case-insensitive substring test; `needle` must already be lowercase
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Splits a comma separated parameter into trimmed, lowercase terms
///
/// Empty terms are kept, so `"ml,"` yields `["ml", ""]`.
pub(crate) fn split_terms(terms: &str) -> Vec<String> {
    terms.split(',').map(|t| t.trim().to_lowercase()).collect()
}
