//! Utility functions for string processing.

/// Normalize raw document text into whitespace-separated index terms.
///
/// - "Cold-Weather" → "cold weather"
/// - "AT&amp;T's" → "atts"
/// - "  U.S.   stocks\n" → "us stocks"
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. Replace hyphens with spaces (split joined words)
/// 3. Drop `&amp;` entities and every character that is not a word character
///    (alphanumeric or `_`) or whitespace
/// 4. Collapse whitespace runs to a single space and trim
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .replace('-', " ")
        .replace("&amp;", "")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a line into terms the same way the builder tokenizes documents.
pub fn tokenize(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}
