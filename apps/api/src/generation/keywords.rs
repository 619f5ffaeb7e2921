//! Keyword extraction from raw job-description text.
//!
//! Pure and total. The output feeds both the domain classifier and the bullet selector.

use std::collections::HashSet;

/// Characters trimmed from either end of a whitespace token.
const STRIP_CHARS: &[char] = &[',', '.', '(', ')'];

/// Tokens must be strictly longer than this (in characters) to count as keywords.
const MIN_KEYWORD_LEN: usize = 3;

/// Splits the job description on whitespace and returns lower-cased, de-duplicated
/// keywords in first-occurrence order.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    job_description
        .split_whitespace()
        .map(|token| token.trim_matches(STRIP_CHARS).to_lowercase())
        .filter(|token| token.chars().count() > MIN_KEYWORD_LEN)
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
