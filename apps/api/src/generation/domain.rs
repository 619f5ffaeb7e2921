//! Domain classifier: maps job-description text to a coarse job category.
//!
//! Scores are overlapping substring counts of each domain's phrases. The table order
//! is significant: on a tie the domain declared first wins.

use std::fmt;

/// Coarse job category used to pick the letter's lead-in sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Hospitality,
    Software,
    Retail,
    Generic,
}

impl Domain {
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Hospitality => "hospitality",
            Domain::Software => "software",
            Domain::Retail => "retail",
            Domain::Generic => "generic",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword phrases per domain, in tie-break order. All phrases are lower-case.
/// Matching is by substring, so short fragments that hide inside common words
/// ("api" in "capital", "git" in "digital") are avoided.
pub const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::Hospitality,
        &[
            "hospitality",
            "catering",
            "banquet",
            "food safety",
            "guest",
            "restaurant",
            "kitchen",
            "hotel",
            "front of house",
            "barista",
            "line cook",
            "menu",
            "events",
        ],
    ),
    (
        Domain::Software,
        &[
            "software",
            "developer",
            "engineer",
            "python",
            "javascript",
            "typescript",
            "rust developer",
            "backend",
            "frontend",
            "rest api",
            "cloud",
            "code review",
            "deploy",
            "github",
        ],
    ),
    (
        Domain::Retail,
        &[
            "retail",
            "cashier",
            "customer service",
            "point of sale",
            "pos system",
            "merchandising",
            "inventory",
            "checkout",
            "storefront",
            "sales floor",
            "restocking",
        ],
    ),
];

/// Classifies the combined keyword + raw text. Returns `Generic` when nothing scores.
pub fn classify_domain(keywords: &[String], job_description: &str) -> Domain {
    let text = format!("{} {}", keywords.join(" "), job_description).to_lowercase();

    let mut best = Domain::Generic;
    let mut best_score = 0usize;

    for (domain, phrases) in DOMAIN_KEYWORDS {
        let score: usize = phrases
            .iter()
            .map(|phrase| count_overlapping(&text, phrase))
            .sum();
        // Strictly greater keeps the earlier domain on ties
        if score > best_score {
            best = *domain;
            best_score = score;
        }
    }

    best
}

/// Counts occurrences of `needle` in `haystack`, including overlapping ones.
fn count_overlapping(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .filter(|window| *window == needle.as_bytes())
        .count()
}
