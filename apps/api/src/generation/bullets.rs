//! Bullet Selector: ranks resume achievement bullets by keyword overlap with the JD.
//!
//! No LLM calls. Ranking is deterministic: a stable sort over resume order
//! (experience entries, then bullets within each entry).

use std::collections::HashSet;

use crate::models::resume::Resume;

pub const DEFAULT_MAX_BULLETS: usize = 5;
pub const DEFAULT_FALLBACK_ROLES: usize = 2;

/// Limits applied during selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOptions {
    /// Upper bound on bullets returned.
    pub max_items: usize,
    /// How many of the earliest-listed (most recent) roles with bullets feed the
    /// fallback pool when no bullet matches any keyword. Treated as at least 1.
    pub fallback_roles: usize,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_BULLETS,
            fallback_roles: DEFAULT_FALLBACK_ROLES,
        }
    }
}

/// A bullet paired with the number of distinct keywords it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoredBullet<'a> {
    text: &'a str,
    score: usize,
}

/// Selects up to `options.max_items` unique bullets, best keyword overlap first.
///
/// Algorithm:
/// 1. Score every bullet: each keyword found as a case-insensitive substring adds 1
/// 2. Keep bullets scoring above zero
/// 3. If none do, fall back to all bullets of the first `fallback_roles` entries
/// 4. Stable sort by score descending
/// 5. Drop exact-text duplicates and truncate
pub fn select_bullets(
    resume: &Resume,
    keywords: &[String],
    options: &SelectionOptions,
) -> Vec<String> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut candidates: Vec<ScoredBullet<'_>> = resume
        .bullets()
        .map(|text| ScoredBullet {
            text,
            score: relevance(text, &keywords),
        })
        .filter(|b| b.score > 0)
        .collect();

    if candidates.is_empty() {
        candidates = fallback_pool(resume, options.fallback_roles);
    }

    // sort_by is stable, so equal scores keep resume order
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|b| seen.insert(b.text))
        .take(options.max_items)
        .map(|b| b.text.to_string())
        .collect()
}

/// Number of keywords that occur anywhere in the bullet. Repeats do not add.
fn relevance(bullet: &str, keywords: &[String]) -> usize {
    let bullet = bullet.to_lowercase();
    keywords
        .iter()
        .filter(|kw| bullet.contains(kw.as_str()))
        .count()
}

/// Bullets of the first `roles` entries that have any. Roles without bullets do not
/// count toward the cap, and at least one role always contributes.
fn fallback_pool(resume: &Resume, roles: usize) -> Vec<ScoredBullet<'_>> {
    resume
        .experience
        .iter()
        .filter(|xp| !xp.bullets.is_empty())
        .take(roles.max(1))
        .flat_map(|xp| xp.bullets.iter())
        .map(|text| ScoredBullet {
            text: text.as_str(),
            score: 0,
        })
        .collect()
}
