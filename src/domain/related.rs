//! Similarity scoring for the related-ideas section of a detail page.

use std::collections::HashSet;

use crate::domain::idea::Idea;

/// Similarity between a candidate and the reference idea: +3 for a category
/// match, +2 for a business-type match, +1 per shared distinct tag.
pub fn similarity_score(reference: &Idea, candidate: &Idea) -> i32 {
    let mut score = 0;
    if candidate.category == reference.category {
        score += 3;
    }
    if candidate.business_type == reference.business_type {
        score += 2;
    }

    let reference_tags: HashSet<&str> = reference
        .subcategories
        .iter()
        .map(|t| t.as_str())
        .collect();
    let shared = candidate
        .subcategories
        .iter()
        .map(|t| t.as_str())
        .collect::<HashSet<_>>()
        .intersection(&reference_tags)
        .count();

    score + shared as i32
}

/// Re-ranks pre-fetched candidates by similarity and keeps the top `limit`.
///
/// The sort is stable: candidates arrive ordered by clicks descending, and
/// equal scores keep that order. Never pads the result, so fewer than `limit`
/// candidates yields a shorter list and zero candidates yields an empty one.
pub fn rank_related(reference: &Idea, candidates: Vec<Idea>, limit: usize) -> Vec<Idea> {
    let mut scored: Vec<(i32, Idea)> = candidates
        .into_iter()
        .map(|candidate| (similarity_score(reference, &candidate), candidate))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, idea)| idea)
        .collect()
}
