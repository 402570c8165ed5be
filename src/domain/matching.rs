// src/domain/matching.rs

//! Set-overlap and substring matching for mentor recommendation, similar
//! mentors and related jobs. No trained model, just tag intersection.

/// Count expertise tags that loosely match any of the user's tags.
///
/// Loose match: case-insensitive substring containment in either direction,
/// so "Machine Learning" matches "ml engineering" user interest "machine".
pub fn loose_overlap(expertise: &[String], user_tags: &[String]) -> usize {
    expertise
        .iter()
        .filter(|exp| {
            let exp = exp.to_lowercase();
            user_tags.iter().any(|tag| {
                let tag = tag.to_lowercase();
                exp.contains(&tag) || tag.contains(&exp)
            })
        })
        .count()
}

/// Count tags shared between two lists (case-insensitive, exact).
pub fn shared_tag_count(a: &[String], b: &[String]) -> usize {
    a.iter()
        .filter(|tag| {
            let tag = tag.to_lowercase();
            b.iter().any(|other| other.to_lowercase() == tag)
        })
        .count()
}

/// Recommendation score for a mentor: expertise overlap weighted 3x,
/// plus the mentor's rating as a tiebreaker/boost.
pub fn mentor_match_score(expertise: &[String], user_tags: &[String], rating: f64) -> f64 {
    (loose_overlap(expertise, user_tags) * 3) as f64 + rating
}

/// Case-insensitive substring match over several fields.
pub fn text_matches(needle: &str, haystacks: &[&str]) -> bool {
    let needle = needle.to_lowercase();
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

/// Rank items by a usize key descending, keeping natural order on ties.
/// Items scoring zero are dropped.
pub fn rank_by_overlap<T>(items: Vec<T>, score: impl Fn(&T) -> usize) -> Vec<T> {
    let mut scored: Vec<(usize, T)> = items
        .into_iter()
        .map(|item| (score(&item), item))
        .filter(|(s, _)| *s > 0)
        .collect();
    // Stable sort keeps natural collection order between equal scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, item)| item).collect()
}
