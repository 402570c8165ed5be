// src/domain/completion.rs

use crate::models::user::User;

/// Number of tracked profile fields.
const TRACKED_FIELDS: usize = 13;

/// Calculate the profile completion percentage for a user.
///
/// Tracks 13 fields: name, email, bio, location, age, skills, interests,
/// career goals, education level, current status, at least one social link,
/// looking-for and timeline. Pure and deterministic; result is in [0, 100],
/// rounded to the nearest integer.
///
/// Monotonic by construction: each field contributes independently, so
/// filling one more field can only raise the score.
pub fn calculate_profile_completion(user: &User) -> i32 {
    let has_social_link = filled(&user.linkedin_url) || filled(&user.github_url)
        || filled(&user.portfolio_url);

    let flags = [
        !user.name.trim().is_empty(),
        !user.email.trim().is_empty(),
        filled(&user.bio),
        filled(&user.location),
        user.age.is_some(),
        !user.skills.is_empty(),
        !user.interests.is_empty(),
        filled(&user.career_goals),
        filled(&user.education_level),
        filled(&user.current_status),
        has_social_link,
        !user.looking_for.is_empty(),
        filled(&user.timeline),
    ];

    debug_assert_eq!(flags.len(), TRACKED_FIELDS);

    let filled_count = flags.iter().filter(|f| **f).count();
    ((filled_count as f64 / TRACKED_FIELDS as f64) * 100.0).round() as i32
}

fn filled(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}
