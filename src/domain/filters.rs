// src/domain/filters.rs

//! Sequential predicate filters over in-memory collections.
//!
//! Listings are small enough that an exhaustive linear scan after fetching
//! the full active set is the simplest correct approach; each filter is a
//! pure predicate so the composition stays easy to test.

use crate::domain::matching::text_matches;
use crate::models::job::Job;
use crate::models::opportunity::Opportunity;
use crate::models::user::User;

/// Split a comma-separated query value into trimmed, non-empty entries.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// True when the two skill lists intersect, case-insensitively.
pub fn skills_intersect(a: &[String], b: &[String]) -> bool {
    a.iter().any(|skill| {
        let skill = skill.to_lowercase();
        b.iter().any(|other| other.to_lowercase() == skill)
    })
}

/// Apply the optional job filters in sequence.
pub fn filter_jobs(
    jobs: Vec<Job>,
    employment_type: Option<&str>,
    skills: Option<&[String]>,
    location: Option<&str>,
    search: Option<&str>,
) -> Vec<Job> {
    jobs.into_iter()
        .filter(|job| {
            employment_type.is_none_or(|t| job.employment_type == t)
        })
        .filter(|job| {
            skills.is_none_or(|wanted| skills_intersect(&job.required_skills, wanted))
        })
        .filter(|job| {
            location.is_none_or(|loc| {
                job.location.to_lowercase().contains(&loc.to_lowercase())
            })
        })
        .filter(|job| {
            search.is_none_or(|q| {
                text_matches(q, &[&job.title, &job.company, &job.description])
            })
        })
        .collect()
}

/// Apply the optional opportunity filters, then sort newest first.
pub fn filter_opportunities(
    opportunities: Vec<Opportunity>,
    opportunity_type: Option<&str>,
    location: Option<&str>,
    remote: Option<bool>,
    search: Option<&str>,
) -> Vec<Opportunity> {
    let mut result: Vec<Opportunity> = opportunities
        .into_iter()
        .filter(|opp| opportunity_type.is_none_or(|t| opp.opportunity_type == t))
        .filter(|opp| {
            location.is_none_or(|loc| {
                opp.location.to_lowercase().contains(&loc.to_lowercase())
            })
        })
        .filter(|opp| remote.is_none_or(|r| opp.is_remote == r))
        .filter(|opp| {
            search.is_none_or(|q| text_matches(q, &[&opp.title, &opp.description]))
        })
        .collect();

    result.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
    result
}

/// Filter the user directory by role and skill intersection.
pub fn filter_users(users: Vec<User>, role: Option<&str>, skills: Option<&[String]>) -> Vec<User> {
    users
        .into_iter()
        .filter(|user| role.is_none_or(|r| user.role == r))
        .filter(|user| skills.is_none_or(|wanted| skills_intersect(&user.skills, wanted)))
        .collect()
}

/// Clamp page/limit query parameters into an (offset, limit) pair.
///
/// Saturating math: both values come straight from the query string, so an
/// absurd page number must not be able to overflow the offset.
pub fn page_window(page: Option<i64>, limit: Option<i64>, default_limit: i64) -> (usize, usize) {
    let limit = limit.filter(|l| *l > 0).unwrap_or(default_limit).min(100);
    let page = page.filter(|p| *p > 0).unwrap_or(1);
    let offset = page.saturating_sub(1).saturating_mul(limit);
    (offset as usize, limit as usize)
}
