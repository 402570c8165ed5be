// src/models/job.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const EMPLOYMENT_TYPES: &[&str] = &["full-time", "part-time", "internship", "contract"];

/// Represents the 'jobs' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,

    /// 'full-time', 'part-time', 'internship' or 'contract'.
    pub employment_type: String,

    pub category: Option<String>,
    pub salary: Option<String>,
    pub description: String,
    pub required_skills: Vec<String>,
    pub is_remote: bool,

    /// Denormalized counters, maintained by the application handlers.
    pub applicants: i32,
    pub views: i32,

    pub is_active: bool,
    pub posted_by: i64,
    pub posted_at: chrono::DateTime<chrono::Utc>,
}

/// Poster summary attached to a job detail response.
#[derive(Debug, Serialize, FromRow)]
pub struct PosterSummary {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub avatar_url: Option<String>,
}

/// DTO for creating a job listing.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 3, max = 200, message = "Job title must be at least 3 characters."))]
    pub title: String,
    #[validate(length(min = 2, max = 200, message = "Company name must be at least 2 characters."))]
    pub company: String,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    pub employment_type: String,
    pub category: Option<String>,
    pub salary: Option<String>,
    #[validate(length(
        min = 50,
        max = 5000,
        message = "Job description must be between 50 and 5000 characters."
    ))]
    pub description: String,
    #[validate(length(min = 1, message = "At least one required skill must be specified."))]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub is_remote: bool,
}

/// Query parameters for listing/searching jobs.
#[derive(Debug, Deserialize)]
pub struct JobListParams {
    /// Employment type, exact match.
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    /// Comma-separated skill list; a job matches when the lists intersect.
    pub skills: Option<String>,
    pub location: Option<String>,
    /// Free-text search over title, company and description.
    pub q: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
