// src/models/opportunity.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const OPPORTUNITY_TYPES: &[&str] = &["job", "internship", "mentorship"];

pub const OPPORTUNITY_APPLICATION_STATUSES: &[&str] = &["pending", "accepted", "rejected"];

/// Represents the 'opportunities' table in the database.
///
/// Generic listing type: jobs, internships and mentorships share one shape.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: i64,
    pub title: String,

    /// 'job', 'internship' or 'mentorship'.
    pub opportunity_type: String,

    pub description: String,
    pub company: Option<String>,
    pub mentor_name: Option<String>,
    pub location: String,
    pub skills: Vec<String>,
    pub is_remote: bool,
    pub salary: Option<String>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    pub posted_by: i64,
    pub posted_at: chrono::DateTime<chrono::Utc>,
}

/// Represents the 'opportunity_applications' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct OpportunityApplication {
    pub id: i64,
    pub opportunity_id: i64,
    pub user_id: i64,

    /// 'pending', 'accepted' or 'rejected'.
    pub status: String,

    pub cover_letter: Option<String>,
    pub applied_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating an opportunity.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOpportunityRequest {
    #[validate(length(min = 3, max = 200))]
    pub title: String,
    #[serde(rename = "type")]
    pub opportunity_type: String,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    pub company: Option<String>,
    pub mentor_name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub is_remote: bool,
    pub salary: Option<String>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for a partial opportunity update.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOpportunityRequest {
    #[validate(length(min = 3, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub description: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub is_remote: Option<bool>,
    pub salary: Option<String>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for reviewing an opportunity application.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOpportunityApplicationRequest {
    /// One of 'pending', 'accepted' or 'rejected'.
    #[validate(length(min = 1, max = 50))]
    pub status: String,
}

/// DTO for applying to an opportunity.
#[derive(Debug, Deserialize, Validate)]
pub struct ApplyOpportunityRequest {
    pub opportunity_id: i64,
    #[validate(length(max = 10000))]
    pub cover_letter: Option<String>,
}

/// Query parameters for listing opportunities.
#[derive(Debug, Deserialize)]
pub struct OpportunityListParams {
    #[serde(rename = "type")]
    pub opportunity_type: Option<String>,
    pub location: Option<String>,
    pub remote: Option<bool>,
    /// Free-text search over title and description.
    pub q: Option<String>,
}
