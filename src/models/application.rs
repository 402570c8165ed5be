// src/models/application.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const APPLICATION_STATUSES: &[&str] =
    &["pending", "reviewing", "interview", "rejected", "accepted"];

/// Represents the 'job_applications' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: i64,
    pub job_id: i64,
    pub user_id: i64,

    /// 'pending', 'reviewing', 'interview', 'rejected' or 'accepted'.
    pub status: String,

    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub next_step: Option<String>,
    pub interview_date: Option<chrono::DateTime<chrono::Utc>>,
    pub notes: Option<String>,
    pub applied_at: chrono::DateTime<chrono::Utc>,
}

/// Application row joined with the job it targets, for the applicant's list.
#[derive(Debug, Serialize, FromRow)]
pub struct ApplicationWithJob {
    pub id: i64,
    pub job_id: i64,
    pub status: String,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub next_step: Option<String>,
    pub interview_date: Option<chrono::DateTime<chrono::Utc>>,
    pub notes: Option<String>,
    pub applied_at: chrono::DateTime<chrono::Utc>,
    pub job_title: String,
    pub company: String,
    pub location: String,
}

/// DTO for submitting a job application.
#[derive(Debug, Deserialize, Validate)]
pub struct ApplyJobRequest {
    pub job_id: i64,
    #[validate(length(max = 10000))]
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// DTO for updating an application.
///
/// Status, next step and interview date are employer-side fields; notes are
/// applicant-side. The handler enforces who may set what.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateApplicationRequest {
    pub status: Option<String>,
    #[validate(length(max = 500))]
    pub next_step: Option<String>,
    pub interview_date: Option<chrono::DateTime<chrono::Utc>>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}
