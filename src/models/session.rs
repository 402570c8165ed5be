// src/models/session.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const SESSION_STATUSES: &[&str] = &["scheduled", "completed", "cancelled"];

/// Represents the 'mentorship_sessions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MentorshipSession {
    pub id: i64,
    pub mentor_id: i64,
    pub student_id: i64,
    pub topic: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: i32,

    /// 'scheduled', 'completed' or 'cancelled'.
    pub status: String,

    pub message: Option<String>,
}

/// DTO for moving a session through its lifecycle.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSessionRequest {
    /// One of 'scheduled', 'completed' or 'cancelled'.
    #[validate(length(min = 1, max = 50))]
    pub status: String,
}
