// src/models/mentor.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Mentor row joined with the linked user account.
///
/// Every mentor query enriches the row with the user's name/email/avatar,
/// so the joined shape is the one the handlers work with.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Mentor {
    pub id: i64,
    pub user_id: i64,

    /// Professional role, e.g. "Staff Engineer".
    pub role: String,

    pub company: String,
    pub location: String,
    pub expertise: Vec<String>,
    pub experience: String,
    pub rating: f64,
    pub mentees: i32,
    pub bio: String,
    pub availability: String,
    pub is_verified: bool,

    // Joined from the users table.
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

/// Query parameters for listing/searching mentors.
#[derive(Debug, Deserialize)]
pub struct MentorListParams {
    /// Free-text search over name, role and company.
    pub query: Option<String>,
    /// Comma-separated expertise tags; matches the union.
    pub expertise: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// DTO for creating one's own mentor profile.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMentorRequest {
    /// Professional role, e.g. "Staff Engineer".
    #[validate(length(min = 2, max = 200, message = "Professional role is required."))]
    pub role: String,
    #[validate(length(min = 1, max = 200))]
    pub company: String,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    #[validate(length(min = 1, message = "At least one expertise tag is required."))]
    pub expertise: Vec<String>,
    #[validate(length(min = 1, max = 200))]
    pub experience: String,
    #[validate(length(min = 1, max = 5000))]
    pub bio: String,
    #[validate(length(min = 1, max = 200))]
    pub availability: String,
}

/// DTO for a partial mentor profile update.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMentorRequest {
    #[validate(length(min = 2, max = 200))]
    pub role: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub company: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    pub expertise: Option<Vec<String>>,
    #[validate(length(min = 1, max = 200))]
    pub experience: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub bio: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub availability: Option<String>,
}

/// DTO for a connection request to a mentor.
#[derive(Debug, Deserialize, Validate)]
pub struct ConnectRequest {
    #[validate(length(min = 1, max = 5000, message = "A message is required."))]
    pub message: String,
}

/// DTO for booking a mentorship session.
#[derive(Debug, Deserialize, Validate)]
pub struct BookSessionRequest {
    pub mentor_id: i64,
    #[validate(length(min = 1, max = 300, message = "Topic is required."))]
    pub topic: String,
    pub scheduled_date: chrono::DateTime<chrono::Utc>,
    #[validate(range(min = 15, max = 240, message = "Duration must be 15-240 minutes."))]
    pub duration: i32,
    #[validate(length(max = 2000))]
    pub message: Option<String>,
}
