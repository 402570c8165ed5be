// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub name: String,

    /// Unique email, doubles as the login identity.
    pub email: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    /// User role: 'student', 'mentor' or 'employer'.
    pub role: String,

    pub bio: Option<String>,
    pub location: Option<String>,
    pub age: Option<i32>,
    pub avatar_url: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub career_goals: Option<String>,
    pub education_level: Option<String>,
    pub current_status: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub looking_for: Vec<String>,
    pub timeline: Option<String>,

    /// Derived percentage of filled profile fields, kept on the row.
    pub profile_completion: i32,

    pub onboarding_step: i32,
    pub onboarding_completed: bool,

    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Public view of a user, safe to return for other people's profiles.
#[derive(Debug, Serialize, FromRow)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for registration.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required."))]
    pub name: String,
    #[validate(email(message = "A valid email address is required."))]
    pub email: String,
    #[validate(length(
        min = 8,
        max = 128,
        message = "Password length must be between 8 and 128 characters."
    ))]
    pub password: String,
    /// Defaults to 'student' when omitted.
    pub role: Option<String>,
}

/// DTO for login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// DTO for a partial profile update. Every field is optional; omitted fields
/// keep their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    #[validate(range(min = 13, max = 120))]
    pub age: Option<i32>,
    pub avatar_url: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    #[validate(length(max = 2000))]
    pub career_goals: Option<String>,
    pub education_level: Option<String>,
    pub current_status: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub looking_for: Option<Vec<String>>,
    pub timeline: Option<String>,
    pub role: Option<String>,
}

/// DTO for onboarding progress updates.
#[derive(Debug, Deserialize)]
pub struct OnboardingRequest {
    pub step: Option<i32>,
    pub completed: Option<bool>,
}

/// Query parameters for the user directory.
#[derive(Debug, Deserialize)]
pub struct UserListParams {
    pub role: Option<String>,
    /// Comma-separated skill list.
    pub skills: Option<String>,
}

/// Query parameters for user search.
#[derive(Debug, Deserialize)]
pub struct UserSearchParams {
    pub q: Option<String>,
}
