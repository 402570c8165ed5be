// src/handlers/profile.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    domain::completion::calculate_profile_completion,
    error::AppError,
    models::user::{OnboardingRequest, PublicUser, UpdateProfileRequest, User},
    utils::{jwt::Claims, sanitize::clean_text},
};

const ROLES: &[&str] = &["student", "mentor", "employer"];
const EDUCATION_LEVELS: &[&str] = &[
    "high_school",
    "undergraduate",
    "graduate",
    "phd",
    "bootcamp",
    "self_taught",
];

/// Get the current user's own profile.
pub async fn get_me(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(claims.user_id())
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(Json(json!({ "success": true, "data": user })))
}

/// Get another user's public profile by ID.
pub async fn get_profile(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = sqlx::query_as::<_, PublicUser>(
        r#"
        SELECT id, name, role, bio, location, avatar_url, skills, interests, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::UserNotFound)?;

    Ok(Json(json!({ "success": true, "data": user })))
}

/// Partially update the current user's profile.
///
/// Merges the payload over the stored row, recomputes the profile
/// completion percentage and persists both in one UPDATE.
pub async fn update_profile(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    if let Some(role) = payload.role.as_deref() {
        if !ROLES.contains(&role) {
            return Err(AppError::BadRequest(format!("Unknown role '{}'", role)));
        }
    }
    if let Some(level) = payload.education_level.as_deref() {
        if !EDUCATION_LEVELS.contains(&level) {
            return Err(AppError::BadRequest(format!(
                "Unknown education level '{}'",
                level
            )));
        }
    }
    validate_link("linkedin_url", payload.linkedin_url.as_deref())?;
    validate_link("github_url", payload.github_url.as_deref())?;
    validate_link("portfolio_url", payload.portfolio_url.as_deref())?;

    let mut user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(claims.user_id())
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::UserNotFound)?;

    // Merge: omitted fields keep their stored value.
    if let Some(name) = payload.name {
        user.name = name;
    }
    if let Some(bio) = payload.bio {
        user.bio = Some(clean_text(&bio));
    }
    if let Some(location) = payload.location {
        user.location = Some(location);
    }
    if let Some(age) = payload.age {
        user.age = Some(age);
    }
    if let Some(avatar_url) = payload.avatar_url {
        user.avatar_url = Some(avatar_url);
    }
    if let Some(skills) = payload.skills {
        user.skills = skills;
    }
    if let Some(interests) = payload.interests {
        user.interests = interests;
    }
    if let Some(career_goals) = payload.career_goals {
        user.career_goals = Some(clean_text(&career_goals));
    }
    if let Some(education_level) = payload.education_level {
        user.education_level = Some(education_level);
    }
    if let Some(current_status) = payload.current_status {
        user.current_status = Some(current_status);
    }
    if let Some(linkedin_url) = payload.linkedin_url {
        user.linkedin_url = Some(linkedin_url);
    }
    if let Some(github_url) = payload.github_url {
        user.github_url = Some(github_url);
    }
    if let Some(portfolio_url) = payload.portfolio_url {
        user.portfolio_url = Some(portfolio_url);
    }
    if let Some(looking_for) = payload.looking_for {
        user.looking_for = looking_for;
    }
    if let Some(timeline) = payload.timeline {
        user.timeline = Some(timeline);
    }
    if let Some(role) = payload.role {
        user.role = role;
    }

    let profile_completion = calculate_profile_completion(&user);

    let updated = sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET
            name = $1, bio = $2, location = $3, age = $4, avatar_url = $5,
            skills = $6, interests = $7, career_goals = $8, education_level = $9,
            current_status = $10, linkedin_url = $11, github_url = $12,
            portfolio_url = $13, looking_for = $14, timeline = $15, role = $16,
            profile_completion = $17, updated_at = NOW()
        WHERE id = $18
        RETURNING *
        "#,
    )
    .bind(&user.name)
    .bind(&user.bio)
    .bind(&user.location)
    .bind(user.age)
    .bind(&user.avatar_url)
    .bind(&user.skills)
    .bind(&user.interests)
    .bind(&user.career_goals)
    .bind(&user.education_level)
    .bind(&user.current_status)
    .bind(&user.linkedin_url)
    .bind(&user.github_url)
    .bind(&user.portfolio_url)
    .bind(&user.looking_for)
    .bind(&user.timeline)
    .bind(&user.role)
    .bind(profile_completion)
    .bind(user.id)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update profile: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(json!({ "success": true, "data": updated })))
}

/// Update onboarding progress: advance the step and/or mark it complete.
pub async fn update_onboarding(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<OnboardingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.step.is_none() && payload.completed.is_none() {
        return Err(AppError::BadRequest(
            "Either step or completed is required".to_string(),
        ));
    }
    if let Some(step) = payload.step {
        if step < 0 {
            return Err(AppError::BadRequest("step must be non-negative".to_string()));
        }
    }

    let updated = sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET
            onboarding_step = COALESCE($1, onboarding_step),
            onboarding_completed = COALESCE($2, onboarding_completed),
            updated_at = NOW()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(payload.step)
    .bind(payload.completed)
    .bind(claims.user_id())
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::UserNotFound)?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "step": updated.onboarding_step,
            "completed": updated.onboarding_completed,
        },
    })))
}

/// Check onboarding state for the current user.
pub async fn check_onboarding(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(claims.user_id())
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "step": user.onboarding_step,
            "completed": user.onboarding_completed,
        },
    })))
}

/// Social and portfolio links must be http(s) URLs.
fn validate_link(label: &str, value: Option<&str>) -> Result<(), AppError> {
    if let Some(raw) = value.filter(|s| !s.trim().is_empty()) {
        let parsed = url::Url::parse(raw)
            .map_err(|_| AppError::BadRequest(format!("{} must be a valid URL", label)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppError::BadRequest(format!(
                "{} must use http or https",
                label
            )));
        }
    }
    Ok(())
}
