// src/handlers/users.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;

use crate::{
    domain::{
        filters::{filter_users, split_csv},
        matching::text_matches,
    },
    error::AppError,
    models::user::{PublicUser, User, UserListParams, UserSearchParams},
};

fn to_public(user: User) -> PublicUser {
    PublicUser {
        id: user.id,
        name: user.name,
        role: user.role,
        bio: user.bio,
        location: user.location,
        avatar_url: user.avatar_url,
        skills: user.skills,
        interests: user.interests,
        created_at: user.created_at,
    }
}

/// List users filtered by role and/or skill intersection.
pub async fn list_users(
    State(pool): State<PgPool>,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, AppError> {
    let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
        .fetch_all(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    let skills = params.skills.as_deref().map(split_csv);
    let filtered: Vec<PublicUser> =
        filter_users(users, params.role.as_deref(), skills.as_deref())
            .into_iter()
            .map(to_public)
            .collect();
    let total = filtered.len() as i64;

    Ok(Json(json!({
        "success": true,
        "data": filtered,
        "meta": { "total": total },
    })))
}

/// Search users by name or email, case-insensitive substring.
pub async fn search_users(
    State(pool): State<PgPool>,
    Query(params): Query<UserSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let q = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(AppError::BadRequest("q is required".to_string()))?;

    let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
        .fetch_all(&pool)
        .await?;

    let matches: Vec<PublicUser> = users
        .into_iter()
        .filter(|u| text_matches(q, &[&u.name, &u.email]))
        .map(to_public)
        .collect();

    Ok(Json(json!({ "success": true, "data": matches })))
}
