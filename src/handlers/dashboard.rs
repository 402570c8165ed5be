// src/handlers/dashboard.rs

use axum::{Extension, Json, extract::State, response::IntoResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::{error::AppError, models::user::User, utils::jwt::Claims};

/// Aggregated dashboard stats for the current user.
///
/// Count subqueries stay cheap given the per-user indexes on
/// job_applications, messages and mentorship_sessions.
pub async fn get_dashboard(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id();

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let status_counts: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT status, COUNT(*) FROM job_applications
        WHERE user_id = $1
        GROUP BY status
        "#,
    )
    .bind(user_id)
    .fetch_all(&pool)
    .await?;

    let total_applications: i64 = status_counts.iter().map(|(_, n)| n).sum();

    let unread_messages: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM messages WHERE receiver_id = $1 AND read = FALSE",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await?;

    let upcoming_sessions: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM mentorship_sessions s
        LEFT JOIN mentors m ON s.mentor_id = m.id
        WHERE (s.student_id = $1 OR m.user_id = $1)
          AND s.status = 'scheduled'
          AND s.scheduled_at > NOW()
        "#,
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await?;

    let by_status: serde_json::Map<String, serde_json::Value> = status_counts
        .into_iter()
        .map(|(status, count)| (status, json!(count)))
        .collect();

    Ok(Json(json!({
        "success": true,
        "data": {
            "profile_completion": user.profile_completion,
            "applications": {
                "total": total_applications,
                "by_status": by_status,
            },
            "unread_messages": unread_messages,
            "upcoming_sessions": upcoming_sessions,
        },
    })))
}
