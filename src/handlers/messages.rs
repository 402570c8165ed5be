// src/handlers/messages.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::message::{Message, SendMessageRequest},
    utils::{jwt::Claims, sanitize::clean_text},
};

/// List all messages where the current user is sender or receiver,
/// newest first.
pub async fn list_messages(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let messages = sqlx::query_as::<_, Message>(
        r#"
        SELECT * FROM messages
        WHERE sender_id = $1 OR receiver_id = $1
        ORDER BY sent_at DESC
        "#,
    )
    .bind(claims.user_id())
    .fetch_all(&pool)
    .await?;

    Ok(Json(json!({ "success": true, "data": messages })))
}

/// The conversation between the current user and another user,
/// both directions, oldest first.
pub async fn get_conversation(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(other_user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let messages = sqlx::query_as::<_, Message>(
        r#"
        SELECT * FROM messages
        WHERE (sender_id = $1 AND receiver_id = $2)
           OR (sender_id = $2 AND receiver_id = $1)
        ORDER BY sent_at ASC
        "#,
    )
    .bind(claims.user_id())
    .bind(other_user_id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(json!({ "success": true, "data": messages })))
}

/// Send a message to another user.
pub async fn send_message(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let sender_id = claims.user_id();
    if payload.receiver_id == sender_id {
        return Err(AppError::BadRequest(
            "Cannot send a message to yourself".to_string(),
        ));
    }

    let receiver: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1")
        .bind(payload.receiver_id)
        .fetch_optional(&pool)
        .await?;
    if receiver.is_none() {
        return Err(AppError::UserNotFound);
    }

    let content = clean_text(&payload.content);
    if content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Message content is required".to_string(),
        ));
    }

    let message = sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (sender_id, receiver_id, content)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(sender_id)
    .bind(payload.receiver_id)
    .bind(&content)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to send message: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": message })),
    ))
}

/// Mark a message as read. Receiver only.
pub async fn mark_read(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let message = sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = $1")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Message not found".to_string()))?;

    if message.receiver_id != claims.user_id() {
        return Err(AppError::Forbidden(
            "Only the receiver can mark a message as read".to_string(),
        ));
    }

    let updated = sqlx::query_as::<_, Message>(
        "UPDATE messages SET read = TRUE WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .fetch_one(&pool)
    .await?;

    Ok(Json(json!({ "success": true, "data": updated })))
}
