// src/models/message.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'messages' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub read: bool,
    pub sent_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for sending a message.
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub receiver_id: i64,
    #[validate(length(min = 1, max = 5000, message = "Message content is required."))]
    pub content: String,
}
