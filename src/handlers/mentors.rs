// src/handlers/mentors.rs

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    domain::{
        filters::{page_window, split_csv},
        matching::{mentor_match_score, rank_by_overlap, shared_tag_count, text_matches},
    },
    error::AppError,
    models::{
        mentor::{
            BookSessionRequest, ConnectRequest, CreateMentorRequest, LimitParams, Mentor,
            MentorListParams, UpdateMentorRequest,
        },
        message::Message,
        session::{MentorshipSession, SESSION_STATUSES, UpdateSessionRequest},
        user::User,
    },
    utils::{jwt::Claims, sanitize::clean_text},
};

const MENTOR_SELECT: &str = r#"
    SELECT m.id, m.user_id, m.role, m.company, m.location, m.expertise,
           m.experience, m.rating, m.mentees, m.bio, m.availability, m.is_verified,
           u.name, u.email, u.avatar_url
    FROM mentors m
    JOIN users u ON m.user_id = u.id
"#;

async fn fetch_all_mentors(pool: &PgPool) -> Result<Vec<Mentor>, AppError> {
    let mentors = sqlx::query_as::<_, Mentor>(MENTOR_SELECT)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch mentors: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;
    Ok(mentors)
}

/// List mentors. A free-text query searches name/role/company; otherwise an
/// expertise filter matches the union of the given tags; otherwise all.
/// Offset-paginated with `meta` info.
pub async fn list_mentors(
    State(pool): State<PgPool>,
    Query(params): Query<MentorListParams>,
) -> Result<impl IntoResponse, AppError> {
    let mentors = fetch_all_mentors(&pool).await?;

    let filtered: Vec<Mentor> = if let Some(query) = params.query.as_deref().filter(|q| !q.is_empty()) {
        mentors
            .into_iter()
            .filter(|m| text_matches(query, &[&m.name, &m.role, &m.company]))
            .collect()
    } else if let Some(raw) = params.expertise.as_deref().filter(|e| !e.is_empty()) {
        let wanted = split_csv(raw);
        mentors
            .into_iter()
            .filter(|m| shared_tag_count(&m.expertise, &wanted) > 0)
            .collect()
    } else {
        mentors
    };

    let total = filtered.len();
    let (offset, limit) = page_window(params.page, params.limit, 12);
    let page: Vec<Mentor> = filtered.into_iter().skip(offset).take(limit).collect();

    Ok(Json(json!({
        "success": true,
        "data": page,
        "meta": {
            "page": (offset / limit) as i64 + 1,
            "limit": limit as i64,
            "total": total as i64,
        },
    })))
}

/// Get a single mentor by ID.
pub async fn get_mentor(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let sql = format!("{} WHERE m.id = $1", MENTOR_SELECT);
    let mentor = sqlx::query_as::<_, Mentor>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Mentor not found".to_string()))?;

    Ok(Json(json!({ "success": true, "data": mentor })))
}

/// Mentors similar to the given one, ranked by shared expertise tags.
/// Ties keep natural collection order.
pub async fn similar_mentors(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit.filter(|l| *l > 0).unwrap_or(4).min(50) as usize;

    let sql = format!("{} WHERE m.id = $1", MENTOR_SELECT);
    let mentor = sqlx::query_as::<_, Mentor>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Mentor not found".to_string()))?;

    let others: Vec<Mentor> = fetch_all_mentors(&pool)
        .await?
        .into_iter()
        .filter(|m| m.id != mentor.id)
        .collect();

    let similar: Vec<Mentor> =
        rank_by_overlap(others, |other| shared_tag_count(&other.expertise, &mentor.expertise))
            .into_iter()
            .take(limit)
            .collect();

    Ok(Json(json!({ "success": true, "data": similar })))
}

/// Recommend verified mentors for the current user.
///
/// Score: 3x expertise overlap with the user's skills and interests, plus
/// the mentor's rating. Plain set-overlap, no trained model.
pub async fn recommended_mentors(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit.filter(|l| *l > 0).unwrap_or(6).min(50) as usize;

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(claims.user_id())
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let mut user_tags = user.skills.clone();
    user_tags.extend(user.interests.iter().cloned());

    let verified: Vec<Mentor> = fetch_all_mentors(&pool)
        .await?
        .into_iter()
        .filter(|m| m.is_verified && m.user_id != user.id)
        .collect();

    let mut scored: Vec<(f64, Mentor)> = verified
        .into_iter()
        .map(|m| (mentor_match_score(&m.expertise, &user_tags, m.rating), m))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let top: Vec<Mentor> = scored.into_iter().take(limit).map(|(_, m)| m).collect();

    Ok(Json(json!({ "success": true, "data": top })))
}

/// Create a mentor profile for the current user.
///
/// One profile per user; rating, mentee count and the verified flag start at
/// their defaults and are not caller-settable.
pub async fn create_mentor(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateMentorRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let bio = clean_text(&payload.bio);

    let mentor_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO mentors (user_id, role, company, location, expertise,
                             experience, bio, availability)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(claims.user_id())
    .bind(&payload.role)
    .bind(&payload.company)
    .bind(&payload.location)
    .bind(&payload.expertise)
    .bind(&payload.experience)
    .bind(&bio)
    .bind(&payload.availability)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
            AppError::Conflict("You already have a mentor profile".to_string())
        } else {
            tracing::error!("Failed to create mentor profile: {:?}", e);
            AppError::from(e)
        }
    })?;

    let sql = format!("{} WHERE m.id = $1", MENTOR_SELECT);
    let mentor = sqlx::query_as::<_, Mentor>(&sql)
        .bind(mentor_id)
        .fetch_one(&pool)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": mentor })),
    ))
}

/// Partially update a mentor profile. Owner only.
pub async fn update_mentor(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMentorRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let owner: Option<(i64,)> = sqlx::query_as("SELECT user_id FROM mentors WHERE id = $1")
        .bind(id)
        .fetch_optional(&pool)
        .await?;
    let (owner_id,) = owner.ok_or(AppError::NotFound("Mentor not found".to_string()))?;
    if owner_id != claims.user_id() {
        return Err(AppError::Forbidden(
            "You are not authorized to update this mentor profile".to_string(),
        ));
    }

    let bio = payload.bio.as_deref().map(clean_text);

    sqlx::query(
        r#"
        UPDATE mentors SET
            role = COALESCE($1, role),
            company = COALESCE($2, company),
            location = COALESCE($3, location),
            expertise = COALESCE($4, expertise),
            experience = COALESCE($5, experience),
            bio = COALESCE($6, bio),
            availability = COALESCE($7, availability)
        WHERE id = $8
        "#,
    )
    .bind(&payload.role)
    .bind(&payload.company)
    .bind(&payload.location)
    .bind(&payload.expertise)
    .bind(&payload.experience)
    .bind(&bio)
    .bind(&payload.availability)
    .bind(id)
    .execute(&pool)
    .await?;

    let sql = format!("{} WHERE m.id = $1", MENTOR_SELECT);
    let mentor = sqlx::query_as::<_, Mentor>(&sql)
        .bind(id)
        .fetch_one(&pool)
        .await?;

    Ok(Json(json!({ "success": true, "data": mentor })))
}

/// Send a connection request to a mentor.
///
/// Delivered as a direct message to the mentor's user account, so it shows
/// up in the mentor's regular inbox.
pub async fn connect(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<ConnectRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let mentor_user: Option<(i64,)> = sqlx::query_as("SELECT user_id FROM mentors WHERE id = $1")
        .bind(id)
        .fetch_optional(&pool)
        .await?;
    let (mentor_user_id,) =
        mentor_user.ok_or(AppError::NotFound("Mentor not found".to_string()))?;

    let sender_id = claims.user_id();
    if mentor_user_id == sender_id {
        return Err(AppError::BadRequest(
            "Cannot send a connection request to yourself".to_string(),
        ));
    }

    let content = clean_text(&payload.message);
    if content.trim().is_empty() {
        return Err(AppError::BadRequest("A message is required".to_string()));
    }

    let message = sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (sender_id, receiver_id, content)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(sender_id)
    .bind(mentor_user_id)
    .bind(&content)
    .fetch_one(&pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": message })),
    ))
}

/// Book a mentorship session with a mentor.
pub async fn book_session(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<BookSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let mentor_exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM mentors WHERE id = $1")
        .bind(payload.mentor_id)
        .fetch_optional(&pool)
        .await?;
    if mentor_exists.is_none() {
        return Err(AppError::NotFound("Mentor not found".to_string()));
    }

    let message = payload.message.as_deref().map(clean_text);

    let session = sqlx::query_as::<_, MentorshipSession>(
        r#"
        INSERT INTO mentorship_sessions (mentor_id, student_id, topic, scheduled_at,
                                         duration_minutes, message)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(payload.mentor_id)
    .bind(claims.user_id())
    .bind(&payload.topic)
    .bind(payload.scheduled_date)
    .bind(payload.duration)
    .bind(&message)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to book session: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": session })),
    ))
}

/// List sessions where the current user is the student or the mentor.
pub async fn list_sessions(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id();

    let sessions = sqlx::query_as::<_, MentorshipSession>(
        r#"
        SELECT s.*
        FROM mentorship_sessions s
        LEFT JOIN mentors m ON s.mentor_id = m.id
        WHERE s.student_id = $1 OR m.user_id = $1
        ORDER BY s.scheduled_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(json!({ "success": true, "data": sessions })))
}

/// Move a session through its lifecycle (complete or cancel it).
/// Either participant may do so.
pub async fn update_session(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    if !SESSION_STATUSES.contains(&payload.status.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unknown session status '{}'",
            payload.status
        )));
    }

    let participants: Option<(i64, i64)> = sqlx::query_as(
        r#"
        SELECT s.student_id, m.user_id
        FROM mentorship_sessions s
        JOIN mentors m ON s.mentor_id = m.id
        WHERE s.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?;
    let (student_id, mentor_user_id) =
        participants.ok_or(AppError::NotFound("Session not found".to_string()))?;

    let user_id = claims.user_id();
    if user_id != student_id && user_id != mentor_user_id {
        return Err(AppError::Forbidden(
            "Only a session participant can update it".to_string(),
        ));
    }

    let updated = sqlx::query_as::<_, MentorshipSession>(
        "UPDATE mentorship_sessions SET status = $1 WHERE id = $2 RETURNING *",
    )
    .bind(&payload.status)
    .bind(id)
    .fetch_one(&pool)
    .await?;

    Ok(Json(json!({ "success": true, "data": updated })))
}
