// src/handlers/applications.rs

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
    models::application::{
        APPLICATION_STATUSES, ApplicationWithJob, ApplyJobRequest, JobApplication,
        UpdateApplicationRequest,
    },
    utils::{jwt::Claims, sanitize::clean_text},
};

/// Submit a job application.
///
/// Uniqueness per (job, user) is enforced by the database constraint, not a
/// read-then-write check: `ON CONFLICT DO NOTHING` returns no row on a
/// duplicate, so concurrent double-submission cannot slip through. The
/// insert and the applicant counter increment commit in one transaction.
pub async fn apply(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ApplyJobRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user_id = claims.user_id();

    let mut tx = pool.begin().await?;

    let job_exists: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM jobs WHERE id = $1 AND is_active = TRUE")
            .bind(payload.job_id)
            .fetch_optional(&mut *tx)
            .await?;
    if job_exists.is_none() {
        return Err(AppError::NotFound("Job not found".to_string()));
    }

    let cover_letter = payload.cover_letter.as_deref().map(clean_text);

    let inserted = sqlx::query_as::<_, JobApplication>(
        r#"
        INSERT INTO job_applications (job_id, user_id, cover_letter, resume_url, notes)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (job_id, user_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(payload.job_id)
    .bind(user_id)
    .bind(&cover_letter)
    .bind(&payload.resume_url)
    .bind(&payload.notes)
    .fetch_optional(&mut *tx)
    .await?;

    let application = inserted.ok_or(AppError::AlreadyApplied)?;

    sqlx::query("UPDATE jobs SET applicants = applicants + 1 WHERE id = $1")
        .bind(payload.job_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": application })),
    ))
}

/// List the current user's applications, enriched with job info.
pub async fn list_my_applications(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let applications = sqlx::query_as::<_, ApplicationWithJob>(
        r#"
        SELECT
            a.id, a.job_id, a.status, a.cover_letter, a.resume_url,
            a.next_step, a.interview_date, a.notes, a.applied_at,
            j.title AS job_title, j.company, j.location
        FROM job_applications a
        JOIN jobs j ON a.job_id = j.id
        WHERE a.user_id = $1
        ORDER BY a.applied_at DESC
        "#,
    )
    .bind(claims.user_id())
    .fetch_all(&pool)
    .await?;

    Ok(Json(json!({ "success": true, "data": applications })))
}

/// Update an application.
///
/// Status, next step and interview date may only be changed by the job
/// poster; notes only by the applicant.
pub async fn update_application(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateApplicationRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    if let Some(status) = payload.status.as_deref() {
        if !APPLICATION_STATUSES.contains(&status) {
            return Err(AppError::BadRequest(format!("Unknown status '{}'", status)));
        }
    }

    let user_id = claims.user_id();

    let row: Option<(i64, i64)> = sqlx::query_as(
        r#"
        SELECT a.user_id, j.posted_by
        FROM job_applications a
        JOIN jobs j ON a.job_id = j.id
        WHERE a.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?;

    let (applicant_id, poster_id) =
        row.ok_or(AppError::NotFound("Application not found".to_string()))?;

    let touches_review_fields = payload.status.is_some()
        || payload.next_step.is_some()
        || payload.interview_date.is_some();

    if touches_review_fields && user_id != poster_id {
        return Err(AppError::Forbidden(
            "Only the job poster can update the application status".to_string(),
        ));
    }
    if payload.notes.is_some() && user_id != applicant_id {
        return Err(AppError::Forbidden(
            "Only the applicant can update their notes".to_string(),
        ));
    }

    let updated = sqlx::query_as::<_, JobApplication>(
        r#"
        UPDATE job_applications SET
            status = COALESCE($1, status),
            next_step = COALESCE($2, next_step),
            interview_date = COALESCE($3, interview_date),
            notes = COALESCE($4, notes)
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&payload.status)
    .bind(&payload.next_step)
    .bind(payload.interview_date)
    .bind(&payload.notes)
    .bind(id)
    .fetch_one(&pool)
    .await?;

    Ok(Json(json!({ "success": true, "data": updated })))
}

/// Withdraw an application. Applicant only.
///
/// Deleting reverses the counter increment from `apply`, clamped at zero.
pub async fn delete_application(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id();

    let mut tx = pool.begin().await?;

    let application = sqlx::query_as::<_, JobApplication>(
        "SELECT * FROM job_applications WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::NotFound("Application not found".to_string()))?;

    if application.user_id != user_id {
        return Err(AppError::Forbidden(
            "You are not authorized to delete this application".to_string(),
        ));
    }

    sqlx::query("DELETE FROM job_applications WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("UPDATE jobs SET applicants = GREATEST(0, applicants - 1) WHERE id = $1")
        .bind(application.job_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
