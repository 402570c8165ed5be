// src/handlers/jobs.rs

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
        filters::{filter_jobs, page_window, split_csv},
        matching::{rank_by_overlap, shared_tag_count},
    },
    error::AppError,
    models::job::{CreateJobRequest, EMPLOYMENT_TYPES, Job, JobListParams, PosterSummary},
    models::mentor::LimitParams,
    utils::jwt::Claims,
};

/// List active jobs with optional filtering and offset pagination.
///
/// Filters run as sequential predicates over the full active set; the
/// collections are small enough that a linear scan is fine.
pub async fn list_jobs(
    State(pool): State<PgPool>,
    Query(params): Query<JobListParams>,
) -> Result<impl IntoResponse, AppError> {
    let jobs = sqlx::query_as::<_, Job>(
        "SELECT * FROM jobs WHERE is_active = TRUE ORDER BY posted_at DESC",
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list jobs: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    let skills = params.skills.as_deref().map(split_csv);
    let filtered = filter_jobs(
        jobs,
        params.employment_type.as_deref(),
        skills.as_deref(),
        params.location.as_deref(),
        params.q.as_deref(),
    );

    let total = filtered.len();
    let (offset, limit) = page_window(params.page, params.limit, 20);
    let page: Vec<Job> = filtered.into_iter().skip(offset).take(limit).collect();

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

/// Get a single job with its poster summary. Increments the view counter.
pub async fn get_job(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let job = sqlx::query_as::<_, Job>(
        "UPDATE jobs SET views = views + 1 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Job not found".to_string()))?;

    let poster = sqlx::query_as::<_, PosterSummary>(
        "SELECT id, name, role, avatar_url FROM users WHERE id = $1",
    )
    .bind(job.posted_by)
    .fetch_optional(&pool)
    .await?;

    Ok(Json(json!({
        "success": true,
        "data": { "job": job, "poster": poster },
    })))
}

/// List other active jobs ranked by shared required skills.
pub async fn related_jobs(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit.filter(|l| *l > 0).unwrap_or(5).min(50) as usize;

    let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Job not found".to_string()))?;

    let others = sqlx::query_as::<_, Job>(
        "SELECT * FROM jobs WHERE is_active = TRUE AND id <> $1 ORDER BY posted_at DESC",
    )
    .bind(id)
    .fetch_all(&pool)
    .await?;

    let related: Vec<Job> = rank_by_overlap(others, |other| {
        shared_tag_count(&other.required_skills, &job.required_skills)
    })
    .into_iter()
    .take(limit)
    .collect();

    Ok(Json(json!({ "success": true, "data": related })))
}

/// Create a new job listing.
pub async fn create_job(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateJobRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    if !EMPLOYMENT_TYPES.contains(&payload.employment_type.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unknown employment type '{}'",
            payload.employment_type
        )));
    }

    let job = sqlx::query_as::<_, Job>(
        r#"
        INSERT INTO jobs (title, company, location, employment_type, category,
                          salary, description, required_skills, is_remote, posted_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.company)
    .bind(&payload.location)
    .bind(&payload.employment_type)
    .bind(&payload.category)
    .bind(&payload.salary)
    .bind(&payload.description)
    .bind(&payload.required_skills)
    .bind(payload.is_remote)
    .bind(claims.user_id())
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create job: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": job })),
    ))
}
