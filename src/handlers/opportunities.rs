// src/handlers/opportunities.rs

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
    domain::filters::filter_opportunities,
    error::AppError,
    models::opportunity::{
        ApplyOpportunityRequest, CreateOpportunityRequest, OPPORTUNITY_APPLICATION_STATUSES,
        OPPORTUNITY_TYPES, Opportunity, OpportunityApplication, OpportunityListParams,
        UpdateOpportunityApplicationRequest, UpdateOpportunityRequest,
    },
    utils::{jwt::Claims, sanitize::clean_text},
};

/// List opportunities with optional filters, newest first.
pub async fn list_opportunities(
    State(pool): State<PgPool>,
    Query(params): Query<OpportunityListParams>,
) -> Result<impl IntoResponse, AppError> {
    let opportunities = sqlx::query_as::<_, Opportunity>("SELECT * FROM opportunities")
        .fetch_all(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list opportunities: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    let filtered = filter_opportunities(
        opportunities,
        params.opportunity_type.as_deref(),
        params.location.as_deref(),
        params.remote,
        params.q.as_deref(),
    );
    let total = filtered.len() as i64;

    Ok(Json(json!({
        "success": true,
        "data": filtered,
        "meta": { "total": total },
    })))
}

/// Get a single opportunity by ID.
pub async fn get_opportunity(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let opportunity = sqlx::query_as::<_, Opportunity>("SELECT * FROM opportunities WHERE id = $1")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Opportunity not found".to_string()))?;

    Ok(Json(json!({ "success": true, "data": opportunity })))
}

/// Create a new opportunity.
pub async fn create_opportunity(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateOpportunityRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    if !OPPORTUNITY_TYPES.contains(&payload.opportunity_type.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unknown opportunity type '{}'",
            payload.opportunity_type
        )));
    }

    let opportunity = sqlx::query_as::<_, Opportunity>(
        r#"
        INSERT INTO opportunities (title, opportunity_type, description, company,
                                   mentor_name, location, skills, is_remote, salary,
                                   deadline, posted_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.opportunity_type)
    .bind(&payload.description)
    .bind(&payload.company)
    .bind(&payload.mentor_name)
    .bind(&payload.location)
    .bind(&payload.skills)
    .bind(payload.is_remote)
    .bind(&payload.salary)
    .bind(payload.deadline)
    .bind(claims.user_id())
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create opportunity: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": opportunity })),
    ))
}

/// Update an opportunity. Poster only.
pub async fn update_opportunity(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOpportunityRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let existing = sqlx::query_as::<_, Opportunity>("SELECT * FROM opportunities WHERE id = $1")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Opportunity not found".to_string()))?;

    if existing.posted_by != claims.user_id() {
        return Err(AppError::Forbidden(
            "You are not authorized to update this opportunity".to_string(),
        ));
    }

    let updated = sqlx::query_as::<_, Opportunity>(
        r#"
        UPDATE opportunities SET
            title = COALESCE($1, title),
            description = COALESCE($2, description),
            location = COALESCE($3, location),
            skills = COALESCE($4, skills),
            is_remote = COALESCE($5, is_remote),
            salary = COALESCE($6, salary),
            deadline = COALESCE($7, deadline)
        WHERE id = $8
        RETURNING *
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(&payload.location)
    .bind(&payload.skills)
    .bind(payload.is_remote)
    .bind(&payload.salary)
    .bind(payload.deadline)
    .bind(id)
    .fetch_one(&pool)
    .await?;

    Ok(Json(json!({ "success": true, "data": updated })))
}

/// Delete an opportunity. Poster only.
pub async fn delete_opportunity(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let existing = sqlx::query_as::<_, Opportunity>("SELECT * FROM opportunities WHERE id = $1")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Opportunity not found".to_string()))?;

    if existing.posted_by != claims.user_id() {
        return Err(AppError::Forbidden(
            "You are not authorized to delete this opportunity".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM opportunity_applications WHERE opportunity_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM opportunities WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Apply to an opportunity. One application per (opportunity, user).
pub async fn apply(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ApplyOpportunityRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM opportunities WHERE id = $1")
        .bind(payload.opportunity_id)
        .fetch_optional(&pool)
        .await?;
    if exists.is_none() {
        return Err(AppError::NotFound("Opportunity not found".to_string()));
    }

    let cover_letter = payload.cover_letter.as_deref().map(clean_text);

    let inserted = sqlx::query_as::<_, OpportunityApplication>(
        r#"
        INSERT INTO opportunity_applications (opportunity_id, user_id, cover_letter)
        VALUES ($1, $2, $3)
        ON CONFLICT (opportunity_id, user_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(payload.opportunity_id)
    .bind(claims.user_id())
    .bind(&cover_letter)
    .fetch_optional(&pool)
    .await?;

    let application = inserted.ok_or(AppError::AlreadyApplied)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": application })),
    ))
}

/// Accept or reject an application. Opportunity poster only.
pub async fn update_application_status(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOpportunityApplicationRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    if !OPPORTUNITY_APPLICATION_STATUSES.contains(&payload.status.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unknown status '{}'",
            payload.status
        )));
    }

    let poster: Option<(i64,)> = sqlx::query_as(
        r#"
        SELECT o.posted_by
        FROM opportunity_applications a
        JOIN opportunities o ON a.opportunity_id = o.id
        WHERE a.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?;
    let (poster_id,) = poster.ok_or(AppError::NotFound("Application not found".to_string()))?;

    if poster_id != claims.user_id() {
        return Err(AppError::Forbidden(
            "Only the opportunity poster can update the application status".to_string(),
        ));
    }

    let updated = sqlx::query_as::<_, OpportunityApplication>(
        "UPDATE opportunity_applications SET status = $1 WHERE id = $2 RETURNING *",
    )
    .bind(&payload.status)
    .bind(id)
    .fetch_one(&pool)
    .await?;

    Ok(Json(json!({ "success": true, "data": updated })))
}
