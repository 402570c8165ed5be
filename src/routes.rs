// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, patch, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{
        applications, auth, dashboard, jobs, mentors, messages, opportunities, profile, users,
    },
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, profile, jobs, applications, ...).
/// * Public read routes stay open; everything that writes or exposes
///   personal data sits behind the auth middleware.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins: [HeaderValue; 2] = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let require_auth = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .merge(
            Router::new()
                .route("/user", get(auth::current_user))
                .layer(require_auth.clone()),
        );

    let profile_routes = Router::new()
        .route("/{id}", get(profile::get_profile))
        .merge(
            Router::new()
                .route("/", get(profile::get_me).patch(profile::update_profile))
                .route("/onboarding", patch(profile::update_onboarding))
                .layer(require_auth.clone()),
        );

    let job_routes = Router::new()
        .route("/", get(jobs::list_jobs))
        .route("/{id}", get(jobs::get_job))
        .route("/{id}/related", get(jobs::related_jobs))
        .merge(
            Router::new()
                .route("/", post(jobs::create_job))
                .route("/apply", post(applications::apply))
                .layer(require_auth.clone()),
        );

    let application_routes = Router::new()
        .route("/", get(applications::list_my_applications))
        .route(
            "/{id}",
            patch(applications::update_application).delete(applications::delete_application),
        )
        .layer(require_auth.clone());

    let opportunity_routes = Router::new()
        .route("/", get(opportunities::list_opportunities))
        .route("/{id}", get(opportunities::get_opportunity))
        .merge(
            Router::new()
                .route("/", post(opportunities::create_opportunity))
                .route("/apply", post(opportunities::apply))
                .route(
                    "/applications/{id}",
                    patch(opportunities::update_application_status),
                )
                .route(
                    "/{id}",
                    patch(opportunities::update_opportunity)
                        .delete(opportunities::delete_opportunity),
                )
                .layer(require_auth.clone()),
        );

    let mentor_routes = Router::new()
        .route("/", get(mentors::list_mentors))
        .route("/{id}", get(mentors::get_mentor))
        .route("/{id}/similar", get(mentors::similar_mentors))
        .merge(
            Router::new()
                .route("/", post(mentors::create_mentor))
                .route("/recommended", get(mentors::recommended_mentors))
                .route("/book", post(mentors::book_session))
                .route("/sessions", get(mentors::list_sessions))
                .route("/sessions/{id}", patch(mentors::update_session))
                .route("/{id}", patch(mentors::update_mentor))
                .route("/{id}/connect", post(mentors::connect))
                .layer(require_auth.clone()),
        );

    let message_routes = Router::new()
        .route("/", get(messages::list_messages).post(messages::send_message))
        .route("/conversation/{user_id}", get(messages::get_conversation))
        .route("/{id}", patch(messages::mark_read))
        .layer(require_auth.clone());

    let user_routes = Router::new()
        .route("/", get(users::list_users))
        .route("/search", get(users::search_users))
        .layer(require_auth.clone());

    let onboarding_routes = Router::new()
        .route("/check", get(profile::check_onboarding))
        .layer(require_auth.clone());

    let dashboard_routes = Router::new()
        .route("/", get(dashboard::get_dashboard))
        .layer(require_auth);

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/profile", profile_routes)
        .nest("/api/jobs", job_routes)
        .nest("/api/applications", application_routes)
        .nest("/api/opportunities", opportunity_routes)
        .nest("/api/mentors", mentor_routes)
        .nest("/api/messages", message_routes)
        .nest("/api/users", user_routes)
        .nest("/api/onboarding", onboarding_routes)
        .nest("/api/dashboard", dashboard_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
