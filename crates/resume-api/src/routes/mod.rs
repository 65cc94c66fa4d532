//! Route definitions
//!
//! Authenticated API routes are mounted under /api/v1; webhook endpoints
//! live under /api/webhooks and verify their own signatures.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{billing, generation, health, resumes, subscriptions, users, webhooks};
use crate::state::AppState;

/// Create the main API router (excluding health, which bypasses rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .nest("/api/webhooks", webhook_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(resume_routes())
        .merge(subscription_routes())
        .merge(generation_routes())
}

/// Webhook routes
fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/identity", post(webhooks::identity_webhook))
        .route("/billing", post(webhooks::billing_webhook))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(users::get_current_user))
        .route("/users/count", get(users::get_user_count))
}

/// Resume routes
fn resume_routes() -> Router<AppState> {
    Router::new()
        .route("/resumes", get(resumes::list_resumes))
        .route("/resumes", post(resumes::create_resume))
        .route("/resumes/:resume_id", get(resumes::get_resume))
        .route("/resumes/:resume_id", put(resumes::update_resume))
        .route("/resumes/:resume_id", delete(resumes::delete_resume))
}

/// Subscription and billing routes
fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/subscription/level", get(subscriptions::get_level))
        .route("/billing/portal", post(billing::create_portal_session))
}

/// Generation routes
fn generation_routes() -> Router<AppState> {
    Router::new()
        .route("/generation/summary", post(generation::generate_summary))
        .route(
            "/generation/work-experience",
            post(generation::generate_work_experience),
        )
}
