//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

/// Provision a user through a signed `user.created` delivery
async fn provision(server: &TestServer, identity: &TestIdentity) {
    let body = identity.created_event();
    let headers = identity_webhook_headers(&body);
    let response = server
        .post_raw("/api/webhooks/identity", &headers, body)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_current_user_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/me", "not.a.token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_user_count_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/count").await.unwrap();
    let body: UserCountBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.count >= 0);
}

// ============================================================================
// Identity Webhook Tests
// ============================================================================

#[tokio::test]
async fn test_identity_webhook_provisions_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();
    provision(&server, &identity).await;

    let response = server
        .get_auth("/api/v1/users/me", &identity.token())
        .await
        .unwrap();
    let user: CurrentUserBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.external_id, identity.external_id);
    assert_eq!(user.email, identity.email);
    assert_eq!(user.first_name, identity.first_name);
    assert_eq!(user.last_name, identity.last_name);
    assert_eq!(user.role, "user");
}

#[tokio::test]
async fn test_identity_webhook_updates_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();
    provision(&server, &identity).await;

    let body = identity.updated_event("Grace", "Hopper", Some("admin"));
    let headers = identity_webhook_headers(&body);
    let response = server
        .post_raw("/api/webhooks/identity", &headers, body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/me", &identity.token())
        .await
        .unwrap();
    let user: CurrentUserBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.first_name, "Grace");
    assert_eq!(user.last_name, "Hopper");
    assert_eq!(user.role, "admin");
}

#[tokio::test]
async fn test_identity_webhook_deletes_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();
    provision(&server, &identity).await;

    let body = identity.deleted_event();
    let headers = identity_webhook_headers(&body);
    let response = server
        .post_raw("/api/webhooks/identity", &headers, body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The session is still valid but the account is gone
    let response = server
        .get_auth("/api/v1/users/me", &identity.token())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_identity_webhook_rejects_bad_signature() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();

    let body = identity.created_event();
    let headers = forged_identity_webhook_headers();
    let response = server
        .post_raw("/api/webhooks/identity", &headers, body)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // The rejected event must not have provisioned anything
    let response = server
        .get_auth("/api/v1/users/me", &identity.token())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_identity_webhook_rejects_missing_headers() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = TestIdentity::unique().created_event();

    let response = server
        .post_raw("/api/webhooks/identity", &[], body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_identity_webhook_ignores_unknown_events() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = json!({
        "type": "session.created",
        "data": { "id": "sess_1" }
    })
    .to_string();
    let headers = identity_webhook_headers(&body);

    let response = server
        .post_raw("/api/webhooks/identity", &headers, body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Resume Tests
// ============================================================================

#[tokio::test]
async fn test_resume_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();
    provision(&server, &identity).await;
    let token = identity.token();

    // Create
    let response = server
        .post_auth(
            "/api/v1/resumes",
            &token,
            &json!({ "title": "Backend Engineer", "skills": ["Rust", "SQL"] }),
        )
        .await
        .unwrap();
    let created: ResumeBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.title.as_deref(), Some("Backend Engineer"));
    assert_eq!(created.skills, vec!["Rust", "SQL"]);
    assert_eq!(created.border_style, "squircle");

    // List
    let response = server.get_auth("/api/v1/resumes", &token).await.unwrap();
    let list: Vec<ResumeBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, created.id);

    // Get by id
    let response = server
        .get_auth(&format!("/api/v1/resumes/{}", created.id), &token)
        .await
        .unwrap();
    let fetched: ResumeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);

    // Update replaces the whole editor state
    let response = server
        .put_auth(
            &format!("/api/v1/resumes/{}", created.id),
            &token,
            &json!({ "title": "Staff Engineer", "summary": "Ten years of systems work." }),
        )
        .await
        .unwrap();
    let updated: ResumeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title.as_deref(), Some("Staff Engineer"));
    assert_eq!(updated.summary.as_deref(), Some("Ten years of systems work."));
    assert!(updated.skills.is_empty());

    // Delete
    let response = server
        .delete_auth(&format!("/api/v1/resumes/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/resumes/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_resume_invalid_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();
    provision(&server, &identity).await;

    let response = server
        .get_auth("/api/v1/resumes/not-a-uuid", &identity.token())
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_free_tier_resume_cap() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();
    provision(&server, &identity).await;
    let token = identity.token();

    let response = server
        .post_auth("/api/v1/resumes", &token, &json!({ "title": "First" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Free tier allows a single resume
    let response = server
        .post_auth("/api/v1/resumes", &token, &json!({ "title": "Second" }))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "RESUME_LIMIT_REACHED");
}

#[tokio::test]
async fn test_foreign_resume_reads_as_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let owner = TestIdentity::unique();
    provision(&server, &owner).await;
    let other = TestIdentity::unique();
    provision(&server, &other).await;

    let response = server
        .post_auth("/api/v1/resumes", &owner.token(), &json!({ "title": "Mine" }))
        .await
        .unwrap();
    let created: ResumeBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/resumes/{}", created.id), &other.token())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Subscription and Billing Tests
// ============================================================================

#[tokio::test]
async fn test_subscription_defaults_to_free() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();
    provision(&server, &identity).await;

    let response = server
        .get_auth("/api/v1/subscription/level", &identity.token())
        .await
        .unwrap();
    let level: SubscriptionLevelBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(level.level, "free");
}

#[tokio::test]
async fn test_billing_webhook_updates_subscription_level() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();
    provision(&server, &identity).await;
    let subscription_id = format!("sub_test_{}", unique_suffix());

    // Upgrade to pro
    let body = subscription_event(
        "customer.subscription.updated",
        &subscription_id,
        &identity.external_id,
        "price_pro",
    );
    let headers = billing_webhook_headers(&body);
    let response = server
        .post_raw("/api/webhooks/billing", &headers, body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/subscription/level", &identity.token())
        .await
        .unwrap();
    let level: SubscriptionLevelBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(level.level, "pro");
    assert!(!level.cancel_at_period_end);

    // Cancellation drops back to free
    let body = subscription_deleted_event(&subscription_id);
    let headers = billing_webhook_headers(&body);
    let response = server
        .post_raw("/api/webhooks/billing", &headers, body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/subscription/level", &identity.token())
        .await
        .unwrap();
    let level: SubscriptionLevelBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(level.level, "free");
}

#[tokio::test]
async fn test_billing_webhook_rejects_bad_signature() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();
    provision(&server, &identity).await;

    let body = subscription_event(
        "customer.subscription.updated",
        "sub_forged",
        &identity.external_id,
        "price_pro",
    );
    let headers = forged_billing_webhook_headers();
    let response = server
        .post_raw("/api/webhooks/billing", &headers, body)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_portal_session_requires_subscription() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();
    provision(&server, &identity).await;

    let response = server
        .post_auth("/api/v1/billing/portal", &identity.token(), &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Generation Tests
// ============================================================================

#[tokio::test]
async fn test_generation_requires_paid_tier() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();
    provision(&server, &identity).await;

    let response = server
        .post_auth(
            "/api/v1/generation/summary",
            &identity.token(),
            &json!({ "job_title": "Backend Engineer", "skills": ["Rust"] }),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "UPGRADE_REQUIRED");
}

#[tokio::test]
async fn test_generation_validates_description_length() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = TestIdentity::unique();
    provision(&server, &identity).await;

    let response = server
        .post_auth(
            "/api/v1/generation/work-experience",
            &identity.token(),
            &json!({ "description": "too short" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
