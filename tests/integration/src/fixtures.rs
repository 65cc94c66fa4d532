//! Test fixtures and data generators
//!
//! Builds signed webhook deliveries and session tokens that line up with the
//! fixed secrets in `test_config`, plus typed views of API responses.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Duration, Utc};
use resume_common::{BillingWebhookVerifier, SessionVerifier, WebhookVerifier};
use serde::Deserialize;
use serde_json::json;

/// Identity webhook signing secret used by the test server
pub const TEST_IDENTITY_WEBHOOK_SECRET: &str = "whsec_dGVzdC1zZWNyZXQtZm9yLXdlYmhvb2tz";

/// Billing webhook signing secret used by the test server
pub const TEST_BILLING_WEBHOOK_SECRET: &str = "test-billing-webhook-secret";

/// Session-token secret used by the test server
pub const TEST_JWT_SECRET: &str = "test-session-secret-that-is-long-enough";

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Issue a session token accepted by the test server
pub fn session_token(external_id: &str) -> String {
    SessionVerifier::new(TEST_JWT_SECRET)
        .issue(external_id, Duration::hours(1))
        .expect("failed to issue test session token")
}

// ============================================================================
// Identity webhook fixtures
// ============================================================================

/// A synthetic identity-provider account
#[derive(Debug, Clone)]
pub struct TestIdentity {
    pub external_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl TestIdentity {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            external_id: format!("idp_test_{suffix}"),
            email: format!("test{suffix}@example.com"),
            first_name: "Test".to_string(),
            last_name: format!("User{suffix}"),
        }
    }

    /// Session token for this account
    pub fn token(&self) -> String {
        session_token(&self.external_id)
    }

    /// `user.created` event body
    pub fn created_event(&self) -> String {
        identity_user_event("user.created", self, None)
    }

    /// `user.updated` event body with replacement names and an optional role
    pub fn updated_event(&self, first_name: &str, last_name: &str, role: Option<&str>) -> String {
        let mut updated = self.clone();
        updated.first_name = first_name.to_string();
        updated.last_name = last_name.to_string();
        identity_user_event("user.updated", &updated, role)
    }

    /// `user.deleted` event body
    pub fn deleted_event(&self) -> String {
        json!({
            "type": "user.deleted",
            "data": {
                "id": self.external_id,
                "deleted": true
            }
        })
        .to_string()
    }
}

fn identity_user_event(kind: &str, identity: &TestIdentity, role: Option<&str>) -> String {
    let public_metadata = match role {
        Some(role) => json!({ "role": role }),
        None => json!({}),
    };
    json!({
        "type": kind,
        "data": {
            "id": identity.external_id,
            "email_addresses": [
                { "id": "em_primary", "email_address": identity.email }
            ],
            "primary_email_address_id": "em_primary",
            "first_name": identity.first_name,
            "last_name": identity.last_name,
            "image_url": null,
            "public_metadata": public_metadata
        }
    })
    .to_string()
}

/// Sign an identity webhook body, returning the three delivery headers
pub fn identity_webhook_headers(body: &str) -> Vec<(String, String)> {
    let verifier = WebhookVerifier::new(TEST_IDENTITY_WEBHOOK_SECRET)
        .expect("test identity webhook secret is valid");
    let msg_id = format!("msg_{}", unique_suffix());
    let timestamp = Utc::now().timestamp().to_string();
    let signature = verifier.sign(&msg_id, &timestamp, body.as_bytes());

    vec![
        ("webhook-id".to_string(), msg_id),
        ("webhook-timestamp".to_string(), timestamp),
        ("webhook-signature".to_string(), format!("v1,{signature}")),
    ]
}

/// Identity delivery headers with a signature that cannot match any body
pub fn forged_identity_webhook_headers() -> Vec<(String, String)> {
    vec![
        ("webhook-id".to_string(), format!("msg_{}", unique_suffix())),
        (
            "webhook-timestamp".to_string(),
            Utc::now().timestamp().to_string(),
        ),
        ("webhook-signature".to_string(), "v1,Zm9yZ2Vk".to_string()),
    ]
}

// ============================================================================
// Billing webhook fixtures
// ============================================================================

/// Subscription event body for the given user and price
pub fn subscription_event(
    kind: &str,
    subscription_id: &str,
    user_external_id: &str,
    price_id: &str,
) -> String {
    json!({
        "type": kind,
        "data": {
            "object": {
                "id": subscription_id,
                "customer": format!("cus_{}", unique_suffix()),
                "metadata": { "userId": user_external_id },
                "items": { "data": [ { "price": { "id": price_id } } ] },
                "current_period_end": (Utc::now() + Duration::days(30)).timestamp(),
                "cancel_at_period_end": false
            }
        }
    })
    .to_string()
}

/// `customer.subscription.deleted` event body
pub fn subscription_deleted_event(subscription_id: &str) -> String {
    json!({
        "type": "customer.subscription.deleted",
        "data": { "object": { "id": subscription_id } }
    })
    .to_string()
}

/// Sign a billing webhook body, returning the signature header
pub fn billing_webhook_headers(body: &str) -> Vec<(String, String)> {
    let verifier = BillingWebhookVerifier::new(TEST_BILLING_WEBHOOK_SECRET);
    let timestamp = Utc::now().timestamp();
    let signature = verifier.sign(timestamp, body.as_bytes());

    vec![(
        "stripe-signature".to_string(),
        format!("t={timestamp},v1={signature}"),
    )]
}

/// Billing signature header that cannot match any body
pub fn forged_billing_webhook_headers() -> Vec<(String, String)> {
    vec![(
        "stripe-signature".to_string(),
        format!("t={},v1=deadbeef", Utc::now().timestamp()),
    )]
}

// ============================================================================
// API response bodies
// ============================================================================

/// Current user response
#[derive(Debug, Deserialize)]
pub struct CurrentUserBody {
    pub id: String,
    pub external_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// User count response
#[derive(Debug, Deserialize)]
pub struct UserCountBody {
    pub count: i64,
}

/// Resume response
#[derive(Debug, Deserialize)]
pub struct ResumeBody {
    pub id: String,
    pub title: Option<String>,
    pub job_title: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub color_hex: String,
    pub border_style: String,
}

/// Subscription level response
#[derive(Debug, Deserialize)]
pub struct SubscriptionLevelBody {
    pub level: String,
    pub cancel_at_period_end: bool,
}

/// Customer-portal session response
#[derive(Debug, Deserialize)]
pub struct PortalBody {
    pub url: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
