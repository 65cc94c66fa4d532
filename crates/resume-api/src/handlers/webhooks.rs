//! Webhook handlers
//!
//! Inbound events from the identity and billing providers. Both endpoints
//! verify the delivery signature over the raw body before parsing, and
//! return non-2xx on any failure so the sender retries.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use chrono::DateTime;
use resume_common::{AppError, WebhookError};
use resume_core::entities::{NewUser, UserProfile, UserRole};
use resume_core::error::DomainError;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use resume_service::services::{
    BillingEvent, ProvisioningService, SubscriptionService, SubscriptionUpdate,
};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Identity provider
// ============================================================================

#[derive(Debug, Deserialize)]
struct IdentityEvent {
    #[serde(rename = "type")]
    kind: String,
    data: IdentityUserData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IdentityUserData {
    id: String,
    email_addresses: Vec<EmailAddress>,
    primary_email_address_id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    image_url: Option<String>,
    public_metadata: PublicMetadata,
}

#[derive(Debug, Deserialize)]
struct EmailAddress {
    id: String,
    email_address: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PublicMetadata {
    role: Option<String>,
}

/// Parsed identity event, ready for dispatch
#[derive(Debug)]
enum IdentityAction {
    Created(NewUser),
    Updated { external_id: String, profile: UserProfile },
    Deleted { external_id: String },
}

/// Handle an identity-provider webhook delivery
///
/// POST /api/webhooks/identity
#[instrument(skip_all)]
pub async fn identity_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<StatusCode> {
    let msg_id = required_header(&headers, "webhook-id")?;
    let timestamp = required_header(&headers, "webhook-timestamp")?;
    let signatures = required_header(&headers, "webhook-signature")?;
    state
        .identity_webhooks()
        .verify(msg_id, timestamp, signatures, &body)?;

    let event: IdentityEvent = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedWebhookPayload(e.to_string()))?;

    let Some(action) = identity_action(event)? else {
        return Ok(StatusCode::NO_CONTENT);
    };

    let service = ProvisioningService::new(state.service_context());
    match action {
        IdentityAction::Created(new_user) => {
            let user = service.create_user(new_user).await?;
            info!(user_id = %user.id, "Webhook: user created");
        }
        IdentityAction::Updated {
            external_id,
            profile,
        } => {
            let user = service.update_user(&external_id, profile).await?;
            info!(user_id = %user.id, "Webhook: user updated");
        }
        IdentityAction::Deleted { external_id } => {
            service.delete_user(&external_id).await?;
            info!(external_id = %external_id, "Webhook: user deleted");
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Map a verified identity event onto an action.
///
/// Created/updated payloads must carry a primary email address and a
/// non-empty name. Unknown event types are ignored.
fn identity_action(event: IdentityEvent) -> ApiResult<Option<IdentityAction>> {
    let data = event.data;
    match event.kind.as_str() {
        "user.created" | "user.updated" => {
            let email = data
                .email_addresses
                .iter()
                .find(|e| Some(&e.id) == data.primary_email_address_id.as_ref())
                .map(|e| e.email_address.clone())
                .ok_or(DomainError::MissingEmail)?;

            let name = format!(
                "{} {}",
                data.first_name.as_deref().unwrap_or(""),
                data.last_name.as_deref().unwrap_or(""),
            );
            let name = name.trim();
            if name.is_empty() {
                return Err(DomainError::MissingName.into());
            }

            if event.kind == "user.created" {
                // New accounts always start with the default role
                Ok(Some(IdentityAction::Created(NewUser::from_display_name(
                    data.id,
                    email,
                    name,
                    data.image_url,
                    UserRole::User,
                ))))
            } else {
                let role = data
                    .public_metadata
                    .role
                    .as_deref()
                    .map_or(UserRole::User, UserRole::parse_or_default);
                Ok(Some(IdentityAction::Updated {
                    external_id: data.id,
                    profile: UserProfile::from_display_name(email, name, data.image_url, role),
                }))
            }
        }
        "user.deleted" => Ok(Some(IdentityAction::Deleted {
            external_id: data.id,
        })),
        other => {
            debug!(kind = %other, "Ignoring unhandled identity event");
            Ok(None)
        }
    }
}

// ============================================================================
// Billing provider
// ============================================================================

#[derive(Debug, Deserialize)]
struct BillingEventPayload {
    #[serde(rename = "type")]
    kind: String,
    data: BillingEventData,
}

#[derive(Debug, Deserialize)]
struct BillingEventData {
    object: BillingSubscription,
}

#[derive(Debug, Deserialize)]
struct BillingSubscription {
    id: String,
    #[serde(default)]
    customer: String,
    #[serde(default)]
    metadata: SubscriptionMetadata,
    #[serde(default)]
    items: SubscriptionItems,
    #[serde(default)]
    current_period_end: i64,
    #[serde(default)]
    cancel_at_period_end: bool,
}

#[derive(Debug, Default, Deserialize)]
struct SubscriptionMetadata {
    #[serde(default, alias = "userId")]
    user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SubscriptionItems {
    #[serde(default)]
    data: Vec<SubscriptionItem>,
}

#[derive(Debug, Deserialize)]
struct SubscriptionItem {
    price: SubscriptionPrice,
}

#[derive(Debug, Deserialize)]
struct SubscriptionPrice {
    id: String,
}

/// Handle a billing-provider webhook delivery
///
/// POST /api/webhooks/billing
#[instrument(skip_all)]
pub async fn billing_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<StatusCode> {
    let signature = required_header(&headers, "stripe-signature")?;
    state.billing_webhooks().verify(signature, &body)?;

    let event: BillingEventPayload = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedWebhookPayload(e.to_string()))?;

    let Some(action) = billing_action(event)? else {
        return Ok(StatusCode::NO_CONTENT);
    };

    SubscriptionService::new(state.service_context())
        .apply_event(action)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Map a verified billing event onto a [`BillingEvent`].
///
/// Created and updated subscriptions must name the local user in their
/// metadata and carry at least one priced item. Unknown event types are
/// ignored.
fn billing_action(event: BillingEventPayload) -> ApiResult<Option<BillingEvent>> {
    let subscription = event.data.object;
    match event.kind.as_str() {
        "customer.subscription.created" | "customer.subscription.updated" => {
            let user_external_id = subscription.metadata.user_id.ok_or_else(|| {
                AppError::MalformedWebhookPayload("subscription metadata has no user id".into())
            })?;
            let price_id = subscription
                .items
                .data
                .first()
                .map(|item| item.price.id.clone())
                .ok_or_else(|| {
                    AppError::MalformedWebhookPayload("subscription has no priced items".into())
                })?;
            let current_period_end = DateTime::from_timestamp(subscription.current_period_end, 0)
                .ok_or_else(|| {
                    AppError::MalformedWebhookPayload("invalid current_period_end".into())
                })?;

            Ok(Some(BillingEvent::SubscriptionChanged(SubscriptionUpdate {
                user_external_id,
                customer_id: subscription.customer,
                subscription_id: subscription.id,
                price_id,
                current_period_end,
                cancel_at_period_end: subscription.cancel_at_period_end,
            })))
        }
        "customer.subscription.deleted" => Ok(Some(BillingEvent::SubscriptionDeleted {
            subscription_id: subscription.id,
        })),
        other => {
            debug!(kind = %other, "Ignoring unhandled billing event");
            Ok(None)
        }
    }
}

fn required_header<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str, ApiError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::from(WebhookError::MissingHeader(name)))
}
