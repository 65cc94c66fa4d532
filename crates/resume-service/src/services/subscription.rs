//! Subscription service
//!
//! Derives feature tiers from the cached billing state and applies billing
//! webhook events to the local cache.

use chrono::{DateTime, Utc};
use resume_core::entities::{Subscription, SubscriptionLevel, User};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::SubscriptionLevelResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Parsed billing webhook event
#[derive(Debug, Clone)]
pub enum BillingEvent {
    /// Subscription created or updated; replaces the cached row
    SubscriptionChanged(SubscriptionUpdate),
    /// Subscription deleted on the provider side
    SubscriptionDeleted { subscription_id: String },
}

/// Subscription fields carried by a billing webhook payload
#[derive(Debug, Clone)]
pub struct SubscriptionUpdate {
    /// External identity-provider id stashed in the subscription's metadata
    pub user_external_id: String,
    pub customer_id: String,
    pub subscription_id: String,
    pub price_id: String,
    pub current_period_end: DateTime<Utc>,
    pub cancel_at_period_end: bool,
}

/// Subscription service
pub struct SubscriptionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubscriptionService<'a> {
    /// Create a new SubscriptionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The caller's current feature tier
    #[instrument(skip(self))]
    pub async fn get_level(&self, external_id: &str) -> ServiceResult<SubscriptionLevelResponse> {
        let user = UserService::new(self.ctx).get_user_entity(external_id).await?;

        match self.ctx.subscription_repo().find_by_user(user.id).await? {
            Some(subscription) => {
                let level = self.level_of(&subscription);
                if level == SubscriptionLevel::Free {
                    Ok(SubscriptionLevelResponse::free())
                } else {
                    Ok(SubscriptionLevelResponse::paid(level, &subscription))
                }
            }
            None => Ok(SubscriptionLevelResponse::free()),
        }
    }

    /// Feature tier for a resolved user entity
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn level_for_user(&self, user: &User) -> ServiceResult<SubscriptionLevel> {
        let subscription = self.ctx.subscription_repo().find_by_user(user.id).await?;
        Ok(subscription.map_or(SubscriptionLevel::Free, |s| self.level_of(&s)))
    }

    /// Apply a billing webhook event to the local cache
    #[instrument(skip(self, event))]
    pub async fn apply_event(&self, event: BillingEvent) -> ServiceResult<()> {
        match event {
            BillingEvent::SubscriptionChanged(update) => {
                let user = self
                    .ctx
                    .user_repo()
                    .find_by_external_id(&update.user_external_id)
                    .await?
                    .ok_or_else(|| {
                        ServiceError::not_found("User", update.user_external_id.clone())
                    })?;

                let now = Utc::now();
                let subscription = Subscription {
                    id: Uuid::new_v4(),
                    user_id: user.id,
                    customer_id: update.customer_id,
                    subscription_id: update.subscription_id,
                    price_id: update.price_id,
                    current_period_end: update.current_period_end,
                    cancel_at_period_end: update.cancel_at_period_end,
                    created_at: now,
                    updated_at: now,
                };
                self.ctx.subscription_repo().upsert(&subscription).await?;
                info!(user_id = %user.id, "Subscription cache updated");
            }
            BillingEvent::SubscriptionDeleted { subscription_id } => {
                let removed = self
                    .ctx
                    .subscription_repo()
                    .delete_by_subscription_id(&subscription_id)
                    .await?;
                if removed {
                    info!(subscription_id = %subscription_id, "Subscription removed");
                } else {
                    warn!(
                        subscription_id = %subscription_id,
                        "Delete for unknown subscription ignored"
                    );
                }
            }
        }
        Ok(())
    }

    /// Tier of a cached subscription; lapsed periods fall back to free
    fn level_of(&self, subscription: &Subscription) -> SubscriptionLevel {
        if subscription.current_period_end < Utc::now() {
            return SubscriptionLevel::Free;
        }
        self.ctx.prices().level_for(&subscription.price_id)
    }
}
