//! Subscription entity <-> model mapper

use resume_core::entities::Subscription;

use crate::models::SubscriptionModel;

/// Convert SubscriptionModel to Subscription entity
impl From<SubscriptionModel> for Subscription {
    fn from(model: SubscriptionModel) -> Self {
        Subscription {
            id: model.id,
            user_id: model.user_id,
            customer_id: model.customer_id,
            subscription_id: model.subscription_id,
            price_id: model.price_id,
            current_period_end: model.current_period_end,
            cancel_at_period_end: model.cancel_at_period_end,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
