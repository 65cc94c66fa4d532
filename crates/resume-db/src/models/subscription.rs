//! Subscription database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for subscriptions table
#[derive(Debug, Clone, FromRow)]
pub struct SubscriptionModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub customer_id: String,
    pub subscription_id: String,
    pub price_id: String,
    pub current_period_end: DateTime<Utc>,
    pub cancel_at_period_end: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
