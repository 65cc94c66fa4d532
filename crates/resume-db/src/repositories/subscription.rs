//! PostgreSQL implementation of SubscriptionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use resume_core::entities::Subscription;
use resume_core::traits::{RepoResult, SubscriptionRepository};

use crate::models::SubscriptionModel;

use super::error::map_db_error;

const SUBSCRIPTION_COLUMNS: &str = "id, user_id, customer_id, subscription_id, price_id, \
     current_period_end, cancel_at_period_end, created_at, updated_at";

/// PostgreSQL implementation of SubscriptionRepository
#[derive(Clone)]
pub struct PgSubscriptionRepository {
    pool: PgPool,
}

impl PgSubscriptionRepository {
    /// Create a new PgSubscriptionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptionRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<Subscription>> {
        let result = sqlx::query_as::<_, SubscriptionModel>(&format!(
            "SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Subscription::from))
    }

    #[instrument(skip(self, subscription))]
    async fn upsert(&self, subscription: &Subscription) -> RepoResult<()> {
        // One subscription row per user; webhook redelivery overwrites in place
        sqlx::query(
            r"
            INSERT INTO subscriptions (
                id, user_id, customer_id, subscription_id, price_id,
                current_period_end, cancel_at_period_end, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id) DO UPDATE
            SET customer_id = EXCLUDED.customer_id,
                subscription_id = EXCLUDED.subscription_id,
                price_id = EXCLUDED.price_id,
                current_period_end = EXCLUDED.current_period_end,
                cancel_at_period_end = EXCLUDED.cancel_at_period_end,
                updated_at = NOW()
            ",
        )
        .bind(subscription.id)
        .bind(subscription.user_id)
        .bind(&subscription.customer_id)
        .bind(&subscription.subscription_id)
        .bind(&subscription.price_id)
        .bind(subscription.current_period_end)
        .bind(subscription.cancel_at_period_end)
        .bind(subscription.created_at)
        .bind(subscription.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_subscription_id(&self, subscription_id: &str) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE subscription_id = $1")
            .bind(subscription_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
