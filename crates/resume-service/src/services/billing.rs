//! Billing service
//!
//! Hands paying customers off to the billing provider's hosted portal.

use tracing::{info, instrument};

use resume_core::error::DomainError;

use crate::dto::PortalSessionResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::user::UserService;

/// Billing service
pub struct BillingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BillingService<'a> {
    /// Create a new BillingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a customer-portal session for the caller.
    ///
    /// Requires an on-record subscription; free users have no billing
    /// customer to manage.
    #[instrument(skip(self))]
    pub async fn create_portal_session(
        &self,
        external_id: &str,
    ) -> ServiceResult<PortalSessionResponse> {
        let user = UserService::new(self.ctx).get_user_entity(external_id).await?;

        let subscription = self
            .ctx
            .subscription_repo()
            .find_by_user(user.id)
            .await?
            .ok_or(DomainError::SubscriptionNotFound)?;

        let url = self
            .ctx
            .billing()
            .create_portal_session(&subscription.customer_id)
            .await?;

        info!(user_id = %user.id, "Customer portal session created");
        Ok(PortalSessionResponse { url })
    }
}
