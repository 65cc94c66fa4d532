//! Provisioning service
//!
//! Drives the user lifecycle from identity-provider webhook events: admission
//! through the capacity gate, profile updates, and account removal.

use resume_core::entities::{NewUser, User, UserProfile};
use resume_core::error::DomainError;
use resume_core::traits::UserMetadata;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Provisioning service
pub struct ProvisioningService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProvisioningService<'a> {
    /// Create a new ProvisioningService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Provision a local account for a newly signed-up user.
    ///
    /// Admission runs under the capacity policy and may evict an idle
    /// account. When the gate rejects the signup, the provider-side account
    /// is deleted as compensation so the user can try again later.
    #[instrument(skip(self, new_user), fields(external_id = %new_user.external_id))]
    pub async fn create_user(&self, new_user: NewUser) -> ServiceResult<User> {
        let admission = match self
            .ctx
            .user_repo()
            .admit(&new_user, self.ctx.capacity())
            .await
        {
            Ok(admission) => admission,
            Err(err @ DomainError::UserCapacityExhausted { .. }) => {
                // The provider-side account already exists at this point.
                // Remove it so the rejected user is not left half-registered.
                if let Err(cleanup_err) = self
                    .ctx
                    .identity()
                    .delete_account(&new_user.external_id)
                    .await
                {
                    warn!(
                        external_id = %new_user.external_id,
                        error = %cleanup_err,
                        "Failed to remove provider account after rejected signup"
                    );
                }
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        };

        if let Some(evicted) = &admission.evicted {
            info!(
                evicted_external_id = %evicted.external_id,
                evicted_created_at = %evicted.created_at,
                "Evicted idle account to admit new user"
            );
        }

        self.sync_metadata(&admission.user).await;

        info!(user_id = %admission.user.id, "User provisioned");
        Ok(admission.user)
    }

    /// Apply a profile update relayed from the identity provider
    #[instrument(skip(self, profile))]
    pub async fn update_user(
        &self,
        external_id: &str,
        profile: UserProfile,
    ) -> ServiceResult<User> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_external_id(external_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", external_id))?;

        user.apply_profile(profile);
        self.ctx.user_repo().update(&user).await?;

        self.sync_metadata(&user).await;

        info!(user_id = %user.id, "User profile updated");
        Ok(user)
    }

    /// Remove the local account for a deleted provider account.
    ///
    /// Deleting an absent user is a no-op success so redelivered or
    /// out-of-order webhook events stay harmless.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, external_id: &str) -> ServiceResult<()> {
        let removed = self
            .ctx
            .user_repo()
            .delete_by_external_id(external_id)
            .await?;

        if removed {
            info!(external_id = %external_id, "User account deleted");
        } else {
            info!(external_id = %external_id, "Delete for unknown user ignored");
        }

        Ok(())
    }

    /// Mirror `{ db_id, role }` into the provider's public metadata.
    ///
    /// This cache is best-effort: a failure is logged and swallowed because
    /// the local row is already committed and the provider retries its
    /// webhooks anyway.
    async fn sync_metadata(&self, user: &User) {
        let metadata = UserMetadata {
            db_id: user.id,
            role: user.role,
        };

        if let Err(err) = self
            .ctx
            .identity()
            .sync_user_metadata(&user.external_id, &metadata)
            .await
        {
            warn!(
                external_id = %user.external_id,
                error = %err,
                "Failed to sync user metadata to identity provider"
            );
        }
    }
}
