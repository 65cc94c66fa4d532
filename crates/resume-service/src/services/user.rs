//! User service
//!
//! Read-side user operations for authenticated sessions.

use resume_core::entities::User;
use tracing::instrument;

use crate::dto::{CurrentUserResponse, UserCountResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get current authenticated user (full profile)
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, external_id: &str) -> ServiceResult<CurrentUserResponse> {
        let user = self.get_user_entity(external_id).await?;
        Ok(CurrentUserResponse::from(&user))
    }

    /// Resolve the local account for a session's external id
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, external_id: &str) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_external_id(external_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", external_id))
    }

    /// Total number of registered users
    #[instrument(skip(self))]
    pub async fn get_user_count(&self) -> ServiceResult<UserCountResponse> {
        let count = self.ctx.user_repo().count().await?;
        Ok(UserCountResponse { count })
    }
}
