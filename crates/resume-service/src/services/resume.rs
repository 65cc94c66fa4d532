//! Resume service
//!
//! CRUD over resumes with ownership checks and per-tier creation caps.

use resume_core::entities::{BorderStyle, Resume, DEFAULT_COLOR_HEX};
use resume_core::error::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateResumeRequest, ResumeResponse, UpdateResumeRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::subscription::SubscriptionService;
use super::user::UserService;

/// Resume service
pub struct ResumeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ResumeService<'a> {
    /// Create a new ResumeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the caller's resumes, most recently updated first
    #[instrument(skip(self))]
    pub async fn list_resumes(&self, external_id: &str) -> ServiceResult<Vec<ResumeResponse>> {
        let user = UserService::new(self.ctx).get_user_entity(external_id).await?;
        let resumes = self.ctx.resume_repo().find_by_user(user.id).await?;
        Ok(resumes.iter().map(ResumeResponse::from).collect())
    }

    /// Fetch one of the caller's resumes
    #[instrument(skip(self))]
    pub async fn get_resume(
        &self,
        external_id: &str,
        resume_id: Uuid,
    ) -> ServiceResult<ResumeResponse> {
        let resume = self.get_owned(external_id, resume_id).await?;
        Ok(ResumeResponse::from(&resume))
    }

    /// Create a resume, subject to the caller's tier cap
    #[instrument(skip(self, request))]
    pub async fn create_resume(
        &self,
        external_id: &str,
        request: CreateResumeRequest,
    ) -> ServiceResult<ResumeResponse> {
        let user = UserService::new(self.ctx).get_user_entity(external_id).await?;

        let level = SubscriptionService::new(self.ctx).level_for_user(&user).await?;
        let current = self.ctx.resume_repo().count_by_user(user.id).await?;
        let current = usize::try_from(current).unwrap_or(usize::MAX);
        if !level.can_create_resume(current) {
            let max = level.max_resumes().unwrap_or(usize::MAX);
            return Err(DomainError::ResumeLimitReached { max }.into());
        }

        let mut resume = Resume::new(user.id);
        apply_request(&mut resume, request);
        self.ctx.resume_repo().create(&resume).await?;

        info!(resume_id = %resume.id, user_id = %user.id, "Resume created");
        Ok(ResumeResponse::from(&resume))
    }

    /// Replace a resume's content with the submitted editor state
    #[instrument(skip(self, request))]
    pub async fn update_resume(
        &self,
        external_id: &str,
        resume_id: Uuid,
        request: UpdateResumeRequest,
    ) -> ServiceResult<ResumeResponse> {
        let mut resume = self.get_owned(external_id, resume_id).await?;

        apply_request(&mut resume, request);
        self.ctx.resume_repo().update(&resume).await?;

        info!(resume_id = %resume.id, "Resume updated");
        Ok(ResumeResponse::from(&resume))
    }

    /// Delete one of the caller's resumes
    #[instrument(skip(self))]
    pub async fn delete_resume(&self, external_id: &str, resume_id: Uuid) -> ServiceResult<()> {
        let resume = self.get_owned(external_id, resume_id).await?;
        self.ctx.resume_repo().delete(resume.id).await?;

        info!(resume_id = %resume.id, "Resume deleted");
        Ok(())
    }

    /// Resolve a resume and verify the caller owns it.
    ///
    /// Another user's resume reads as not-found rather than forbidden, so
    /// resume ids are not probeable.
    async fn get_owned(&self, external_id: &str, resume_id: Uuid) -> ServiceResult<Resume> {
        let user = UserService::new(self.ctx).get_user_entity(external_id).await?;

        let resume = self
            .ctx
            .resume_repo()
            .find_by_id(resume_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Resume", resume_id.to_string()))?;

        if !resume.is_owned_by(user.id) {
            return Err(ServiceError::not_found("Resume", resume_id.to_string()));
        }

        Ok(resume)
    }
}

/// Overwrite a resume's content fields from the request
fn apply_request(resume: &mut Resume, request: CreateResumeRequest) {
    resume.title = request.title;
    resume.description = request.description;
    resume.photo_url = request.photo_url;
    resume.first_name = request.first_name;
    resume.last_name = request.last_name;
    resume.job_title = request.job_title;
    resume.city = request.city;
    resume.country = request.country;
    resume.phone = request.phone;
    resume.email = request.email;
    resume.summary = request.summary;
    resume.skills = request.skills;
    resume.work_experiences = request.work_experiences;
    resume.educations = request.educations;
    resume.color_hex = request
        .color_hex
        .unwrap_or_else(|| DEFAULT_COLOR_HEX.to_string());
    resume.border_style = request
        .border_style
        .as_deref()
        .map_or(BorderStyle::default(), BorderStyle::parse_or_default);
}
