//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Internal UUIDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use resume_core::entities::{
    Education, Resume, Subscription, SubscriptionLevel, User, WorkExperience,
};

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user (full profile)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub external_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            external_id: user.external_id.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            image_url: user.image_url.clone(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

/// Total registered users
#[derive(Debug, Clone, Serialize)]
pub struct UserCountResponse {
    pub count: i64,
}

// ============================================================================
// Resume Responses
// ============================================================================

/// A resume with all of its sections
#[derive(Debug, Clone, Serialize)]
pub struct ResumeResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub work_experiences: Vec<WorkExperience>,
    pub educations: Vec<Education>,
    pub color_hex: String,
    pub border_style: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Resume> for ResumeResponse {
    fn from(resume: &Resume) -> Self {
        Self {
            id: resume.id.to_string(),
            title: resume.title.clone(),
            description: resume.description.clone(),
            photo_url: resume.photo_url.clone(),
            first_name: resume.first_name.clone(),
            last_name: resume.last_name.clone(),
            job_title: resume.job_title.clone(),
            city: resume.city.clone(),
            country: resume.country.clone(),
            phone: resume.phone.clone(),
            email: resume.email.clone(),
            summary: resume.summary.clone(),
            skills: resume.skills.clone(),
            work_experiences: resume.work_experiences.clone(),
            educations: resume.educations.clone(),
            color_hex: resume.color_hex.clone(),
            border_style: resume.border_style.as_str().to_string(),
            created_at: resume.created_at,
            updated_at: resume.updated_at,
        }
    }
}

// ============================================================================
// Subscription and Billing Responses
// ============================================================================

/// The caller's current feature tier
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionLevelResponse {
    pub level: SubscriptionLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
}

impl SubscriptionLevelResponse {
    pub fn free() -> Self {
        Self {
            level: SubscriptionLevel::Free,
            current_period_end: None,
            cancel_at_period_end: false,
        }
    }

    pub fn paid(level: SubscriptionLevel, subscription: &Subscription) -> Self {
        Self {
            level,
            current_period_end: Some(subscription.current_period_end),
            cancel_at_period_end: subscription.cancel_at_period_end,
        }
    }
}

/// Customer-portal session redirect
#[derive(Debug, Clone, Serialize)]
pub struct PortalSessionResponse {
    pub url: String,
}

// ============================================================================
// Generation Responses
// ============================================================================

/// Generated resume summary, returned verbatim from the model
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Work-experience entry extracted from generated text
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedWorkExperienceResponse {
    pub work_experience: WorkExperience,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
