//! Resume database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for resumes table.
///
/// Section lists (skills, work experiences, educations) are stored as JSONB
/// columns and decoded into domain types by the mapper.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub summary: Option<String>,
    pub skills: serde_json::Value,
    pub work_experiences: serde_json::Value,
    pub educations: serde_json::Value,
    pub color_hex: String,
    pub border_style: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
