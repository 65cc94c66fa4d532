//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use resume_core::entities::{Education, WorkExperience};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Resume Requests
// ============================================================================

/// Create resume request; every section is optional
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateResumeRequest {
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub photo_url: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub work_experiences: Vec<WorkExperience>,
    pub educations: Vec<Education>,

    /// Hex accent color, e.g. "#1a2b3c"
    pub color_hex: Option<String>,
    /// "squircle", "circle", or "square"
    pub border_style: Option<String>,
}

/// Update resume request; fields left out are cleared, matching the
/// save-the-whole-editor-state model of the client
pub type UpdateResumeRequest = CreateResumeRequest;

// ============================================================================
// Generation Requests
// ============================================================================

/// Input for resume-summary generation: the structured resume sections
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct GenerateSummaryRequest {
    pub job_title: Option<String>,
    pub work_experiences: Vec<WorkExperience>,
    pub educations: Vec<Education>,
    pub skills: Vec<String>,
}

/// Input for work-experience generation: a free-text description
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateWorkExperienceRequest {
    #[validate(length(min = 20, message = "Must be at least 20 characters"))]
    pub description: String,
}
