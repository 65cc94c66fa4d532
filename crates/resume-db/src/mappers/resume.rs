//! Resume entity <-> model mapper

use resume_core::entities::{BorderStyle, Resume};

use crate::models::ResumeModel;

/// Convert ResumeModel to Resume entity.
///
/// JSONB section columns that fail to decode are treated as empty rather than
/// failing the whole row.
impl From<ResumeModel> for Resume {
    fn from(model: ResumeModel) -> Self {
        Resume {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            photo_url: model.photo_url,
            first_name: model.first_name,
            last_name: model.last_name,
            job_title: model.job_title,
            city: model.city,
            country: model.country,
            phone: model.phone,
            email: model.email,
            summary: model.summary,
            skills: serde_json::from_value(model.skills).unwrap_or_default(),
            work_experiences: serde_json::from_value(model.work_experiences).unwrap_or_default(),
            educations: serde_json::from_value(model.educations).unwrap_or_default(),
            color_hex: model.color_hex,
            border_style: BorderStyle::parse_or_default(&model.border_style),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Resume entity prepared for database insertion/update.
///
/// Section lists are serialized to JSONB values up front.
pub struct ResumeRecord<'a> {
    pub resume: &'a Resume,
    pub skills: serde_json::Value,
    pub work_experiences: serde_json::Value,
    pub educations: serde_json::Value,
    pub border_style: &'static str,
}

impl<'a> ResumeRecord<'a> {
    pub fn new(resume: &'a Resume) -> Self {
        Self {
            resume,
            skills: serde_json::json!(resume.skills),
            work_experiences: serde_json::json!(resume.work_experiences),
            educations: serde_json::json!(resume.educations),
            border_style: resume.border_style.as_str(),
        }
    }
}
