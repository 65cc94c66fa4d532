//! Resume entity - a user-owned document assembled from structured sections

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default accent color applied to new resumes
pub const DEFAULT_COLOR_HEX: &str = "#000000";

/// Border style for rendered resume photos and accents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Squircle,
    Circle,
    Square,
}

impl BorderStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Squircle => "squircle",
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }

    /// Parse a border style string, falling back to the default for unknown values
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "circle" => Self::Circle,
            "square" => Self::Square,
            _ => Self::Squircle,
        }
    }
}

/// A single work-experience entry.
///
/// Every field is optional: entries may be partially filled in by the user or
/// partially extracted from generated text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single education entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Resume entity owned by a single user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
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
    pub skills: Vec<String>,
    pub work_experiences: Vec<WorkExperience>,
    pub educations: Vec<Education>,
    pub color_hex: String,
    pub border_style: BorderStyle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resume {
    /// Create an empty resume for a user
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: None,
            description: None,
            photo_url: None,
            first_name: None,
            last_name: None,
            job_title: None,
            city: None,
            country: None,
            phone: None,
            email: None,
            summary: None,
            skills: Vec::new(),
            work_experiences: Vec::new(),
            educations: Vec::new(),
            color_hex: DEFAULT_COLOR_HEX.to_string(),
            border_style: BorderStyle::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the resume belongs to the given user
    #[must_use]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
