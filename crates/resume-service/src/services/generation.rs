//! Generation service
//!
//! AI-assisted drafting of resume content. Both operations are gated on a
//! paying tier. Summary text is returned verbatim; work-experience entries
//! are decoded from the model's line-structured reply on a best-effort basis.

use std::fmt::Write as _;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use resume_core::entities::WorkExperience;
use resume_core::error::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    GenerateSummaryRequest, GenerateWorkExperienceRequest, GeneratedWorkExperienceResponse,
    SummaryResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::subscription::SubscriptionService;
use super::user::UserService;

const SUMMARY_SYSTEM_INSTRUCTION: &str = "You are a job resume generator AI. Your task is to \
     write a professional introduction summary for a resume given the user's provided data. Only \
     return the summary and do not include any other information in the response. Keep it concise \
     and professional.";

const WORK_EXPERIENCE_SYSTEM_INSTRUCTION: &str = "You are a job resume generator AI. Your task \
     is to generate a single work experience entry based on the user input. Your response must \
     adhere to the following structure. You can omit fields if they can't be inferred from the \
     provided data, but don't add any new ones.\n\n\
     Job title: <job title>\n\
     Company: <company name>\n\
     Start date: <format: YYYY-MM-DD> (only if provided)\n\
     End date: <format: YYYY-MM-DD> (only if provided)\n\
     Description: <an optimized description in bullet format, might be inferred from the job \
     title>";

static RE_POSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Job title: (.*)").expect("valid regex")
});
static RE_COMPANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Company: (.*)").expect("valid regex")
});
static RE_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Description:(.*)").expect("valid regex")
});
static RE_START_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Start date: (\d{4}-\d{2}-\d{2})").expect("valid regex")
});
static RE_END_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"End date: (\d{4}-\d{2}-\d{2})").expect("valid regex")
});

/// Generation service
pub struct GenerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GenerationService<'a> {
    /// Create a new GenerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Generate a professional summary from the resume's structured sections
    #[instrument(skip(self, request))]
    pub async fn generate_summary(
        &self,
        external_id: &str,
        request: GenerateSummaryRequest,
    ) -> ServiceResult<SummaryResponse> {
        self.require_ai_access(external_id).await?;

        let user_message = summary_user_message(&request);
        let summary = self
            .ctx
            .generator()
            .generate(SUMMARY_SYSTEM_INSTRUCTION, &user_message)
            .await?;

        info!("Resume summary generated");
        Ok(SummaryResponse { summary })
    }

    /// Generate a structured work-experience entry from a free-text
    /// description
    #[instrument(skip(self, request))]
    pub async fn generate_work_experience(
        &self,
        external_id: &str,
        request: GenerateWorkExperienceRequest,
    ) -> ServiceResult<GeneratedWorkExperienceResponse> {
        self.require_ai_access(external_id).await?;

        let user_message = format!(
            "Please provide a work experience entry from this description:\n{}",
            request.description
        );
        let text = self
            .ctx
            .generator()
            .generate(WORK_EXPERIENCE_SYSTEM_INSTRUCTION, &user_message)
            .await?;

        info!("Work experience entry generated");
        Ok(GeneratedWorkExperienceResponse {
            work_experience: parse_work_experience(&text),
        })
    }

    async fn require_ai_access(&self, external_id: &str) -> ServiceResult<()> {
        let user = UserService::new(self.ctx).get_user_entity(external_id).await?;
        let level = SubscriptionService::new(self.ctx).level_for_user(&user).await?;
        if !level.can_use_ai_tools() {
            return Err(DomainError::UpgradeRequired.into());
        }
        Ok(())
    }
}

/// Render the summary prompt from the resume's sections
fn summary_user_message(request: &GenerateSummaryRequest) -> String {
    let mut msg = String::new();
    let _ = writeln!(msg, "Please generate a professional resume summary from this data:");
    let _ = writeln!(msg);
    let _ = writeln!(msg, "Job title: {}", opt(request.job_title.as_deref()));
    let _ = writeln!(msg);
    let _ = writeln!(msg, "Work experience:");
    for exp in &request.work_experiences {
        let _ = writeln!(msg);
        let _ = writeln!(
            msg,
            "Position: {} at {} from {} to {}",
            opt(exp.position.as_deref()),
            opt(exp.company.as_deref()),
            opt_date(exp.start_date),
            exp.end_date
                .map_or_else(|| "Present".to_string(), |d| d.to_string()),
        );
        let _ = writeln!(msg);
        let _ = writeln!(msg, "Description:");
        let _ = writeln!(msg, "{}", opt(exp.description.as_deref()));
    }
    let _ = writeln!(msg);
    let _ = writeln!(msg, "Education:");
    for edu in &request.educations {
        let _ = writeln!(msg);
        let _ = writeln!(
            msg,
            "Degree: {} at {} from {} to {}",
            opt(edu.degree.as_deref()),
            opt(edu.school.as_deref()),
            opt_date(edu.start_date),
            opt_date(edu.end_date),
        );
    }
    let _ = writeln!(msg);
    let _ = writeln!(msg, "Skills:");
    let _ = write!(msg, "{}", request.skills.join(", "));
    msg
}

fn opt(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "N/A",
    }
}

fn opt_date(value: Option<NaiveDate>) -> String {
    value.map_or_else(|| "N/A".to_string(), |d| d.to_string())
}

/// Decode a work-experience entry from line-structured generated text.
///
/// Fields the model omitted, or rendered in an unexpected shape, come back
/// absent rather than failing the call.
fn parse_work_experience(text: &str) -> WorkExperience {
    let capture = |re: &Regex| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
    };
    let capture_date = |re: &Regex| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok())
    };

    WorkExperience {
        position: capture(&RE_POSITION),
        company: capture(&RE_COMPANY),
        start_date: capture_date(&RE_START_DATE),
        end_date: capture_date(&RE_END_DATE),
        description: capture(&RE_DESCRIPTION),
    }
}
