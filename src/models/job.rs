use crate::entities::{ExperienceLevel, job_posting_entity as job_postings};
use crate::error::FieldIssue;
use crate::utils::{parse_end_date, request_issues};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail};

const EXPERIENCE_LEVEL_MESSAGE: &str =
    "Expected one of 'Entry', 'Mid-level', 'Senior', 'Executive'";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PostJobRequest {
    #[schema(example = "Backend Engineer")]
    #[validate(length(min = 1, message = "Job title is required"))]
    pub job_title: String,
    #[schema(example = "Build and run our hiring APIs.")]
    #[validate(length(min = 10, message = "Job description must be at least 10 characters"))]
    pub job_description: String,
    #[schema(value_type = ExperienceLevel)]
    pub experience_level: String,
    pub candidates: Option<Vec<String>>,
    #[schema(example = "2025-12-31")]
    pub end_date: String,
}

/// Typed values of a posting request that passed every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedJob {
    pub experience_level: ExperienceLevel,
    pub end_date: DateTime<Utc>,
}

impl PostJobRequest {
    /// Runs every rule at once: the derive rules, each candidate address,
    /// the experience level and the end date.
    pub fn check(&self) -> Result<CheckedJob, Vec<FieldIssue>> {
        let mut issues = request_issues(self);

        for (i, email) in self.candidate_list().iter().enumerate() {
            if !email.validate_email() {
                issues.push(FieldIssue {
                    field: format!("candidates[{i}]"),
                    message: "Invalid email address".to_string(),
                });
            }
        }

        let experience_level = self.experience_level.parse::<ExperienceLevel>().ok();
        if experience_level.is_none() {
            issues.push(FieldIssue {
                field: "experienceLevel".to_string(),
                message: EXPERIENCE_LEVEL_MESSAGE.to_string(),
            });
        }

        let end_date = parse_end_date(&self.end_date);
        if end_date.is_none() {
            issues.push(FieldIssue {
                field: "endDate".to_string(),
                message: "Invalid date format".to_string(),
            });
        }

        match (experience_level, end_date) {
            (Some(experience_level), Some(end_date)) if issues.is_empty() => Ok(CheckedJob {
                experience_level,
                end_date,
            }),
            _ => {
                issues.sort_by(|a, b| a.field.cmp(&b.field));
                Err(issues)
            }
        }
    }

    pub fn candidate_list(&self) -> &[String] {
        self.candidates.as_deref().unwrap_or_default()
    }
}

/// Outcome of one candidate notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmailResult {
    pub email: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingResponse {
    pub id: i32,
    pub account_id: i32,
    pub job_title: String,
    pub job_description: String,
    pub experience_level: ExperienceLevel,
    pub candidates: Vec<String>,
    pub end_date: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostJobResponse {
    pub success: bool,
    pub message: String,
    pub job_posting: JobPostingResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_results: Option<Vec<EmailResult>>,
}

impl From<job_postings::Model> for JobPostingResponse {
    fn from(job: job_postings::Model) -> Self {
        let candidates = job.candidate_emails();
        Self {
            id: job.id,
            account_id: job.account_id,
            job_title: job.job_title,
            job_description: job.job_description,
            experience_level: job.experience_level,
            candidates,
            end_date: job.end_date,
            created_at: job.created_at,
        }
    }
}
