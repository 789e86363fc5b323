use std::sync::Arc;

use askama::Template;
use chrono::Utc;
use futures_util::future::join_all;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::entities::{account_entity as accounts, job_posting_entity as job_postings};
use crate::error::{AppError, AppResult};
use crate::external::{JobOpportunityEmail, Mailer};
use crate::models::*;
use crate::utils::AuthenticatedAccount;

pub const POSTED_NO_CANDIDATES: &str = "Job posted successfully";
pub const POSTED_ALL_SENT: &str = "Job posted successfully and emails sent to all candidates";
pub const POSTED_SOME_FAILED: &str = "Job posted successfully, but some emails failed to send";

#[derive(Clone)]
pub struct JobService {
    pool: DatabaseConnection,
    mailer: Arc<dyn Mailer>,
}

impl JobService {
    pub fn new(pool: DatabaseConnection, mailer: Arc<dyn Mailer>) -> Self {
        Self { pool, mailer }
    }

    /// Stores a posting for the signed-in account and notifies every listed
    /// candidate. The posting is kept whatever the mail outcome.
    pub async fn post_job(
        &self,
        identity: &AuthenticatedAccount,
        request: PostJobRequest,
    ) -> AppResult<PostJobResponse> {
        let checked = request.check().map_err(AppError::Validation)?;

        let account = accounts::Entity::find_by_id(identity.account_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let candidates = request.candidate_list().to_vec();

        let job = job_postings::ActiveModel {
            account_id: Set(account.id),
            job_title: Set(request.job_title.clone()),
            job_description: Set(request.job_description.clone()),
            experience_level: Set(checked.experience_level),
            candidates: Set(serde_json::to_value(&candidates)?),
            end_date: Set(checked.end_date),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Job posting {} created by account {} with {} candidate(s)",
            job.id,
            account.id,
            candidates.len()
        );

        let email_results = if candidates.is_empty() {
            None
        } else {
            let email = JobOpportunityEmail {
                job_title: &request.job_title,
                job_description: &request.job_description,
                experience_level: checked.experience_level,
                end_date: &request.end_date,
                company_name: &account.company_name,
                sender_name: &account.name,
            };
            let subject = email.subject();
            let html = email.render()?;

            let sends = candidates
                .iter()
                .map(|candidate| self.notify_candidate(candidate, &subject, &html));
            Some(join_all(sends).await)
        };

        Ok(PostJobResponse {
            success: true,
            message: posting_message(email_results.as_deref()).to_string(),
            job_posting: JobPostingResponse::from(job),
            email_results,
        })
    }

    async fn notify_candidate(&self, candidate: &str, subject: &str, html: &str) -> EmailResult {
        match self.mailer.send_html(candidate, subject, html).await {
            Ok(info) => EmailResult {
                email: candidate.to_string(),
                success: true,
                info: Some(info),
                error: None,
            },
            Err(e) => {
                log::warn!("Candidate notification to {candidate} failed: {e}");
                EmailResult {
                    email: candidate.to_string(),
                    success: false,
                    info: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

pub fn posting_message(email_results: Option<&[EmailResult]>) -> &'static str {
    match email_results {
        None | Some([]) => POSTED_NO_CANDIDATES,
        Some(results) if results.iter().all(|r| r.success) => POSTED_ALL_SENT,
        Some(_) => POSTED_SOME_FAILED,
    }
}
