//! In-memory mailer used by tests and local runs without SMTP.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::external::Mailer;

/// A message captured by [`MockMailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<SentMail>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send to `address` fails from now on.
    pub fn fail_for(&self, address: &str) {
        if let Ok(mut failing) = self.failing.lock() {
            failing.insert(address.to_string());
        }
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn sent_to(&self, address: &str) -> Vec<SentMail> {
        self.sent().into_iter().filter(|m| m.to == address).collect()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> AppResult<String> {
        let should_fail = self
            .failing
            .lock()
            .map(|f| f.contains(to))
            .unwrap_or(false);
        if should_fail {
            return Err(AppError::MailError(format!("mailbox unavailable: {to}")));
        }

        self.sent
            .lock()
            .map_err(|_| AppError::InternalError("mock mailer poisoned".to_string()))?
            .push(SentMail {
                to: to.to_string(),
                subject: subject.to_string(),
                html: html.to_string(),
            });
        Ok("250 OK: queued".to_string())
    }
}
