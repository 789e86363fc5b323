use crate::config::SmtpConfig;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Outbound HTML mail.
///
/// On success returns the provider's response line, which is passed back to
/// API callers as delivery info.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> AppResult<String>;
}

#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> AppResult<Self> {
        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        }
        .map_err(|e| AppError::ConfigError(format!("Invalid SMTP host {}: {e}", config.host)))?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from = config.from_address().parse::<Mailbox>().map_err(|e| {
            AppError::ConfigError(format!(
                "Invalid sender address {}: {e}",
                config.from_address()
            ))
        })?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> AppResult<String> {
        let recipient = to
            .parse::<Mailbox>()
            .map_err(|e| AppError::MailError(format!("Invalid recipient {to}: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())
            .map_err(|e| AppError::MailError(format!("Failed to build message: {e}")))?;

        log::info!("Sending mail to {to}");

        match self.transport.send(message).await {
            Ok(response) => {
                let info = format!(
                    "{} {}",
                    response.code(),
                    response
                        .message()
                        .map(|line| line.to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                );
                log::info!("Mail sent to {to}: {info}");
                Ok(info)
            }
            Err(e) => {
                log::error!("Mail to {to} failed: {e}");
                Err(AppError::MailError(e.to_string()))
            }
        }
    }
}
