use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

pub type AppResult<T> = Result<T, AppError>;

/// One failing field of a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldIssue>),

    #[error("Invalid or expired OTP")]
    InvalidOtp,

    #[error("Missing access token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Auth error: {0}")]
    AuthError(String),

    #[error("Account not verified")]
    NotVerified,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Mail error: {0}")]
    MailError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] askama::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Validation failed".to_string(),
            ),
            AppError::InvalidOtp => (
                StatusCode::BAD_REQUEST,
                "INVALID_OTP",
                "Invalid or expired OTP".to_string(),
            ),
            AppError::MissingToken => (
                StatusCode::BAD_REQUEST,
                "MISSING_TOKEN",
                "Please login".to_string(),
            ),
            AppError::InvalidToken => (
                StatusCode::FORBIDDEN,
                "INVALID_TOKEN",
                "Invalid token".to_string(),
            ),
            AppError::AuthError(msg) => (StatusCode::UNAUTHORIZED, "AUTH_ERROR", msg.clone()),
            AppError::NotVerified => (
                StatusCode::FORBIDDEN,
                "NOT_VERIFIED",
                "Please verify your email before signing in".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::MailError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MAIL_ERROR",
                "Failed to send verification email".to_string(),
            ),
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Database error".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error".to_string(),
            ),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = self.parts();

        if status_code.is_server_error() {
            log::error!("{self}");
        } else {
            log::warn!("{self}");
        }

        let body = match self {
            AppError::Validation(issues) => json!({
                "success": false,
                "error": {
                    "code": error_code,
                    "message": message,
                    "issues": issues
                }
            }),
            _ => json!({
                "success": false,
                "error": {
                    "code": error_code,
                    "message": message
                }
            }),
        };

        HttpResponse::build(status_code).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::InvalidOtp.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MissingToken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::NotVerified.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::AuthError("Invalid password".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Conflict("Email already taken".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NotFound("User not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MailError("smtp down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_validation_body_lists_issues() {
        let err = AppError::Validation(vec![FieldIssue {
            field: "companyEmail".into(),
            message: "Invalid email address".into(),
        }]);
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(value["error"]["issues"][0]["field"], "companyEmail");
    }

    #[actix_web::test]
    async fn test_internal_details_are_not_leaked() {
        let err = AppError::MailError("535 authentication failed for user x".into());
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();

        assert!(text.contains("Failed to send verification email"));
        assert!(!text.contains("535"));
    }
}
