pub mod health;
pub mod job;
pub mod user;

pub use health::health_config;
pub use job::job_config;
pub use user::user_config;

use crate::error::{AppError, FieldIssue};
use actix_web::web;

/// Missing fields are defaulted and reach the validator; what still fails
/// here (bad JSON, wrong types) is reported as a single `body` issue.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(vec![FieldIssue {
            field: "body".to_string(),
            message: format!("Invalid request body: {err}"),
        }])
        .into()
    })
}

/// Every route of the service, shared by the binary and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .configure(health_config)
        .service(
            web::scope("/api/v1")
                .configure(user_config)
                .configure(job_config),
        );
}
