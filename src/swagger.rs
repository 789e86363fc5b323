use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::ExperienceLevel;
use crate::error::FieldIssue;
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::user::signup,
        handlers::user::verify,
        handlers::user::signin,
        handlers::job::post_job,
    ),
    components(
        schemas(
            SignupRequest,
            SignupResponse,
            VerifyRequest,
            VerifyResponse,
            SigninRequest,
            SigninResponse,
            AccountProfile,
            PostJobRequest,
            PostJobResponse,
            JobPostingResponse,
            EmailResult,
            ExperienceLevel,
            ErrorResponse,
            ApiError,
            FieldIssue,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "user", description = "Company signup, verification and signin"),
        (name = "job", description = "Job postings"),
    ),
    info(
        title = "Job Board API",
        version = "1.0.0",
        description = "Job board backend REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
