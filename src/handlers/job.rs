use crate::error::AppError;
use crate::models::*;
use crate::services::JobService;
use crate::utils::AuthenticatedAccount;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, ResponseError, Result, web};

fn get_account_from_request(req: &HttpRequest) -> Option<AuthenticatedAccount> {
    req.extensions().get::<AuthenticatedAccount>().cloned()
}

#[utoipa::path(
    post,
    path = "/job/post",
    tag = "job",
    request_body = PostJobRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Job posted; candidates notified", body = PostJobResponse),
        (status = 400, description = "Validation failed or token missing", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Posting account not found", body = ErrorResponse)
    )
)]
pub async fn post_job(
    job_service: web::Data<JobService>,
    req: HttpRequest,
    request: web::Json<PostJobRequest>,
) -> Result<HttpResponse> {
    let Some(account) = get_account_from_request(&req) else {
        return Ok(AppError::MissingToken.error_response());
    };

    match job_service.post_job(&account, request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Created().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn job_health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hi from job router")
}

pub fn job_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/job")
            .route("/job-health", web::get().to(job_health))
            .route("/post", web::post().to(post_job)),
    );
}
