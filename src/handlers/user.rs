use crate::models::*;
use crate::services::AuthService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/user/signup",
    tag = "user",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created, verification code sent", body = SignupResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Email already taken", body = ErrorResponse),
        (status = 500, description = "Verification email could not be sent", body = ErrorResponse)
    )
)]
pub async fn signup(
    auth_service: web::Data<AuthService>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse> {
    match auth_service.signup(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Created().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/user/verify",
    tag = "user",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Account verified", body = VerifyResponse),
        (status = 400, description = "Invalid or expired OTP", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn verify(
    auth_service: web::Data<AuthService>,
    request: web::Json<VerifyRequest>,
) -> Result<HttpResponse> {
    match auth_service.verify(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/user/signin",
    tag = "user",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signed in", body = SigninResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Unknown email or wrong password", body = ErrorResponse),
        (status = 403, description = "Account not verified", body = ErrorResponse)
    )
)]
pub async fn signin(
    auth_service: web::Data<AuthService>,
    request: web::Json<SigninRequest>,
) -> Result<HttpResponse> {
    match auth_service.signin(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn user_health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hi there from userRouter")
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .route("/health", web::get().to(user_health))
            .route("/signup", web::post().to(signup))
            .route("/verify", web::post().to(verify))
            .route("/signin", web::post().to(signin)),
    );
}
