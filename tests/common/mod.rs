#![allow(dead_code)]

use std::sync::Arc;

use actix_web::body::{MessageBody, to_bytes};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use sea_orm::{ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter};
use serde_json::{Value, json};

use jobboard_backend::database::run_migrations;
use jobboard_backend::entities::account_entity as accounts;
use jobboard_backend::external::{Mailer, MockMailer};
use jobboard_backend::handlers;
use jobboard_backend::middlewares::AuthMiddleware;
use jobboard_backend::services::{AuthService, JobService};
use jobboard_backend::utils::JwtService;

pub const JWT_SECRET: &str = "test-secret";

pub struct TestContext {
    pub pool: DatabaseConnection,
    pub mailer: MockMailer,
    pub jwt_service: JwtService,
    auth_service: AuthService,
    job_service: JobService,
}

impl TestContext {
    pub async fn new() -> Self {
        // a single connection keeps the in-memory database alive and shared
        let mut options = ConnectOptions::new("sqlite::memory:".to_string());
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        let pool = Database::connect(options)
            .await
            .expect("in-memory sqlite should open");
        run_migrations(&pool).await.expect("migrations should apply");

        let mailer = MockMailer::new();
        let shared: Arc<dyn Mailer> = Arc::new(mailer.clone());
        let jwt_service = JwtService::new(JWT_SECRET, 86_400);

        let auth_service =
            AuthService::new(pool.clone(), jwt_service.clone(), shared.clone(), 600, 4);
        let job_service = JobService::new(pool.clone(), shared);

        Self {
            pool,
            mailer,
            jwt_service,
            auth_service,
            job_service,
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Response = ServiceResponse<impl MessageBody + use<>>,
            Config = (),
            InitError = (),
            Error = actix_web::Error,
        > + use<>,
    > {
        App::new()
            .wrap(AuthMiddleware::new(self.jwt_service.clone()))
            .app_data(web::Data::new(self.auth_service.clone()))
            .app_data(web::Data::new(self.job_service.clone()))
            .configure(handlers::configure)
    }

    pub async fn account(&self, email: &str) -> Option<accounts::Model> {
        accounts::Entity::find()
            .filter(accounts::Column::CompanyEmail.eq(email))
            .one(&self.pool)
            .await
            .expect("account lookup should succeed")
    }
}

/// Sends a request and returns status plus body, whether the app answered
/// with a response or the middleware rejected it.
pub async fn send<S, B>(app: &S, req: actix_http::Request) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    match test::try_call_service(app, req).await {
        Ok(resp) => {
            let status = resp.status();
            let bytes = test::read_body(resp).await;
            (status, parse_body(&bytes))
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let bytes = to_bytes(resp.into_body()).await.unwrap_or_default();
            (status, parse_body(&bytes))
        }
    }
}

fn parse_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

pub fn signup_body(email: &str) -> Value {
    json!({
        "name": "A",
        "phoneNumber": "1234567890",
        "companyName": "Acme",
        "companyEmail": email,
        "password": "secret"
    })
}

pub fn post_json(uri: &str, body: &Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

/// Signs up and verifies an account, returning its session token.
pub async fn verified_token<S, B>(ctx: &TestContext, app: &S, email: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, _) = send(app, post_json("/api/v1/user/signup", &signup_body(email)).to_request()).await;
    assert_eq!(status, StatusCode::CREATED);

    let otp = ctx
        .account(email)
        .await
        .and_then(|a| a.otp_code)
        .expect("signup should store a code");

    let (status, body) = send(
        app,
        post_json(
            "/api/v1/user/verify",
            &json!({ "companyEmail": email, "otp": otp }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    body["token"].as_str().expect("token in body").to_string()
}
