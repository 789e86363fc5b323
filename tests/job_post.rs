mod common;

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{App, test};
use sea_orm::EntityTrait;
use serde_json::{Value, json};

use common::*;
use jobboard_backend::config::CorsConfig;
use jobboard_backend::entities::job_posting_entity as job_postings;
use jobboard_backend::handlers;
use jobboard_backend::middlewares::{AuthMiddleware, create_cors};

fn job_body(candidates: Option<Vec<&str>>) -> Value {
    let mut body = json!({
        "jobTitle": "Backend Engineer",
        "jobDescription": "Build and run our hiring APIs.",
        "experienceLevel": "Mid-level",
        "endDate": "2025-12-31"
    });
    if let Some(candidates) = candidates {
        body["candidates"] = json!(candidates);
    }
    body
}

fn authorized(body: &Value, token: &str) -> actix_http::Request {
    post_json("/api/v1/job/post", body)
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request()
}

#[actix_web::test]
async fn missing_token_is_rejected_before_the_handler() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;

    let (status, body) = send(
        &app,
        post_json("/api/v1/job/post", &job_body(None)).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_TOKEN");

    let req = post_json("/api/v1/job/post", &job_body(None))
        .insert_header(("Authorization", "Token abc"))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(job_postings::Entity::find().all(&ctx.pool).await.unwrap().is_empty());
}

#[actix_web::test]
async fn invalid_or_expired_token_is_forbidden() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;

    let (status, body) = send(&app, authorized(&job_body(None), "garbage")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["message"], "Invalid token");

    let foreign = jobboard_backend::utils::JwtService::new("other-secret", 86_400)
        .generate_session_token(1, "a@acme.com")
        .unwrap();
    let (status, _) = send(&app, authorized(&job_body(None), &foreign)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let expired = jobboard_backend::utils::JwtService::new(JWT_SECRET, -3_600)
        .generate_session_token(1, "a@acme.com")
        .unwrap();
    let (status, _) = send(&app, authorized(&job_body(None), &expired)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn posting_without_candidates_sends_no_mail() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let token = verified_token(&ctx, &app, "a@acme.com").await;
    let mails_before = ctx.mailer.sent().len();

    let (status, body) = send(&app, authorized(&job_body(None), &token)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Job posted successfully");
    assert!(body.get("emailResults").is_none());
    assert_eq!(body["jobPosting"]["jobTitle"], "Backend Engineer");
    assert_eq!(body["jobPosting"]["experienceLevel"], "Mid-level");
    assert_eq!(body["jobPosting"]["candidates"], json!([]));
    assert_eq!(ctx.mailer.sent().len(), mails_before);

    let empty_list = job_body(Some(vec![]));
    let (status, body) = send(&app, authorized(&empty_list, &token)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("emailResults").is_none());
    assert_eq!(ctx.mailer.sent().len(), mails_before);
}

#[actix_web::test]
async fn every_candidate_is_notified() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let token = verified_token(&ctx, &app, "a@acme.com").await;

    let candidates = vec!["c1@x.com", "c2@x.com", "c3@x.com"];
    let (status, body) = send(&app, authorized(&job_body(Some(candidates.clone())), &token)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["message"],
        "Job posted successfully and emails sent to all candidates"
    );
    let results = body["emailResults"].as_array().expect("emailResults");
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r["success"] == true));

    for candidate in candidates {
        let mails = ctx.mailer.sent_to(candidate);
        assert_eq!(mails.len(), 1);
        assert_eq!(mails[0].subject, "New Job Opportunity from Acme");
        assert!(mails[0].html.contains("Backend Engineer"));
    }
}

#[actix_web::test]
async fn partial_mail_failure_keeps_the_posting() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let token = verified_token(&ctx, &app, "a@acme.com").await;
    ctx.mailer.fail_for("c2@x.com");

    let (status, body) = send(
        &app,
        authorized(&job_body(Some(vec!["c1@x.com", "c2@x.com"])), &token),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["message"],
        "Job posted successfully, but some emails failed to send"
    );
    let results = body["emailResults"].as_array().unwrap();
    assert_eq!(results.len(), 2);

    let failed: Vec<&Value> = results.iter().filter(|r| r["success"] == false).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["email"], "c2@x.com");
    assert!(failed[0]["error"].is_string());

    let stored = job_postings::Entity::find().all(&ctx.pool).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(
        stored[0].candidate_emails(),
        vec!["c1@x.com".to_string(), "c2@x.com".to_string()]
    );
    let owner = ctx.account("a@acme.com").await.unwrap();
    assert_eq!(stored[0].account_id, owner.id);
}

#[actix_web::test]
async fn job_validation_reports_fields() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let token = verified_token(&ctx, &app, "a@acme.com").await;

    let bad = json!({
        "jobTitle": "",
        "jobDescription": "too short",
        "experienceLevel": "Senior",
        "candidates": ["ok@x.com", "nope"],
        "endDate": "whenever"
    });
    let (status, body) = send(&app, authorized(&bad, &token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["error"]["issues"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|i| i["field"].as_str())
        .collect();
    assert!(fields.contains(&"jobTitle"));
    assert!(fields.contains(&"jobDescription"));
    assert!(fields.contains(&"candidates[1]"));
    assert!(fields.contains(&"endDate"));

    let mut unknown_level = job_body(None);
    unknown_level["experienceLevel"] = json!("Intern");
    let (status, body) = send(&app, authorized(&unknown_level, &token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["issues"][0]["field"], "experienceLevel");

    let (status, body) = send(&app, authorized(&json!({}), &token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["error"]["issues"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|i| i["field"].as_str())
        .collect();
    assert_eq!(
        fields,
        vec!["endDate", "experienceLevel", "jobDescription", "jobTitle"]
    );

    assert!(job_postings::Entity::find().all(&ctx.pool).await.unwrap().is_empty());
}

#[actix_web::test]
async fn token_for_missing_account_is_not_found() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;

    let token = ctx
        .jwt_service
        .generate_session_token(999, "ghost@acme.com")
        .unwrap();
    let (status, body) = send(&app, authorized(&job_body(Some(vec!["c@x.com"])), &token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User not found");
    assert!(ctx.mailer.sent().is_empty());
}

#[actix_web::test]
async fn rejected_requests_still_carry_cors_headers() {
    let ctx = TestContext::new().await;
    let cors = CorsConfig::default();
    let app = test::init_service(
        App::new()
            .wrap(AuthMiddleware::new(ctx.jwt_service.clone()))
            .wrap(create_cors(&cors))
            .configure(handlers::configure),
    )
    .await;

    for auth in [None, Some("Bearer garbage")] {
        let mut req = post_json("/api/v1/job/post", &job_body(None))
            .insert_header((header::ORIGIN, cors.allowed_origin.as_str()));
        if let Some(auth) = auth {
            req = req.insert_header((header::AUTHORIZATION, auth));
        }
        let resp = test::call_service(&app, req.to_request()).await;

        let expected = if auth.is_none() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::FORBIDDEN
        };
        assert_eq!(resp.status(), expected);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some(cors.allowed_origin.as_str())
        );
    }
}
