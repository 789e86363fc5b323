use std::sync::Arc;

use askama::Template;
use chrono::{DateTime, Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};

use crate::entities::account_entity as accounts;
use crate::error::{AppError, AppResult};
use crate::external::{Mailer, VerificationEmail};
use crate::models::*;
use crate::utils::*;

const SIGNUP_MESSAGE: &str =
    "Signup successful. Please check your email for the OTP to verify your account.";

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    jwt_service: JwtService,
    mailer: Arc<dyn Mailer>,
    otp_ttl: Duration,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(
        pool: DatabaseConnection,
        jwt_service: JwtService,
        mailer: Arc<dyn Mailer>,
        otp_ttl_seconds: i64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            pool,
            jwt_service,
            mailer,
            otp_ttl: Duration::seconds(otp_ttl_seconds),
            bcrypt_cost,
        }
    }

    /// Creates an unverified account and mails it a one-time code.
    ///
    /// A failed mail leaves the account in place; the caller gets a server
    /// error and the email stays taken.
    pub async fn signup(&self, request: SignupRequest) -> AppResult<SignupResponse> {
        validate_request(&request)?;

        if self.find_by_email(&request.company_email).await?.is_some() {
            return Err(AppError::Conflict("Email already taken".to_string()));
        }

        let code = generate_four_digit_code();
        let now = Utc::now();
        let password_hash = hash_password(&request.password, self.bcrypt_cost)?;

        let account = accounts::ActiveModel {
            name: Set(request.name),
            phone_number: Set(request.phone_number),
            company_name: Set(request.company_name),
            company_email: Set(request.company_email),
            password_hash: Set(password_hash),
            is_verified: Set(false),
            otp_code: Set(Some(code.clone())),
            otp_expires_at: Set(Some(now + self.otp_ttl)),
            created_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(conflict_on_duplicate)?;

        log::info!(
            "Account {} created for {}, awaiting verification",
            account.id,
            account.company_email
        );

        let html = VerificationEmail {
            code: &code,
            ttl_minutes: self.otp_ttl.num_minutes(),
        }
        .render()?;

        self.mailer
            .send_html(&account.company_email, VerificationEmail::SUBJECT, &html)
            .await
            .map_err(|e| {
                log::error!(
                    "Verification mail for account {} failed: {e}",
                    account.id
                );
                AppError::MailError(e.to_string())
            })?;

        Ok(SignupResponse {
            success: true,
            message: SIGNUP_MESSAGE.to_string(),
        })
    }

    /// Consumes a one-time code, marks the account verified and opens a
    /// session.
    pub async fn verify(&self, request: VerifyRequest) -> AppResult<VerifyResponse> {
        validate_request(&request)?;

        let account = self
            .find_by_email(&request.company_email)
            .await?
            .ok_or(AppError::InvalidOtp)?;

        if !account.otp_accepts(&request.otp, Utc::now()) {
            return Err(AppError::InvalidOtp);
        }

        // conditioned on the code still being stored: only one caller can consume it
        let result = accounts::Entity::update_many()
            .col_expr(accounts::Column::IsVerified, Expr::value(true))
            .col_expr(accounts::Column::OtpCode, Expr::value(Option::<String>::None))
            .col_expr(
                accounts::Column::OtpExpiresAt,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .filter(accounts::Column::Id.eq(account.id))
            .filter(accounts::Column::OtpCode.eq(request.otp.as_str()))
            .exec(&self.pool)
            .await?;

        if result.rows_affected != 1 {
            return Err(AppError::InvalidOtp);
        }

        log::info!("Account {} verified", account.id);

        let token = self
            .jwt_service
            .generate_session_token(account.id, &account.company_email)?;

        Ok(VerifyResponse {
            success: true,
            message: "Account verified successfully".to_string(),
            token,
        })
    }

    pub async fn signin(&self, request: SigninRequest) -> AppResult<SigninResponse> {
        validate_request(&request)?;

        let account = self
            .find_by_email(&request.company_email)
            .await?
            .ok_or_else(|| AppError::AuthError("No user found with this email".to_string()))?;

        // unverified accounts never reach the password check
        if !account.is_verified {
            return Err(AppError::NotVerified);
        }

        if !verify_password(&request.password, &account.password_hash)? {
            return Err(AppError::AuthError("Invalid password".to_string()));
        }

        let token = self
            .jwt_service
            .generate_session_token(account.id, &account.company_email)?;

        Ok(SigninResponse {
            success: true,
            message: "Signin successful".to_string(),
            token,
            user: AccountProfile::from(account),
        })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<accounts::Model>> {
        let account = accounts::Entity::find()
            .filter(accounts::Column::CompanyEmail.eq(email))
            .one(&self.pool)
            .await?;
        Ok(account)
    }
}

/// Two concurrent signups can both pass the pre-check; the unique index
/// decides.
fn conflict_on_duplicate(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Email already taken".to_string())
        }
        _ => AppError::DatabaseError(err),
    }
}
