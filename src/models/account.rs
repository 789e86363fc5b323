use crate::entities::account_entity as accounts;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    #[schema(example = "Jane Doe")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[schema(example = "1234567890")]
    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone_number: String,
    #[schema(example = "Acme")]
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    #[schema(example = "jane@acme.com")]
    #[validate(email(message = "Invalid email address"))]
    pub company_email: String,
    #[schema(example = "secret")]
    #[validate(length(min = 6, message = "Min 6 length"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyRequest {
    #[schema(example = "jane@acme.com")]
    #[validate(email(message = "Invalid email address"))]
    pub company_email: String,
    #[schema(example = "4821")]
    #[validate(length(equal = 4, message = "OTP must be 4 digits"))]
    pub otp: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SigninRequest {
    #[schema(example = "jane@acme.com")]
    #[validate(email(message = "Invalid email address"))]
    pub company_email: String,
    #[schema(example = "secret")]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

/// Reduced account view returned on signin.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: i32,
    pub name: String,
    pub company_email: String,
    pub company_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SigninResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: AccountProfile,
}

impl From<accounts::Model> for AccountProfile {
    fn from(account: accounts::Model) -> Self {
        Self {
            id: account.id,
            name: account.name,
            company_email: account.company_email,
            company_name: account.company_name,
        }
    }
}
