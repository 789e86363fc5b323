use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub phone_number: String,
    pub company_name: String,
    #[sea_orm(unique)]
    pub company_email: String,
    pub password_hash: String,
    pub is_verified: bool,
    pub otp_code: Option<String>,
    pub otp_expires_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job_postings::Entity")]
    JobPostings,
}

impl Related<super::job_postings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobPostings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// A stored code is accepted only if it matches and has not yet expired.
    pub fn otp_accepts(&self, code: &str, now: DateTime<Utc>) -> bool {
        match (&self.otp_code, self.otp_expires_at) {
            (Some(stored), Some(expires_at)) => stored == code && now < expires_at,
            _ => false,
        }
    }
}
