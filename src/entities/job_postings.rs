use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    ToSchema,
    DeriveActiveEnum,
    EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
pub enum ExperienceLevel {
    #[sea_orm(string_value = "Entry")]
    #[serde(rename = "Entry")]
    Entry,
    #[sea_orm(string_value = "Mid-level")]
    #[serde(rename = "Mid-level")]
    MidLevel,
    #[sea_orm(string_value = "Senior")]
    #[serde(rename = "Senior")]
    Senior,
    #[sea_orm(string_value = "Executive")]
    #[serde(rename = "Executive")]
    Executive,
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceLevel::Entry => write!(f, "Entry"),
            ExperienceLevel::MidLevel => write!(f, "Mid-level"),
            ExperienceLevel::Senior => write!(f, "Senior"),
            ExperienceLevel::Executive => write!(f, "Executive"),
        }
    }
}

impl std::str::FromStr for ExperienceLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Entry" => Ok(ExperienceLevel::Entry),
            "Mid-level" => Ok(ExperienceLevel::MidLevel),
            "Senior" => Ok(ExperienceLevel::Senior),
            "Executive" => Ok(ExperienceLevel::Executive),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "job_postings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account_id: i32,
    pub job_title: String,
    #[sea_orm(column_type = "Text")]
    pub job_description: String,
    pub experience_level: ExperienceLevel,
    pub candidates: Json,
    pub end_date: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Account,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn candidate_emails(&self) -> Vec<String> {
        serde_json::from_value(self.candidates.clone()).unwrap_or_default()
    }
}
