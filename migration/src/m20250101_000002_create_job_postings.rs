use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_accounts::Accounts;

#[derive(DeriveIden)]
enum JobPostings {
    Table,
    Id,
    AccountId,
    JobTitle,
    JobDescription,
    ExperienceLevel,
    Candidates,
    EndDate,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobPostings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobPostings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobPostings::AccountId).integer().not_null())
                    .col(ColumnDef::new(JobPostings::JobTitle).string_len(255).not_null())
                    .col(ColumnDef::new(JobPostings::JobDescription).text().not_null())
                    .col(
                        ColumnDef::new(JobPostings::ExperienceLevel)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(JobPostings::Candidates).json().not_null())
                    .col(
                        ColumnDef::new(JobPostings::EndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobPostings::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_postings_account_id")
                            .from(JobPostings::Table, JobPostings::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_job_postings_account_id")
                    .table(JobPostings::Table)
                    .col(JobPostings::AccountId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobPostings::Table).to_owned())
            .await?;
        Ok(())
    }
}
