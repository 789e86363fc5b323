use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub(crate) enum Accounts {
    Table,
    Id,
    Name,
    PhoneNumber,
    CompanyName,
    CompanyEmail,
    PasswordHash,
    IsVerified,
    OtpCode,
    OtpExpiresAt,
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
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Accounts::PhoneNumber).string_len(32).not_null())
                    .col(ColumnDef::new(Accounts::CompanyName).string_len(255).not_null())
                    .col(ColumnDef::new(Accounts::CompanyEmail).string_len(255).not_null())
                    .col(ColumnDef::new(Accounts::PasswordHash).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Accounts::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Accounts::OtpCode).string_len(8).null())
                    .col(
                        ColumnDef::new(Accounts::OtpExpiresAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // one account per company email
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_accounts_company_email")
                    .table(Accounts::Table)
                    .col(Accounts::CompanyEmail)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;
        Ok(())
    }
}
