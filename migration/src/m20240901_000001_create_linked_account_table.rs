use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LinkedAccount::Table)
                    .if_not_exists()
                    .col(string(LinkedAccount::UserId).primary_key())
                    .col(string(LinkedAccount::DisplayName))
                    .col(string_null(LinkedAccount::MainGovernorId))
                    .col(string_null(LinkedAccount::AltGovernorId))
                    .col(string_null(LinkedAccount::FarmGovernorId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LinkedAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LinkedAccount {
    Table,
    UserId,
    DisplayName,
    MainGovernorId,
    AltGovernorId,
    FarmGovernorId,
}
