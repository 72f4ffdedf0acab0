use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Numeric stats stay as the sheet's formatted text and are parsed on read
        manager
            .create_table(
                Table::create()
                    .table(GeneralSnapshot::Table)
                    .if_not_exists()
                    .col(string(GeneralSnapshot::GovernorId).primary_key())
                    .col(string(GeneralSnapshot::GovernorName))
                    .col(string_null(GeneralSnapshot::Power))
                    .col(string_null(GeneralSnapshot::KillPoints))
                    .col(string_null(GeneralSnapshot::Deaths))
                    .col(string_null(GeneralSnapshot::Tier4Kills))
                    .col(string_null(GeneralSnapshot::Tier5Kills))
                    .col(string_null(GeneralSnapshot::AllianceTag))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GeneralSnapshot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GeneralSnapshot {
    Table,
    GovernorId,
    GovernorName,
    Power,
    KillPoints,
    Deaths,
    #[sea_orm(iden = "tier4_kills")]
    Tier4Kills,
    #[sea_orm(iden = "tier5_kills")]
    Tier5Kills,
    AllianceTag,
}
