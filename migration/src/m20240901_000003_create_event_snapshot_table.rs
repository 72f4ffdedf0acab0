use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventSnapshot::Table)
                    .if_not_exists()
                    .col(string(EventSnapshot::GovernorId).primary_key())
                    .col(string(EventSnapshot::GovernorName))
                    .col(string_null(EventSnapshot::Power))
                    .col(string_null(EventSnapshot::Rank))
                    .col(string_null(EventSnapshot::DkpRequired))
                    .col(string_null(EventSnapshot::DkpAchieved))
                    .col(string_null(EventSnapshot::Deaths))
                    .col(string_null(EventSnapshot::Tier4Kills))
                    .col(string_null(EventSnapshot::Tier5Kills))
                    .col(string_null(EventSnapshot::AllianceTag))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventSnapshot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventSnapshot {
    Table,
    GovernorId,
    GovernorName,
    Power,
    Rank,
    DkpRequired,
    DkpAchieved,
    Deaths,
    #[sea_orm(iden = "tier4_kills")]
    Tier4Kills,
    #[sea_orm(iden = "tier5_kills")]
    Tier5Kills,
    AllianceTag,
}
