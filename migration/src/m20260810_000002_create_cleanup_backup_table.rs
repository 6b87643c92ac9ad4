use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CleanupBackup::Table)
                    .if_not_exists()
                    .col(pk_auto(CleanupBackup::Id))
                    .col(string(CleanupBackup::Token))
                    .col(json(CleanupBackup::Payload))
                    .col(integer(CleanupBackup::RemovedCount))
                    .col(
                        timestamp(CleanupBackup::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cleanup_backup_token")
                    .table(CleanupBackup::Table)
                    .col(CleanupBackup::Token)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CleanupBackup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CleanupBackup {
    Table,
    Id,
    Token,
    Payload,
    RemovedCount,
    CreatedAt,
}
