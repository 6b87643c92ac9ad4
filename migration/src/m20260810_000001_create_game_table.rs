use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string(Game::Name))
                    .col(string(Game::Slug))
                    .col(string(Game::Category))
                    .col(double(Game::Price))
                    .col(text_null(Game::Description))
                    .col(string_null(Game::ReleaseDate))
                    .col(json_null(Game::Platforms))
                    .col(json_null(Game::Genres))
                    .col(string_null(Game::Developer))
                    .col(string_null(Game::Publisher))
                    .col(double_null(Game::Rating))
                    .col(string_null(Game::ImageUrl))
                    .col(boolean(Game::IsActive).default(true))
                    .col(
                        timestamp(Game::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Name and slug are indexed but deliberately not unique: normalized
        // uniqueness is enforced by the application, and duplicate cleanup
        // requires colliding rows to coexist.
        manager
            .create_index(
                Index::create()
                    .name("idx_game_name")
                    .table(Game::Table)
                    .col(Game::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_slug")
                    .table(Game::Table)
                    .col(Game::Slug)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    Name,
    Slug,
    Category,
    Price,
    Description,
    ReleaseDate,
    Platforms,
    Genres,
    Developer,
    Publisher,
    Rating,
    ImageUrl,
    IsActive,
    CreatedAt,
}
