use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Categories: lookup by title when news are written
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_categories_title")
                    .table(Categories::Table)
                    .col(Categories::Title)
                    .to_owned(),
            )
            .await?;

        // News: listing per category
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_news_category")
                    .table(News::Table)
                    .col(News::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_news_category").table(News::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_categories_title").table(Categories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Categories { Table, Title }

#[derive(DeriveIden)]
enum News { Table, CategoryId }
