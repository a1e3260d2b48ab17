//! Create `news` table with FK to `categories`.
//!
//! `ON DELETE CASCADE` on the FK is what removes a category's news when the
//! category is deleted; no application code does it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(News::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(News::Title, 255).not_null())
                    .col(text(News::Text).not_null())
                    .col(timestamp_with_time_zone(News::Date).not_null())
                    .col(big_integer(News::CategoryId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_category")
                            .from(News::Table, News::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(News::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum News { Table, Id, Title, Text, Date, CategoryId }

#[derive(DeriveIden)]
enum Categories { Table, Id }
