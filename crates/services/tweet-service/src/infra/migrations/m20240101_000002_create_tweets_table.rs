//! Migration: Create tweets table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tweets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tweets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tweets::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Tweets::Content).text().not_null())
                    .col(ColumnDef::new(Tweets::ReplyToId).uuid().null())
                    .col(
                        ColumnDef::new(Tweets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tweets_author")
                            .from(Tweets::Table, Tweets::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tweets_reply_to")
                            .from(Tweets::Table, Tweets::ReplyToId)
                            .to(Tweets::Table, Tweets::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tweets_author_id")
                    .table(Tweets::Table)
                    .col(Tweets::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tweets_reply_to_id")
                    .table(Tweets::Table)
                    .col(Tweets::ReplyToId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tweets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Tweets {
    Table,
    Id,
    AuthorId,
    Content,
    ReplyToId,
    CreatedAt,
}
