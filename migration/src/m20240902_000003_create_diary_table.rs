use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Diary::Table)
                    .if_not_exists()
                    .col(pk_auto(Diary::Id))
                    .col(string(Diary::SchoolCode))
                    .col(integer(Diary::Grade))
                    .col(integer(Diary::Class))
                    .col(string(Diary::Date))
                    .col(text(Diary::Content))
                    .col(string(Diary::Email))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_diary_class_date")
                    .table(Diary::Table)
                    .col(Diary::SchoolCode)
                    .col(Diary::Grade)
                    .col(Diary::Class)
                    .col(Diary::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Diary::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Diary {
    Table,
    Id,
    SchoolCode,
    Grade,
    Class,
    Date,
    Content,
    Email,
}
