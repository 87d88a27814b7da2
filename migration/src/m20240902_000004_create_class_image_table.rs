use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassImage::Table)
                    .if_not_exists()
                    .col(pk_auto(ClassImage::Id))
                    .col(string(ClassImage::SchoolCode))
                    .col(integer(ClassImage::Grade))
                    .col(integer(ClassImage::Class))
                    .col(string(ClassImage::Date))
                    .col(string(ClassImage::Path))
                    .col(string(ClassImage::Email))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_image_class_date")
                    .table(ClassImage::Table)
                    .col(ClassImage::SchoolCode)
                    .col(ClassImage::Grade)
                    .col(ClassImage::Class)
                    .col(ClassImage::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassImage {
    Table,
    Id,
    SchoolCode,
    Grade,
    Class,
    Date,
    Path,
    Email,
}
