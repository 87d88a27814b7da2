use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(string(Student::Email).primary_key())
                    .col(string_null(Student::Office))
                    .col(string_null(Student::SchoolName))
                    .col(string_null(Student::SchoolCode))
                    .col(integer_null(Student::Grade))
                    .col(integer_null(Student::Class))
                    .col(integer_null(Student::Number))
                    .col(string_null(Student::Name))
                    .col(string_null(Student::PhotoUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Email,
    Office,
    SchoolName,
    SchoolCode,
    Grade,
    Class,
    Number,
    Name,
    PhotoUrl,
}
