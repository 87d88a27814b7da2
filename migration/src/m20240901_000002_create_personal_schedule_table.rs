use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PersonalSchedule::Table)
                    .if_not_exists()
                    .col(pk_auto(PersonalSchedule::Id))
                    .col(string(PersonalSchedule::Email))
                    .col(string(PersonalSchedule::CalendarName))
                    .col(date(PersonalSchedule::CalendarDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_personal_schedule_email")
                    .table(PersonalSchedule::Table)
                    .col(PersonalSchedule::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PersonalSchedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PersonalSchedule {
    Table,
    Id,
    Email,
    CalendarName,
    CalendarDate,
}
