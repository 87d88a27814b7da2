//! Personal schedule repository.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::personal_schedule::PersonalSchedule;

/// Repository for personal calendar entries owned by a student email.
pub struct PersonalScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonalScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a personal schedule entry.
    ///
    /// Duplicate entries are allowed; the same name may be added twice on a date.
    ///
    /// # Returns
    /// - `Ok(PersonalSchedule)` - The stored entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, schedule: PersonalSchedule) -> Result<PersonalSchedule, DbErr> {
        let entity = entity::personal_schedule::ActiveModel {
            email: ActiveValue::Set(schedule.email),
            calendar_name: ActiveValue::Set(schedule.name),
            calendar_date: ActiveValue::Set(schedule.date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PersonalSchedule::from_entity(entity))
    }

    /// Deletes every entry matching email, name and date exactly.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries removed, `0` when nothing matched
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, email: &str, name: &str, date: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::PersonalSchedule::delete_many()
            .filter(entity::personal_schedule::Column::Email.eq(email))
            .filter(entity::personal_schedule::Column::CalendarName.eq(name))
            .filter(entity::personal_schedule::Column::CalendarDate.eq(date))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets all entries of `email`, ordered by date then insertion order.
    pub async fn get_by_email(&self, email: &str) -> Result<Vec<PersonalSchedule>, DbErr> {
        let entities = entity::prelude::PersonalSchedule::find()
            .filter(entity::personal_schedule::Column::Email.eq(email))
            .order_by_asc(entity::personal_schedule::Column::CalendarDate)
            .order_by_asc(entity::personal_schedule::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(PersonalSchedule::from_entity)
            .collect())
    }
}
