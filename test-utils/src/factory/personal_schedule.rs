//! Personal schedule factory for creating test schedule entries.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating personal schedule entries owned by an email.
pub struct PersonalScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    calendar_name: String,
    calendar_date: NaiveDate,
}

impl<'a> PersonalScheduleFactory<'a> {
    /// Creates a new factory for `email`.
    ///
    /// Defaults:
    /// - calendar_name: `"Schedule {id}"`
    /// - calendar_date: `2024-03-05`
    pub fn new(db: &'a DatabaseConnection, email: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            email: email.into(),
            calendar_name: format!("Schedule {}", id),
            calendar_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap_or_default(),
        }
    }

    pub fn calendar_name(mut self, name: impl Into<String>) -> Self {
        self.calendar_name = name.into();
        self
    }

    pub fn calendar_date(mut self, date: NaiveDate) -> Self {
        self.calendar_date = date;
        self
    }

    /// Builds and inserts the schedule entry.
    ///
    /// # Returns
    /// - `Ok(entity::personal_schedule::Model)` - Created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::personal_schedule::Model, DbErr> {
        entity::personal_schedule::ActiveModel {
            email: ActiveValue::Set(self.email),
            calendar_name: ActiveValue::Set(self.calendar_name),
            calendar_date: ActiveValue::Set(self.calendar_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a schedule entry with default name and date for `email`.
pub async fn create_personal_schedule(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entity::personal_schedule::Model, DbErr> {
    PersonalScheduleFactory::new(db, email).build().await
}
