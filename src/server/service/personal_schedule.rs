//! Personal calendar entries owned by a student email.
//!
//! Entries are not tied to a school context, so no student lookup happens here.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::personal_schedule::PersonalScheduleRepository,
    error::AppError,
    model::personal_schedule::PersonalSchedule,
    util::parse::parse_loose_date,
};

pub struct PersonalScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonalScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an entry, normalizing `raw_date` to a calendar date.
    ///
    /// # Returns
    /// - `Ok(PersonalSchedule)` - Stored entry
    /// - `Err(AppError::BadRequest)` - `raw_date` is not a recognizable date
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn add(
        &self,
        email: &str,
        name: &str,
        raw_date: &str,
    ) -> Result<PersonalSchedule, AppError> {
        let date = parse_date(raw_date)?;

        let schedule = PersonalScheduleRepository::new(self.db)
            .create(PersonalSchedule {
                email: email.to_string(),
                name: name.to_string(),
                date,
            })
            .await?;

        Ok(schedule)
    }

    /// Deletes entries matching email, name and normalized date exactly.
    ///
    /// Deleting nothing is not an error.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries removed
    /// - `Err(AppError::BadRequest)` - `raw_date` is not a recognizable date
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, email: &str, name: &str, raw_date: &str) -> Result<u64, AppError> {
        let date = parse_date(raw_date)?;

        let deleted = PersonalScheduleRepository::new(self.db)
            .delete(email, name, date)
            .await?;
        if deleted == 0 {
            tracing::debug!("No personal schedule '{}' on {} for {}", name, date, email);
        }

        Ok(deleted)
    }

    /// Lists all entries of `email` in date order.
    pub async fn list(&self, email: &str) -> Result<Vec<PersonalSchedule>, AppError> {
        Ok(PersonalScheduleRepository::new(self.db)
            .get_by_email(email)
            .await?)
    }
}

fn parse_date(raw_date: &str) -> Result<chrono::NaiveDate, AppError> {
    parse_loose_date(raw_date)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid calendar_date '{}'", raw_date)))
}
