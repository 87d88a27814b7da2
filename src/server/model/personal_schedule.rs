//! Personal schedule domain models.

use chrono::NaiveDate;

use crate::{model::personal::PersonalScheduleDto, server::util::parse::format_compact_date};

/// A named personal event on a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalSchedule {
    pub email: String,
    pub name: String,
    pub date: NaiveDate,
}

impl PersonalSchedule {
    pub fn from_entity(entity: entity::personal_schedule::Model) -> Self {
        Self {
            email: entity.email,
            name: entity.calendar_name,
            date: entity.calendar_date,
        }
    }

    /// Converts to the list DTO, rendering the date as `YYYYMMDD`.
    pub fn into_dto(self) -> PersonalScheduleDto {
        PersonalScheduleDto {
            calendar_name: self.name,
            calendar_date: format_compact_date(self.date),
        }
    }
}
