//! Date windows and merged results of the NEIS schedule aggregator.

use chrono::{Datelike, Days, NaiveDate};
use serde_json::{Map, Value};

use crate::{model::schedule::MealPlanDto, server::error::AppError};

/// Longest accepted window, one leap year.
pub const MAX_WINDOW_DAYS: i64 = 366;

/// Inclusive date range sent to NEIS as a from/to pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Creates a window, rejecting ranges that end before they start or that span
    /// more than `MAX_WINDOW_DAYS` days.
    ///
    /// # Returns
    /// - `Ok(DateWindow)` - Valid inclusive range
    /// - `Err(AppError::BadRequest)` - `end` precedes `start`, or the range is too long
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if end < start {
            return Err(AppError::BadRequest(
                "Window end must not precede its start".to_string(),
            ));
        }
        if (end - start).num_days() >= MAX_WINDOW_DAYS {
            return Err(AppError::BadRequest(format!(
                "Window must not span more than {} days",
                MAX_WINDOW_DAYS
            )));
        }

        Ok(Self { start, end })
    }

    /// January 1st to December 31st of `year`.
    pub fn year(year: i32) -> Option<Self> {
        Some(Self {
            start: NaiveDate::from_ymd_opt(year, 1, 1)?,
            end: NaiveDate::from_ymd_opt(year, 12, 31)?,
        })
    }

    /// Splits the window into successive Monday-to-Sunday weeks.
    ///
    /// The first week starts on the Monday on or before `start`. Partial weeks at
    /// either end are kept and clipped to the window, so every day of the window
    /// belongs to exactly one week. Weeks are returned in chronological order.
    pub fn weeks(&self) -> Vec<DateWindow> {
        let back = u64::from(self.start.weekday().num_days_from_monday());
        let Some(mut monday) = self.start.checked_sub_days(Days::new(back)) else {
            return vec![*self];
        };

        let mut weeks = Vec::new();
        while monday <= self.end {
            let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(self.end);
            weeks.push(DateWindow {
                start: monday.max(self.start),
                end: sunday.min(self.end),
            });

            match monday.checked_add_days(Days::new(7)) {
                Some(next) => monday = next,
                None => break,
            }
        }

        weeks
    }
}

/// NEIS meal type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// Value of the `MMEAL_SC_CODE` parameter.
    pub fn code(self) -> u8 {
        match self {
            Self::Breakfast => 1,
            Self::Lunch => 2,
            Self::Dinner => 3,
        }
    }
}

/// Timetable rows grouped per week, in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyTimetable {
    pub weeks: Vec<Vec<Value>>,
}

impl WeeklyTimetable {
    /// Renders the weeks as an ordered object `{"week1": [...], "week2": [...]}`.
    pub fn into_json(self) -> Map<String, Value> {
        self.weeks
            .into_iter()
            .enumerate()
            .map(|(index, rows)| (format!("week{}", index + 1), Value::Array(rows)))
            .collect()
    }
}

/// Breakfast, lunch and dinner rows for one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealPlan {
    pub breakfast: Vec<Value>,
    pub lunch: Vec<Value>,
    pub dinner: Vec<Value>,
}

impl MealPlan {
    pub fn into_dto(self) -> MealPlanDto {
        MealPlanDto {
            breakfast: self.breakfast,
            lunch: self.lunch,
            dinner: self.dinner,
        }
    }
}
