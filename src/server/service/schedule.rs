//! Aggregation of NEIS calendar, timetable and meal data for a student.
//!
//! Each operation resolves the caller's school context first; a context failure
//! aborts before any external call. External failures never fail a request: the
//! calendar degrades to an empty object, a failed week or meal to an empty list.

use chrono::NaiveDate;
use futures::future::join_all;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

use crate::server::{
    error::AppError,
    model::{
        schedule::{DateWindow, MealPlan, MealType, WeeklyTimetable},
        student::{ClassContext, SchoolRef},
    },
    service::{
        context::StudentContextResolver,
        neis::{extract_rows, fill_missing, NeisApi, NeisRequest, NeisResource},
    },
};

const TIMETABLE_FIELD: &str = "ITRT_CNTNT";
const MEAL_FIELD: &str = "DDISH_NM";

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
    neis: &'a dyn NeisApi,
    department: Option<&'a str>,
}

impl<'a> ScheduleService<'a> {
    /// Creates a new ScheduleService.
    ///
    /// # Arguments
    /// - `db` - Student database connection
    /// - `neis` - NEIS API client
    /// - `department` - Optional department name sent with timetable queries
    pub fn new(
        db: &'a DatabaseConnection,
        neis: &'a dyn NeisApi,
        department: Option<&'a str>,
    ) -> Self {
        Self {
            db,
            neis,
            department,
        }
    }

    /// Fetches the academic calendar of the student's school over `window`.
    ///
    /// The NEIS response is returned verbatim.
    ///
    /// # Returns
    /// - `Ok(Value)` - NEIS body, or `{}` when the call failed
    /// - `Err(AppError::NotFound)` - Unknown student or incomplete profile
    /// - `Err(AppError::DbErr)` - Database error while resolving the student
    pub async fn calendar(&self, email: &str, window: DateWindow) -> Result<Value, AppError> {
        let school = StudentContextResolver::new(self.db)
            .resolve_school(email)
            .await?;

        let request = NeisRequest::new(NeisResource::SchoolSchedule, school, window);
        match self.neis.fetch(&request).await {
            Ok(body) => Ok(body),
            Err(err) => {
                tracing::warn!("School calendar request failed: {}", err);
                Ok(json!({}))
            }
        }
    }

    /// Fetches the class timetable over `window`, one NEIS call per week.
    ///
    /// Weeks are queried concurrently and merged in chronological order. A failed
    /// week contributes an empty list at its position.
    ///
    /// # Returns
    /// - `Ok(WeeklyTimetable)` - One entry per week of the window
    /// - `Err(AppError::NotFound)` - Unknown student or incomplete profile
    /// - `Err(AppError::DbErr)` - Database error while resolving the student
    pub async fn timetable(
        &self,
        email: &str,
        window: DateWindow,
    ) -> Result<WeeklyTimetable, AppError> {
        let context = StudentContextResolver::new(self.db)
            .resolve_class(email)
            .await?;

        let requests = window
            .weeks()
            .into_iter()
            .map(|week| self.timetable_request(&context, week));
        let weeks = join_all(requests.map(|request| self.fetch_rows(request, TIMETABLE_FIELD))).await;

        Ok(WeeklyTimetable { weeks })
    }

    /// Fetches breakfast, lunch and dinner of `date` concurrently.
    ///
    /// # Returns
    /// - `Ok(MealPlan)` - All three meals, each empty when its call failed
    /// - `Err(AppError::NotFound)` - Unknown student or incomplete profile
    /// - `Err(AppError::DbErr)` - Database error while resolving the student
    pub async fn meals(&self, email: &str, date: NaiveDate) -> Result<MealPlan, AppError> {
        let school = StudentContextResolver::new(self.db)
            .resolve_school(email)
            .await?;
        let window = DateWindow::new(date, date)?;

        let (breakfast, lunch, dinner) = tokio::join!(
            self.fetch_rows(meal_request(&school, window, MealType::Breakfast), MEAL_FIELD),
            self.fetch_rows(meal_request(&school, window, MealType::Lunch), MEAL_FIELD),
            self.fetch_rows(meal_request(&school, window, MealType::Dinner), MEAL_FIELD),
        );

        Ok(MealPlan {
            breakfast,
            lunch,
            dinner,
        })
    }

    fn timetable_request(&self, context: &ClassContext, week: DateWindow) -> NeisRequest {
        let request = NeisRequest::new(NeisResource::Timetable, context.school.clone(), week)
            .with_param("GRADE", context.grade)
            .with_param("CLASS_NM", context.class);

        match self.department {
            Some(department) => request.with_param("DDDEP_NM", department),
            None => request,
        }
    }

    async fn fetch_rows(&self, request: NeisRequest, field: &str) -> Vec<Value> {
        match self.neis.fetch(&request).await {
            Ok(body) => {
                let mut rows = extract_rows(&body, request.resource);
                fill_missing(&mut rows, field);
                rows
            }
            Err(err) => {
                tracing::warn!(
                    "{} request for {}..{} failed: {}",
                    request.resource.name(),
                    request.window.start,
                    request.window.end,
                    err
                );
                Vec::new()
            }
        }
    }
}

fn meal_request(school: &SchoolRef, window: DateWindow, meal: MealType) -> NeisRequest {
    NeisRequest::new(NeisResource::MealServiceDietInfo, school.clone(), window)
        .with_param("MMEAL_SC_CODE", meal.code())
}
