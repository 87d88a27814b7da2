//! Resolution of a caller's email to their school context.
//!
//! Every context-dependent operation re-resolves the student on each request. A
//! missing row and a row whose profile has not been completed are both reported as
//! 404; neither is ever defaulted.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{ClassContext, SchoolRef, Student},
};

pub struct StudentContextResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentContextResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the student registered under `email`.
    ///
    /// # Returns
    /// - `Ok(Student)` - Full student record
    /// - `Err(AppError::NotFound)` - No student with that email
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn resolve(&self, email: &str) -> Result<Student, AppError> {
        StudentRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                tracing::debug!("No student registered for {}", email);
                AppError::NotFound("Student not found".to_string())
            })
    }

    /// Resolves the office and school of `email`.
    ///
    /// # Returns
    /// - `Ok(SchoolRef)` - Office and school code
    /// - `Err(AppError::NotFound)` - Unknown email or incomplete profile
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn resolve_school(&self, email: &str) -> Result<SchoolRef, AppError> {
        self.resolve(email).await?.school().ok_or_else(incomplete)
    }

    /// Resolves the full class context of `email`.
    ///
    /// # Returns
    /// - `Ok(ClassContext)` - Office, school code, grade, class and name
    /// - `Err(AppError::NotFound)` - Unknown email or incomplete profile
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn resolve_class(&self, email: &str) -> Result<ClassContext, AppError> {
        self.resolve(email).await?.class_context().ok_or_else(incomplete)
    }
}

fn incomplete() -> AppError {
    AppError::NotFound("Student profile is incomplete".to_string())
}
