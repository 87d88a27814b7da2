//! Reading and updating student profiles.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{Student, UpdateProfileParam},
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the profile of `email`.
    ///
    /// # Returns
    /// - `Ok(Student)` - Student with whatever profile fields are set
    /// - `Err(AppError::NotFound)` - No student with that email
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, email: &str) -> Result<Student, AppError> {
        StudentRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    /// Overwrites every profile field of `param.email`.
    ///
    /// # Returns
    /// - `Ok(())` - Profile updated
    /// - `Err(AppError::NotFound)` - No student with that email
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, param: UpdateProfileParam) -> Result<(), AppError> {
        let email = param.email.clone();
        let updated = StudentRepository::new(self.db).update_profile(param).await?;
        if updated == 0 {
            return Err(AppError::NotFound("Profile not found".to_string()));
        }

        tracing::info!("Updated profile of {}", email);

        Ok(())
    }
}
