//! Student data repository for database operations.
//!
//! This module provides the `StudentRepository` for managing student rows. A row is
//! created with only an email at first login and completed later by profile updates.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::student::{Student, UpdateProfileParam};

/// Repository providing database operations for student records.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a student by email.
    ///
    /// # Arguments
    /// - `email` - Verified email of the student
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(email.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Inserts a student row holding only `email` and `photo_url`.
    ///
    /// Existing rows are left untouched, so calling this for a registered email is a
    /// no-op rather than a conflict error.
    ///
    /// # Arguments
    /// - `email` - Verified email of the student
    /// - `photo_url` - Initial profile photo, usually the provider's picture
    ///
    /// # Returns
    /// - `Ok(())` - Row exists after the call
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_if_absent(
        &self,
        email: &str,
        photo_url: Option<String>,
    ) -> Result<(), DbErr> {
        entity::prelude::Student::insert(entity::student::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            photo_url: ActiveValue::Set(photo_url),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::student::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Overwrites the profile fields of the student identified by `param.email`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated, `0` when the email is unknown
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::update_many()
            .filter(entity::student::Column::Email.eq(param.email))
            .col_expr(entity::student::Column::Name, Expr::value(param.name))
            .col_expr(entity::student::Column::Office, Expr::value(param.office))
            .col_expr(
                entity::student::Column::SchoolName,
                Expr::value(param.school_name),
            )
            .col_expr(
                entity::student::Column::SchoolCode,
                Expr::value(param.school_code),
            )
            .col_expr(entity::student::Column::Grade, Expr::value(param.grade))
            .col_expr(entity::student::Column::Class, Expr::value(param.class))
            .col_expr(entity::student::Column::Number, Expr::value(param.number))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Points the student's profile photo at `photo_url`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated, `0` when the email is unknown
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_photo_url(&self, email: &str, photo_url: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::update_many()
            .filter(entity::student::Column::Email.eq(email))
            .col_expr(
                entity::student::Column::PhotoUrl,
                Expr::value(photo_url.to_string()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
