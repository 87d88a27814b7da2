//! Student factory for creating test student entities.
//!
//! Students created through `StudentFactory::new` carry a complete school context
//! (office, school code, grade and class). Use `bare` to get the row a first login
//! leaves behind, with only the email populated.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .email("kim@example.com")
///     .grade(2)
///     .class(3)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::student::Model,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with a complete school context.
    ///
    /// Defaults:
    /// - email: `"student{id}@example.com"` where id is auto-incremented
    /// - office: `"B10"`, school: `"Test High School"` / `"7010000"`
    /// - grade: `1`, class: `1`, number: `id`
    /// - name: `"Student {id}"`, photo_url: unset
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::student::Model {
                email: format!("student{}@example.com", id),
                office: Some("B10".to_string()),
                school_name: Some("Test High School".to_string()),
                school_code: Some("7010000".to_string()),
                grade: Some(1),
                class: Some(1),
                number: Some(id as i32),
                name: Some(format!("Student {}", id)),
                photo_url: None,
            },
        }
    }

    /// Creates a factory for a student row holding only an email.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StudentFactory` - Factory with every profile field unset
    pub fn bare(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::student::Model {
                email: format!("student{}@example.com", id),
                office: None,
                school_name: None,
                school_code: None,
                grade: None,
                class: None,
                number: None,
                name: None,
                photo_url: None,
            },
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    pub fn office(mut self, office: impl Into<String>) -> Self {
        self.entity.office = Some(office.into());
        self
    }

    pub fn school_code(mut self, school_code: impl Into<String>) -> Self {
        self.entity.school_code = Some(school_code.into());
        self
    }

    pub fn grade(mut self, grade: i32) -> Self {
        self.entity.grade = Some(grade);
        self
    }

    pub fn class(mut self, class: i32) -> Self {
        self.entity.class = Some(class);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = Some(name.into());
        self
    }

    pub fn photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.entity.photo_url = Some(photo_url.into());
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        let entity = self.entity;
        entity::student::ActiveModel {
            email: ActiveValue::Set(entity.email),
            office: ActiveValue::Set(entity.office),
            school_name: ActiveValue::Set(entity.school_name),
            school_code: ActiveValue::Set(entity.school_code),
            grade: ActiveValue::Set(entity.grade),
            class: ActiveValue::Set(entity.class),
            number: ActiveValue::Set(entity.number),
            name: ActiveValue::Set(entity.name),
            photo_url: ActiveValue::Set(entity.photo_url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with a complete school context.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates a student row holding only an email, as left by a first login.
///
/// Shorthand for `StudentFactory::bare(db).build().await`.
pub async fn create_bare_student(
    db: &DatabaseConnection,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::bare(db).build().await
}
