//! Diary factory for creating class diary entries.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for diary entries scoped to a student's class.
///
/// The school code, grade and class are copied from the student; unset profile fields
/// fall back to empty values.
pub struct DiaryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::diary::Model,
}

impl<'a> DiaryFactory<'a> {
    /// Creates a new factory for an entry written by `student`.
    ///
    /// Defaults:
    /// - date: `"2024-03-05"`
    /// - content: `"Diary {id}"`
    pub fn new(db: &'a DatabaseConnection, student: &entity::student::Model) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::diary::Model {
                id: 0,
                school_code: student.school_code.clone().unwrap_or_default(),
                grade: student.grade.unwrap_or_default(),
                class: student.class.unwrap_or_default(),
                date: "2024-03-05".to_string(),
                content: format!("Diary {}", id),
                email: student.email.clone(),
            },
        }
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.entity.date = date.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.entity.content = content.into();
        self
    }

    /// Builds and inserts the diary entry.
    ///
    /// # Returns
    /// - `Ok(entity::diary::Model)` - Created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::diary::Model, DbErr> {
        let entity = self.entity;
        entity::diary::ActiveModel {
            school_code: ActiveValue::Set(entity.school_code),
            grade: ActiveValue::Set(entity.grade),
            class: ActiveValue::Set(entity.class),
            date: ActiveValue::Set(entity.date),
            content: ActiveValue::Set(entity.content),
            email: ActiveValue::Set(entity.email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a diary entry for `student`'s class on `date`.
pub async fn create_diary(
    db: &DatabaseConnection,
    student: &entity::student::Model,
    date: &str,
) -> Result<entity::diary::Model, DbErr> {
    DiaryFactory::new(db, student).date(date).build().await
}
