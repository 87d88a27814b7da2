//! Class image factory for creating image path records.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for class image records scoped to a student's class.
pub struct ClassImageFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::class_image::Model,
}

impl<'a> ClassImageFactory<'a> {
    /// Creates a new factory for an image uploaded by `student`.
    ///
    /// Defaults:
    /// - date: `"2024-03-05"`
    /// - path: `"/uploads/{id}.png"`
    pub fn new(db: &'a DatabaseConnection, student: &entity::student::Model) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::class_image::Model {
                id: 0,
                school_code: student.school_code.clone().unwrap_or_default(),
                grade: student.grade.unwrap_or_default(),
                class: student.class.unwrap_or_default(),
                date: "2024-03-05".to_string(),
                path: format!("/uploads/{}.png", id),
                email: student.email.clone(),
            },
        }
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.entity.date = date.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.entity.path = path.into();
        self
    }

    /// Builds and inserts the class image record.
    ///
    /// # Returns
    /// - `Ok(entity::class_image::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::class_image::Model, DbErr> {
        let entity = self.entity;
        entity::class_image::ActiveModel {
            school_code: ActiveValue::Set(entity.school_code),
            grade: ActiveValue::Set(entity.grade),
            class: ActiveValue::Set(entity.class),
            date: ActiveValue::Set(entity.date),
            path: ActiveValue::Set(entity.path),
            email: ActiveValue::Set(entity.email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a class image record for `student`'s class on `date`.
pub async fn create_class_image(
    db: &DatabaseConnection,
    student: &entity::student::Model,
    date: &str,
) -> Result<entity::class_image::Model, DbErr> {
    ClassImageFactory::new(db, student).date(date).build().await
}
