//! Class image repository.

use sea_orm::{
    sea_query::{Condition, Expr},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::record::{ClassImage, ClassKey};

/// Repository for the image location recorded per class and date.
pub struct ClassImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassImageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the image recorded for `key`, the oldest when several match.
    pub async fn find(&self, key: &ClassKey) -> Result<Option<ClassImage>, DbErr> {
        let entity = entity::prelude::ClassImage::find()
            .filter(key_condition(key))
            .order_by_asc(entity::class_image::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(ClassImage::from_entity))
    }

    /// Records `path` for the class and date of `key`, uploaded by `email`.
    pub async fn create(&self, key: &ClassKey, email: &str, path: &str) -> Result<ClassImage, DbErr> {
        let entity = entity::class_image::ActiveModel {
            school_code: ActiveValue::Set(key.school_code.clone()),
            grade: ActiveValue::Set(key.grade),
            class: ActiveValue::Set(key.class),
            date: ActiveValue::Set(key.date.clone()),
            path: ActiveValue::Set(path.to_string()),
            email: ActiveValue::Set(email.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ClassImage::from_entity(entity))
    }

    /// Points every record matching `key` at `path`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_path(&self, key: &ClassKey, path: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::ClassImage::update_many()
            .filter(key_condition(key))
            .col_expr(
                entity::class_image::Column::Path,
                Expr::value(path.to_string()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn key_condition(key: &ClassKey) -> Condition {
    let condition = Condition::all()
        .add(entity::class_image::Column::SchoolCode.eq(key.school_code.as_str()))
        .add(entity::class_image::Column::Grade.eq(key.grade))
        .add(entity::class_image::Column::Class.eq(key.class))
        .add(entity::class_image::Column::Date.eq(key.date.as_str()));

    match &key.email {
        Some(email) => condition.add(entity::class_image::Column::Email.eq(email.as_str())),
        None => condition,
    }
}
