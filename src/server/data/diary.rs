//! Class diary repository.
//!
//! Entries are looked up by `ClassKey`. When the key carries an email the lookup and
//! update are additionally restricted to that author.

use sea_orm::{
    sea_query::{Condition, Expr},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::record::{ClassKey, DiaryEntry};

/// Repository for class diary entries.
pub struct DiaryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiaryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a diary entry for the class and date of `key`, written by `email`.
    ///
    /// # Returns
    /// - `Ok(DiaryEntry)` - Stored entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        key: &ClassKey,
        email: &str,
        content: &str,
    ) -> Result<DiaryEntry, DbErr> {
        let entity = entity::diary::ActiveModel {
            school_code: ActiveValue::Set(key.school_code.clone()),
            grade: ActiveValue::Set(key.grade),
            class: ActiveValue::Set(key.class),
            date: ActiveValue::Set(key.date.clone()),
            content: ActiveValue::Set(content.to_string()),
            email: ActiveValue::Set(email.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DiaryEntry::from_entity(entity))
    }

    /// Finds the entry for `key`.
    ///
    /// When several entries match, the oldest one is returned.
    ///
    /// # Returns
    /// - `Ok(Some(DiaryEntry))` - Entry found
    /// - `Ok(None)` - Nothing written for that class and date
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, key: &ClassKey) -> Result<Option<DiaryEntry>, DbErr> {
        let entity = entity::prelude::Diary::find()
            .filter(key_condition(key))
            .order_by_asc(entity::diary::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(DiaryEntry::from_entity))
    }

    /// Replaces the content of every entry matching `key`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries updated, `0` when none exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_content(&self, key: &ClassKey, content: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Diary::update_many()
            .filter(key_condition(key))
            .col_expr(
                entity::diary::Column::Content,
                Expr::value(content.to_string()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn key_condition(key: &ClassKey) -> Condition {
    let condition = Condition::all()
        .add(entity::diary::Column::SchoolCode.eq(key.school_code.as_str()))
        .add(entity::diary::Column::Grade.eq(key.grade))
        .add(entity::diary::Column::Class.eq(key.class))
        .add(entity::diary::Column::Date.eq(key.date.as_str()));

    match &key.email {
        Some(email) => condition.add(entity::diary::Column::Email.eq(email.as_str())),
        None => condition,
    }
}
