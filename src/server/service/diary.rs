//! Class diary entries.
//!
//! Entries are keyed by the caller's class and a date. Under the default class
//! scope any student of the class reads and overwrites the same entry.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::diary::DiaryRepository,
    error::AppError,
    model::record::{ClassKey, DiaryEntry, RecordScope},
    service::context::StudentContextResolver,
};

pub struct DiaryService<'a> {
    student_db: &'a DatabaseConnection,
    diary_db: &'a DatabaseConnection,
    scope: RecordScope,
}

impl<'a> DiaryService<'a> {
    /// Creates a new DiaryService.
    ///
    /// # Arguments
    /// - `student_db` - Connection holding student rows
    /// - `diary_db` - Connection holding diary entries
    /// - `scope` - Whether entries are shared per class or kept per student
    pub fn new(
        student_db: &'a DatabaseConnection,
        diary_db: &'a DatabaseConnection,
        scope: RecordScope,
    ) -> Self {
        Self {
            student_db,
            diary_db,
            scope,
        }
    }

    async fn key(&self, email: &str, date: &str) -> Result<ClassKey, AppError> {
        let context = StudentContextResolver::new(self.student_db)
            .resolve_class(email)
            .await?;

        Ok(ClassKey::new(&context, date, email, self.scope))
    }

    /// Writes a new entry for the caller's class on `date`.
    ///
    /// No existence check is made; a second add for the same date stores a second row.
    pub async fn add(&self, email: &str, date: &str, content: &str) -> Result<DiaryEntry, AppError> {
        let key = self.key(email, date).await?;

        Ok(DiaryRepository::new(self.diary_db)
            .create(&key, email, content)
            .await?)
    }

    /// Replaces the content of the entry for the caller's class on `date`.
    ///
    /// # Returns
    /// - `Ok(())` - Entry updated
    /// - `Err(AppError::NotFound)` - Unknown student, incomplete profile or no entry
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, email: &str, date: &str, content: &str) -> Result<(), AppError> {
        let key = self.key(email, date).await?;
        let repo = DiaryRepository::new(self.diary_db);

        if repo.find(&key).await?.is_none() {
            return Err(AppError::NotFound("Diary entry not found".to_string()));
        }
        repo.update_content(&key, content).await?;

        Ok(())
    }

    /// Reads the entry for the caller's class on `date`.
    ///
    /// # Returns
    /// - `Ok(DiaryEntry)` - First matching entry
    /// - `Err(AppError::NotFound)` - Unknown student, incomplete profile or no entry
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, email: &str, date: &str) -> Result<DiaryEntry, AppError> {
        let key = self.key(email, date).await?;

        DiaryRepository::new(self.diary_db)
            .find(&key)
            .await?
            .ok_or_else(|| AppError::NotFound("Diary entry not found".to_string()))
    }
}
