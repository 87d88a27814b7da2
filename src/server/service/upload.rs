//! Binding of stored uploads to class image records and profile photos.
//!
//! The binder only sees the location string returned by the storage backend. Class
//! images are bound per class and date: the existing record is repointed, otherwise
//! a new one is inserted. Profile photos are bound to the student's email.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{class_image::ClassImageRepository, student::StudentRepository},
    error::AppError,
    model::{
        record::{ClassKey, ImageBinding, RecordScope},
        upload::{ProfilePhoto, UploadedFile},
    },
    service::context::StudentContextResolver,
    storage::{StorageBackend, UploadFolder},
};

pub struct UploadService<'a> {
    student_db: &'a DatabaseConnection,
    image_db: &'a DatabaseConnection,
    storage: &'a dyn StorageBackend,
    scope: RecordScope,
}

impl<'a> UploadService<'a> {
    /// Creates a new UploadService.
    ///
    /// # Arguments
    /// - `student_db` - Connection holding student rows
    /// - `image_db` - Connection holding class image records
    /// - `storage` - Backend receiving the uploaded bytes
    /// - `scope` - Whether class images are shared per class or kept per student
    pub fn new(
        student_db: &'a DatabaseConnection,
        image_db: &'a DatabaseConnection,
        storage: &'a dyn StorageBackend,
        scope: RecordScope,
    ) -> Self {
        Self {
            student_db,
            image_db,
            storage,
            scope,
        }
    }

    /// Stores a class image and binds it to the caller's class on `date`.
    ///
    /// The student is resolved before anything is written, so an unknown caller
    /// leaves no file behind.
    ///
    /// # Returns
    /// - `Ok(ImageBinding)` - Whether an existing record was repointed or a new one inserted
    /// - `Err(AppError::NotFound)` - Unknown student, incomplete profile, or the record
    ///   vanished between check and update
    /// - `Err(AppError::StorageErr)` - File could not be stored
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn upload_class_image(
        &self,
        email: &str,
        date: &str,
        file: UploadedFile,
    ) -> Result<ImageBinding, AppError> {
        let context = StudentContextResolver::new(self.student_db)
            .resolve_class(email)
            .await?;
        let key = ClassKey::new(&context, date, email, self.scope);

        let location = self
            .storage
            .store(UploadFolder::Uploads, &file.file_name, file.bytes)
            .await?;

        self.bind_class_image(&key, email, location).await
    }

    /// Binds a stored location to the class and date of `key`.
    pub async fn bind_class_image(
        &self,
        key: &ClassKey,
        email: &str,
        location: String,
    ) -> Result<ImageBinding, AppError> {
        let repo = ClassImageRepository::new(self.image_db);

        if repo.find(key).await?.is_some() {
            let updated = repo.update_path(key, &location).await?;
            if updated == 0 {
                return Err(AppError::NotFound("Class image not found".to_string()));
            }
            tracing::info!("Replaced class image for {} on {}", key.school_code, key.date);
            return Ok(ImageBinding::Updated(location));
        }

        repo.create(key, email, &location).await?;
        tracing::info!("Recorded class image for {} on {}", key.school_code, key.date);

        Ok(ImageBinding::Inserted(location))
    }

    /// Returns the image location recorded for the caller's class on `date`.
    ///
    /// # Returns
    /// - `Ok(String)` - Stored location
    /// - `Err(AppError::NotFound)` - Unknown student, incomplete profile or no image
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn class_image(&self, email: &str, date: &str) -> Result<String, AppError> {
        let context = StudentContextResolver::new(self.student_db)
            .resolve_class(email)
            .await?;
        let key = ClassKey::new(&context, date, email, self.scope);

        ClassImageRepository::new(self.image_db)
            .find(&key)
            .await?
            .map(|image| image.path)
            .ok_or_else(|| AppError::NotFound("Class image not found".to_string()))
    }

    /// Stores a profile photo and points the student's photo URL at it.
    ///
    /// # Returns
    /// - `Ok(String)` - Stored location
    /// - `Err(AppError::NotFound)` - No student with that email
    /// - `Err(AppError::StorageErr)` - File could not be stored
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn upload_profile_photo(
        &self,
        email: &str,
        file: UploadedFile,
    ) -> Result<String, AppError> {
        StudentContextResolver::new(self.student_db)
            .resolve(email)
            .await?;

        let location = self
            .storage
            .store(UploadFolder::ProfileImg, &file.file_name, file.bytes)
            .await?;

        self.bind_profile_photo(email, &location).await?;

        Ok(location)
    }

    /// Points the photo URL of `email` at `location`.
    pub async fn bind_profile_photo(&self, email: &str, location: &str) -> Result<(), AppError> {
        let updated = StudentRepository::new(self.student_db)
            .update_photo_url(email, location)
            .await?;
        if updated == 0 {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        Ok(())
    }

    /// Loads the profile photo of `email`.
    ///
    /// Photos outside the storage backend, such as the identity provider's picture,
    /// are returned as external URLs for the caller to redirect to.
    ///
    /// # Returns
    /// - `Ok(ProfilePhoto)` - Stored bytes or external URL
    /// - `Err(AppError::NotFound)` - Unknown student, no photo, or missing file
    /// - `Err(AppError::StorageErr)` - File could not be read
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn profile_photo(&self, email: &str) -> Result<ProfilePhoto, AppError> {
        let student = StudentContextResolver::new(self.student_db)
            .resolve(email)
            .await?;
        let location = student
            .photo_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::NotFound("Profile photo not found".to_string()))?;

        if !self.storage.owns(&location) {
            if location.starts_with("http://") || location.starts_with("https://") {
                return Ok(ProfilePhoto::External(location));
            }
            tracing::warn!("Profile photo of {} points to unknown location {}", email, location);
            return Err(AppError::NotFound("Profile photo not found".to_string()));
        }

        let bytes = self
            .storage
            .fetch(&location)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile photo not found".to_string()))?;
        let content_type = mime_guess::from_path(&location)
            .first_or_octet_stream()
            .to_string();

        Ok(ProfilePhoto::Stored {
            content_type,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use async_trait::async_trait;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::server::error::storage::StorageError;

    /// In-memory storage handing out `/{folder}/{n}-{name}` locations.
    #[derive(Default)]
    struct MemoryStorage {
        files: Mutex<HashMap<String, Vec<u8>>>,
    }

    #[async_trait]
    impl StorageBackend for MemoryStorage {
        async fn store(
            &self,
            folder: UploadFolder,
            original_name: &str,
            bytes: Vec<u8>,
        ) -> Result<String, StorageError> {
            let mut files = self.files.lock().unwrap();
            let location = format!("/{}/{}-{}", folder.as_str(), files.len(), original_name);
            files.insert(location.clone(), bytes);
            Ok(location)
        }

        fn owns(&self, location: &str) -> bool {
            location.starts_with("/uploads/") || location.starts_with("/profileimg/")
        }

        async fn fetch(&self, location: &str) -> Result<Option<Vec<u8>>, StorageError> {
            Ok(self.files.lock().unwrap().get(location).cloned())
        }
    }

    fn file(name: &str) -> UploadedFile {
        UploadedFile {
            file_name: name.to_string(),
            bytes: b"bytes".to_vec(),
        }
    }

    #[tokio::test]
    async fn second_upload_repoints_existing_record() -> Result<(), AppError> {
        let test = TestBuilder::new().with_record_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let student = factory::create_student(db).await?;
        let classmate = factory::create_student(db).await?;
        let storage = MemoryStorage::default();

        let service = UploadService::new(db, db, &storage, RecordScope::Class);
        let first = service
            .upload_class_image(&student.email, "2024-03-05", file("a.png"))
            .await?;
        let second = service
            .upload_class_image(&classmate.email, "2024-03-05", file("b.png"))
            .await?;

        assert_eq!(first, ImageBinding::Inserted("/uploads/0-a.png".to_string()));
        assert_eq!(second, ImageBinding::Updated("/uploads/1-b.png".to_string()));
        assert_eq!(entity::prelude::ClassImage::find().count(db).await?, 1);
        assert_eq!(
            service.class_image(&student.email, "2024-03-05").await?,
            "/uploads/1-b.png"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_student_stores_nothing() -> Result<(), AppError> {
        let test = TestBuilder::new().with_record_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let storage = MemoryStorage::default();

        let service = UploadService::new(db, db, &storage, RecordScope::Class);
        let result = service
            .upload_class_image("nobody@example.com", "2024-03-05", file("a.png"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(storage.files.lock().unwrap().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn missing_class_image_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new().with_record_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let student = factory::create_student(db).await?;
        let storage = MemoryStorage::default();

        let service = UploadService::new(db, db, &storage, RecordScope::Class);

        assert!(matches!(
            service.class_image(&student.email, "2024-03-05").await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn profile_photo_round_trips_through_storage() -> Result<(), AppError> {
        let test = TestBuilder::new().with_record_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let student = factory::create_student(db).await?;
        let storage = MemoryStorage::default();

        let service = UploadService::new(db, db, &storage, RecordScope::Class);
        let location = service
            .upload_profile_photo(&student.email, file("me.png"))
            .await?;

        assert_eq!(location, "/profileimg/0-me.png");
        assert_eq!(
            service.profile_photo(&student.email).await?,
            ProfilePhoto::Stored {
                content_type: "image/png".to_string(),
                bytes: b"bytes".to_vec(),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn profile_photo_for_unknown_student_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new().with_record_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let storage = MemoryStorage::default();

        let service = UploadService::new(db, db, &storage, RecordScope::Class);

        assert!(matches!(
            service
                .upload_profile_photo("nobody@example.com", file("me.png"))
                .await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.bind_profile_photo("nobody@example.com", "/profileimg/x.png").await,
            Err(AppError::NotFound(_))
        ));
        assert!(storage.files.lock().unwrap().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn provider_picture_is_external() -> Result<(), AppError> {
        let test = TestBuilder::new().with_record_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let student = factory::student::StudentFactory::new(db)
            .photo_url("https://lh3.googleusercontent.com/a/kim")
            .build()
            .await?;
        let bare = factory::create_bare_student(db).await?;
        let storage = MemoryStorage::default();

        let service = UploadService::new(db, db, &storage, RecordScope::Class);

        assert_eq!(
            service.profile_photo(&student.email).await?,
            ProfilePhoto::External("https://lh3.googleusercontent.com/a/kim".to_string())
        );
        assert!(matches!(
            service.profile_photo(&bare.email).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn missing_stored_file_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new().with_record_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let student = factory::student::StudentFactory::new(db)
            .photo_url("/profileimg/gone.png")
            .build()
            .await?;
        let storage = MemoryStorage::default();

        let service = UploadService::new(db, db, &storage, RecordScope::Class);

        assert!(matches!(
            service.profile_photo(&student.email).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
