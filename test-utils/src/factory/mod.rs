//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Student with a complete school context
//!     let student = factory::create_student(&db).await?;
//!
//!     // Diary entry for that student's class
//!     let entry = factory::diary::DiaryFactory::new(&db, &student)
//!         .date("2024-03-05")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `student` - Create student entities (complete profile or bare login rows)
//! - `personal_schedule` - Create personal schedule entries
//! - `diary` - Create class diary entries
//! - `class_image` - Create class image records

pub mod class_image;
pub mod diary;
pub mod helpers;
pub mod personal_schedule;
pub mod student;

// Re-export commonly used factory functions for concise usage
pub use class_image::create_class_image;
pub use diary::create_diary;
pub use personal_schedule::create_personal_schedule;
pub use student::{create_bare_student, create_student};
