//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! The school directory has no entity model and is queried through sea-query directly.

pub mod class_image;
pub mod diary;
pub mod personal_schedule;
pub mod school_directory;
pub mod student;

#[cfg(test)]
mod test;
