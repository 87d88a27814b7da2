//! SeaORM entities for the school companion database.

pub mod prelude;

pub mod class_image;
pub mod diary;
pub mod personal_schedule;
pub mod student;
