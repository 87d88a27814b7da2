//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod identity;
pub mod personal_schedule;
pub mod record;
pub mod schedule;
pub mod school_directory;
pub mod student;
pub mod upload;
