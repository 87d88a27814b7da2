//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Resolving the student's school context and applying record scoping
//! - **Orchestration**: Coordinating repository calls, NEIS requests and file storage
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Outbound integrations sit behind the `NeisApi`, `IdentityVerifier` and
//! `StorageBackend` traits so they can be replaced in tests.

pub mod context;
pub mod diary;
pub mod identity;
pub mod neis;
pub mod personal_schedule;
pub mod profile;
pub mod schedule;
pub mod school_directory;
pub mod upload;
