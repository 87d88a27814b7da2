//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Connection pools of the logical databases
//! - Clients for the NEIS API and the identity provider, sharing one HTTP client
//! - The file storage backend
//! - Record scoping and schedule defaults from configuration

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    model::record::RecordScope,
    service::{identity::IdentityVerifier, neis::NeisApi},
    storage::StorageBackend,
};

/// Connection pools of the logical databases.
///
/// Several fields may share one pool when their URLs are equal.
#[derive(Clone)]
pub struct Databases {
    /// Student profiles; also the source of every school context.
    pub student: DatabaseConnection,
    pub personal: DatabaseConnection,
    pub diary: DatabaseConnection,
    pub image: DatabaseConnection,
    /// Per-office school directory tables.
    pub directory: DatabaseConnection,
}

impl Databases {
    /// Uses one pool for every logical database.
    #[cfg(test)]
    pub fn shared(db: DatabaseConnection) -> Self {
        Self {
            student: db.clone(),
            personal: db.clone(),
            diary: db.clone(),
            image: db.clone(),
            directory: db,
        }
    }

    /// Closes every pool, waiting for checked-out connections to be returned.
    ///
    /// A pool shared by several fields is closed repeatedly, which is a no-op after
    /// the first time.
    pub async fn close(self) -> Result<(), DbErr> {
        for db in [
            self.student,
            self.personal,
            self.diary,
            self.image,
            self.directory,
        ] {
            db.close().await?;
        }
        Ok(())
    }
}

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - integrations are behind `Arc` and share one `reqwest::Client`
#[derive(Clone)]
pub struct AppState {
    pub dbs: Databases,

    pub neis: Arc<dyn NeisApi>,
    pub identity: Arc<dyn IdentityVerifier>,
    pub storage: Arc<dyn StorageBackend>,

    /// Whether diary entries and class images are shared per class or kept per student.
    pub record_scope: RecordScope,
    /// Year queried when the caller gives no calendar or timetable window.
    pub schedule_year: i32,
    /// Department sent with timetable queries.
    pub neis_department: Option<String>,
}
