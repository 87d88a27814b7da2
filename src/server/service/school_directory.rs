//! Paged listing of the per-office school directories.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::school_directory::SchoolDirectoryRepository,
    error::AppError,
    model::school_directory::{ListSchoolsParam, SchoolDirectoryRow},
};

pub struct SchoolDirectoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolDirectoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists page `page` of the directory of `office`, `limit` schools per page.
    ///
    /// The office code names a table, so it must be a plain identifier.
    ///
    /// # Returns
    /// - `Ok(Vec<SchoolDirectoryRow>)` - Schools on the page
    /// - `Err(AppError::BadRequest)` - Invalid office code, `page` or `limit` below 1
    /// - `Err(AppError::DbErr)` - Database error, including unknown offices
    pub async fn list(
        &self,
        office: &str,
        page: u64,
        limit: u64,
    ) -> Result<Vec<SchoolDirectoryRow>, AppError> {
        let param = list_param(office, page, limit)?;

        Ok(SchoolDirectoryRepository::new(self.db).list(&param).await?)
    }
}

fn list_param(office: &str, page: u64, limit: u64) -> Result<ListSchoolsParam, AppError> {
    let valid_office = !office.is_empty()
        && office
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if !valid_office {
        return Err(AppError::BadRequest("Invalid office code".to_string()));
    }
    if page < 1 || limit < 1 {
        return Err(AppError::BadRequest(
            "page and limit must be at least 1".to_string(),
        ));
    }
    let offset = (page - 1)
        .checked_mul(limit)
        .ok_or_else(|| AppError::BadRequest("page is out of range".to_string()))?;

    Ok(ListSchoolsParam {
        table: office.to_ascii_lowercase(),
        limit,
        offset,
    })
}
