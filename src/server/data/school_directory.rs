//! School directory repository.
//!
//! Each regional office has its own directory table, named after the lower-cased office
//! code, with Korean column names. The table name is only known at request time, so the
//! query is built with sea-query instead of an entity model.

use sea_orm::{
    sea_query::{Alias, Expr, Query},
    ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult,
};

use crate::server::model::school_directory::{ListSchoolsParam, SchoolDirectoryRow};

const SCHOOL_NAME_COLUMN: &str = "학교명";
const ADMINISTRATIVE_CODE_COLUMN: &str = "행정표준코드";

#[derive(Debug, FromQueryResult)]
struct SchoolQueryResult {
    school_name: String,
    administrative_code: String,
}

/// Repository reading the per-office school directory tables.
pub struct SchoolDirectoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolDirectoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of schools from `param.table`.
    ///
    /// `param.table` must already be validated as a plain identifier. Rows come back in
    /// the table's natural order.
    ///
    /// # Returns
    /// - `Ok(Vec<SchoolDirectoryRow>)` - Schools on the requested page, possibly empty
    /// - `Err(DbErr)` - Database error, including a missing table for unknown offices
    pub async fn list(&self, param: &ListSchoolsParam) -> Result<Vec<SchoolDirectoryRow>, DbErr> {
        let stmt = Query::select()
            .expr_as(
                Expr::col(Alias::new(SCHOOL_NAME_COLUMN)),
                Alias::new("school_name"),
            )
            .expr_as(
                Expr::col(Alias::new(ADMINISTRATIVE_CODE_COLUMN)),
                Alias::new("administrative_code"),
            )
            .from(Alias::new(param.table.as_str()))
            .limit(param.limit)
            .offset(param.offset)
            .to_owned();

        let backend = self.db.get_database_backend();
        let rows = SchoolQueryResult::find_by_statement(backend.build(&stmt))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| SchoolDirectoryRow {
                school_name: row.school_name,
                administrative_code: row.administrative_code,
            })
            .collect())
    }
}
