//! School directory models.

use crate::model::school::SchoolDto;

/// One school listed in an office's directory table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolDirectoryRow {
    pub school_name: String,
    pub administrative_code: String,
}

impl SchoolDirectoryRow {
    pub fn into_dto(self) -> SchoolDto {
        SchoolDto {
            school_name: self.school_name,
            administrative_code: self.administrative_code,
        }
    }
}

/// Validated paging request for an office directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSchoolsParam {
    /// Directory table name, the lower-cased office code.
    pub table: String,
    pub limit: u64,
    pub offset: u64,
}
