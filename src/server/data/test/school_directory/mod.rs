use crate::server::{
    data::school_directory::SchoolDirectoryRepository,
    model::school_directory::ListSchoolsParam,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod list;
