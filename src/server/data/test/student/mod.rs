use crate::server::{data::student::StudentRepository, model::student::UpdateProfileParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_if_absent;
mod find_by_email;
mod update_photo_url;
mod update_profile;
