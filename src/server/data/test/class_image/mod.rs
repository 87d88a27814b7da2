use crate::server::{
    data::class_image::ClassImageRepository,
    model::{
        record::{ClassKey, RecordScope},
        student::Student,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod update_path;

fn key_for(student: &entity::student::Model, date: &str, scope: RecordScope) -> ClassKey {
    let context = Student::from_entity(student.clone()).class_context().unwrap();
    ClassKey::new(&context, date, &student.email, scope)
}
