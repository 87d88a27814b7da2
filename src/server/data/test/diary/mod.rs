use crate::server::{
    data::diary::DiaryRepository,
    model::{
        record::{ClassKey, RecordScope},
        student::Student,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod update_content;

fn key_for(student: &entity::student::Model, date: &str, scope: RecordScope) -> ClassKey {
    let context = Student::from_entity(student.clone()).class_context().unwrap();
    ClassKey::new(&context, date, &student.email, scope)
}
