pub use sea_orm_migration::prelude::*;

mod m20240901_000001_create_student_table;
mod m20240901_000002_create_personal_schedule_table;
mod m20240902_000003_create_diary_table;
mod m20240902_000004_create_class_image_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_student_table::Migration),
            Box::new(m20240901_000002_create_personal_schedule_table::Migration),
            Box::new(m20240902_000003_create_diary_table::Migration),
            Box::new(m20240902_000004_create_class_image_table::Migration),
        ]
    }
}
