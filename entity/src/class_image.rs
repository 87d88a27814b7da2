use sea_orm::entity::prelude::*;

/// Location of the image uploaded for a class on a date.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "class_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_code: String,
    pub grade: i32,
    pub class: i32,
    pub date: String,
    pub path: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
