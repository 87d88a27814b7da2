use sea_orm::entity::prelude::*;

/// Class diary entry. Shared by every student of the same class on a date.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "diary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_code: String,
    pub grade: i32,
    pub class: i32,
    pub date: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
