use sea_orm::entity::prelude::*;

/// Registered student, keyed by the email verified at login.
///
/// Every field besides `email` stays unset until the profile is filled in.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    pub office: Option<String>,
    pub school_name: Option<String>,
    pub school_code: Option<String>,
    pub grade: Option<i32>,
    pub class: Option<i32>,
    pub number: Option<i32>,
    pub name: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
