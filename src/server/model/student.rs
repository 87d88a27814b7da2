//! Student domain models and the school context derived from them.
//!
//! A student row is created with only an email at first login. The office, school,
//! grade and class fields are filled in later by a profile update and together form
//! the context that scopes timetable, meal, diary and class image operations.

use crate::{
    model::profile::{ProfileDto, UpdateProfileDto},
    server::{error::AppError, util::parse::require},
};

const PROFILE_FIELDS_REQUIRED: &str = "All fields are required";

/// Registered student.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Email verified by the identity provider; unique key.
    pub email: String,
    /// Regional office code used by the NEIS API.
    pub office: Option<String>,
    pub school_name: Option<String>,
    /// School code within the office.
    pub school_code: Option<String>,
    pub grade: Option<i32>,
    pub class: Option<i32>,
    /// Student number within the class.
    pub number: Option<i32>,
    pub name: Option<String>,
    /// Location of the profile photo, either an uploaded file or the provider's picture URL.
    pub photo_url: Option<String>,
}

/// Office and school of a student; enough for calendar and meal lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolRef {
    pub office: String,
    pub school_code: String,
}

/// Full class context of a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassContext {
    pub school: SchoolRef,
    pub grade: i32,
    pub class: i32,
    pub name: Option<String>,
}

impl Student {
    /// Converts an entity model to a student domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            email: entity.email,
            office: entity.office,
            school_name: entity.school_name,
            school_code: entity.school_code,
            grade: entity.grade,
            class: entity.class,
            number: entity.number,
            name: entity.name,
            photo_url: entity.photo_url,
        }
    }

    /// Projects the office and school code.
    ///
    /// # Returns
    /// - `Some(SchoolRef)` - Both fields are set and non-empty
    /// - `None` - The profile has not been filled in yet
    pub fn school(&self) -> Option<SchoolRef> {
        let office = self.office.as_deref().filter(|v| !v.is_empty())?;
        let school_code = self.school_code.as_deref().filter(|v| !v.is_empty())?;

        Some(SchoolRef {
            office: office.to_string(),
            school_code: school_code.to_string(),
        })
    }

    /// Projects the full class context.
    ///
    /// # Returns
    /// - `Some(ClassContext)` - Office, school code, grade and class are all set
    /// - `None` - Any of them is missing
    pub fn class_context(&self) -> Option<ClassContext> {
        Some(ClassContext {
            school: self.school()?,
            grade: self.grade?,
            class: self.class?,
            name: self.name.clone(),
        })
    }

    /// Converts the student to the profile DTO, defaulting an unset name to `""`.
    pub fn into_profile_dto(self) -> ProfileDto {
        ProfileDto {
            name: self.name.unwrap_or_default(),
            office: self.office,
            school_name: self.school_name,
            grade: self.grade,
            class: self.class,
            num: self.number,
            school_code: self.school_code,
        }
    }
}

/// Parameters for a profile update. Every field is required.
#[derive(Debug, Clone)]
pub struct UpdateProfileParam {
    pub email: String,
    pub name: String,
    pub office: String,
    pub school_name: String,
    pub school_code: String,
    pub grade: i32,
    pub class: i32,
    pub number: i32,
}

impl UpdateProfileParam {
    /// Converts the update DTO, requiring every field.
    pub fn from_dto(payload: UpdateProfileDto) -> Result<Self, AppError> {
        let missing = || AppError::BadRequest(PROFILE_FIELDS_REQUIRED.to_string());

        Ok(Self {
            email: require(payload.email, PROFILE_FIELDS_REQUIRED)?,
            name: require(payload.name, PROFILE_FIELDS_REQUIRED)?,
            office: require(payload.office, PROFILE_FIELDS_REQUIRED)?,
            school_name: require(payload.school_name, PROFILE_FIELDS_REQUIRED)?,
            school_code: require(payload.school_code, PROFILE_FIELDS_REQUIRED)?,
            grade: payload.grade.ok_or_else(missing)?,
            class: payload.class.ok_or_else(missing)?,
            number: payload.num.ok_or_else(missing)?,
        })
    }
}
