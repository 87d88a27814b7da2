//! Class-scoped record models shared by diary entries and class images.
//!
//! Diary entries and class images are keyed by school, grade, class and date. With the
//! default `RecordScope::Class` every student of a class reads and overwrites the same
//! record for a date. `RecordScope::Student` adds the author's email to the key.

use std::str::FromStr;

use crate::server::model::student::ClassContext;

/// How diary and class image records are partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordScope {
    /// One record per class and date, shared by all of its students.
    #[default]
    Class,
    /// One record per class, date and author.
    Student,
}

impl FromStr for RecordScope {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "student" => Ok(Self::Student),
            other => Err(other.to_string()),
        }
    }
}

/// Lookup key of a class-scoped record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassKey {
    pub school_code: String,
    pub grade: i32,
    pub class: i32,
    pub date: String,
    /// Author filter, only set under `RecordScope::Student`.
    pub email: Option<String>,
}

impl ClassKey {
    /// Builds the key of `context`'s class on `date` according to `scope`.
    pub fn new(context: &ClassContext, date: &str, email: &str, scope: RecordScope) -> Self {
        Self {
            school_code: context.school.school_code.clone(),
            grade: context.grade,
            class: context.class,
            date: date.to_string(),
            email: match scope {
                RecordScope::Class => None,
                RecordScope::Student => Some(email.to_string()),
            },
        }
    }
}

/// Diary entry written for a class on a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    pub id: i32,
    pub date: String,
    pub content: String,
    pub email: String,
}

impl DiaryEntry {
    pub fn from_entity(entity: entity::diary::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            content: entity.content,
            email: entity.email,
        }
    }
}

/// Stored image location for a class on a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassImage {
    pub id: i32,
    pub date: String,
    pub path: String,
    pub email: String,
}

impl ClassImage {
    pub fn from_entity(entity: entity::class_image::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            path: entity.path,
            email: entity.email,
        }
    }
}

/// Outcome of binding an uploaded class image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageBinding {
    /// A record for the class and date already existed and now points at the new file.
    Updated(String),
    /// A new record was created.
    Inserted(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::student::SchoolRef;

    fn context() -> ClassContext {
        ClassContext {
            school: SchoolRef {
                office: "B10".into(),
                school_code: "7010000".into(),
            },
            grade: 2,
            class: 3,
            name: None,
        }
    }

    #[test]
    fn class_scope_leaves_author_out_of_key() {
        let key = ClassKey::new(&context(), "2024-03-05", "kim@example.com", RecordScope::Class);

        assert_eq!(key.email, None);
        assert_eq!(key.grade, 2);
        assert_eq!(key.class, 3);
    }

    #[test]
    fn student_scope_adds_author_to_key() {
        let key = ClassKey::new(
            &context(),
            "2024-03-05",
            "kim@example.com",
            RecordScope::Student,
        );

        assert_eq!(key.email.as_deref(), Some("kim@example.com"));
    }

    #[test]
    fn parses_scope_names() {
        assert_eq!("class".parse::<RecordScope>(), Ok(RecordScope::Class));
        assert_eq!(" Student ".parse::<RecordScope>(), Ok(RecordScope::Student));
        assert!("school".parse::<RecordScope>().is_err());
    }
}
