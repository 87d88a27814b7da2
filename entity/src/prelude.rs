pub use super::class_image::Entity as ClassImage;
pub use super::diary::Entity as Diary;
pub use super::personal_schedule::Entity as PersonalSchedule;
pub use super::student::Entity as Student;
