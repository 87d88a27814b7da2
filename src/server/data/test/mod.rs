mod class_image;
mod diary;
mod personal_schedule;
mod school_directory;
mod student;
