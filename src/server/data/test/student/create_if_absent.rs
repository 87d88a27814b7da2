use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests first registration of an email.
///
/// Verifies that the row holds only the email and photo URL.
///
/// Expected: Ok with bare row stored
#[tokio::test]
async fn creates_bare_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    repo.create_if_absent(
        "kim@example.com",
        Some("https://example.com/kim.png".to_string()),
    )
    .await?;

    let student = repo.find_by_email("kim@example.com").await?.unwrap();
    assert_eq!(
        student.photo_url.as_deref(),
        Some("https://example.com/kim.png")
    );
    assert!(student.school().is_none());

    Ok(())
}

/// Tests registering an email twice.
///
/// Verifies that the second call neither fails nor overwrites the existing profile.
///
/// Expected: Ok with a single unchanged row
#[tokio::test]
async fn leaves_existing_row_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::student::StudentFactory::new(db)
        .photo_url("/profileimg/old.png")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    repo.create_if_absent(&existing.email, Some("https://example.com/new.png".to_string()))
        .await?;

    let count = entity::prelude::Student::find().count(db).await?;
    assert_eq!(count, 1);

    let student = repo.find_by_email(&existing.email).await?.unwrap();
    assert_eq!(student.photo_url.as_deref(), Some("/profileimg/old.png"));
    assert_eq!(student.school_code, existing.school_code);

    Ok(())
}
