use super::*;

/// Tests finding a student with a complete profile.
///
/// Expected: Ok(Some) with every profile field mapped
#[tokio::test]
async fn finds_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let student = repo.find_by_email(&created.email).await?.unwrap();

    assert_eq!(student.email, created.email);
    assert_eq!(student.office, created.office);
    assert_eq!(student.school_code, created.school_code);
    assert_eq!(student.grade, Some(1));
    assert!(student.class_context().is_some());

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.find_by_email("nobody@example.com").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests querying without the student table.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.find_by_email("kim@example.com").await;

    assert!(result.is_err());

    Ok(())
}
