use super::*;

/// Tests replacing the profile photo.
///
/// Expected: Ok(1) with the new location stored
#[tokio::test]
async fn replaces_photo_url() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update_photo_url(&student.email, "/profileimg/1700000000000-ab12.png")
        .await?;

    assert_eq!(updated, 1);
    let stored = repo.find_by_email(&student.email).await?.unwrap();
    assert_eq!(
        stored.photo_url.as_deref(),
        Some("/profileimg/1700000000000-ab12.png")
    );

    Ok(())
}

/// Tests replacing the photo of an unknown email.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let updated = repo
        .update_photo_url("nobody@example.com", "/profileimg/x.png")
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
