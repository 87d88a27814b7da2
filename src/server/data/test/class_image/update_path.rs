use super::*;

/// Tests repointing an existing image record.
///
/// Expected: Ok(1) with the new location returned by find
#[tokio::test]
async fn replaces_path() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    factory::create_class_image(db, &student, "2024-03-05").await?;

    let repo = ClassImageRepository::new(db);
    let key = key_for(&student, "2024-03-05", RecordScope::Class);
    let updated = repo.update_path(&key, "/uploads/new.png").await?;

    assert_eq!(updated, 1);
    assert_eq!(repo.find(&key).await?.map(|i| i.path), Some("/uploads/new.png".to_string()));

    Ok(())
}

/// Tests that student scope leaves other authors' records alone.
///
/// Expected: Ok(0) when only a classmate has uploaded
#[tokio::test]
async fn student_scope_skips_other_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_student(db).await?;
    let classmate = factory::create_student(db).await?;
    factory::create_class_image(db, &uploader, "2024-03-05").await?;

    let repo = ClassImageRepository::new(db);
    let updated = repo
        .update_path(
            &key_for(&classmate, "2024-03-05", RecordScope::Student),
            "/uploads/new.png",
        )
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
