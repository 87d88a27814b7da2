use super::*;

/// Tests finding an image recorded by a classmate.
///
/// Expected: Ok(Some) under class scope
#[tokio::test]
async fn finds_classmate_upload() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_student(db).await?;
    let classmate = factory::create_student(db).await?;
    factory::class_image::ClassImageFactory::new(db, &uploader)
        .date("2024-03-05")
        .path("/uploads/board.jpg")
        .build()
        .await?;

    let repo = ClassImageRepository::new(db);
    let image = repo
        .find(&key_for(&classmate, "2024-03-05", RecordScope::Class))
        .await?;

    assert_eq!(image.map(|i| i.path), Some("/uploads/board.jpg".to_string()));

    Ok(())
}

/// Tests looking up a date without an image.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    factory::create_class_image(db, &student, "2024-03-05").await?;

    let repo = ClassImageRepository::new(db);
    let image = repo
        .find(&key_for(&student, "2024-03-06", RecordScope::Class))
        .await?;

    assert!(image.is_none());

    Ok(())
}
