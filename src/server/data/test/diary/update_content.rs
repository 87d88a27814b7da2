use super::*;

/// Tests overwriting the entry of a class.
///
/// Expected: Ok(1) with new content visible to the class
#[tokio::test]
async fn overwrites_class_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_student(db).await?;
    let classmate = factory::create_student(db).await?;
    factory::create_diary(db, &author, "2024-03-05").await?;

    let repo = DiaryRepository::new(db);
    let key = key_for(&classmate, "2024-03-05", RecordScope::Class);
    let updated = repo.update_content(&key, "Rewritten").await?;

    assert_eq!(updated, 1);
    assert_eq!(
        repo.find(&key).await?.map(|e| e.content),
        Some("Rewritten".to_string())
    );

    Ok(())
}

/// Tests updating when no entry exists for the date.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = DiaryRepository::new(db);
    let updated = repo
        .update_content(&key_for(&student, "2024-03-05", RecordScope::Class), "x")
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
