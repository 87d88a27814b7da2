use super::*;

/// Tests that a classmate reads an entry written by someone else.
///
/// Expected: Ok(Some) for the classmate under class scope
#[tokio::test]
async fn classmates_share_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_student(db).await?;
    let classmate = factory::create_student(db).await?;
    factory::diary::DiaryFactory::new(db, &author)
        .date("2024-03-05")
        .content("Sports day")
        .build()
        .await?;

    let repo = DiaryRepository::new(db);
    let entry = repo
        .find(&key_for(&classmate, "2024-03-05", RecordScope::Class))
        .await?;

    assert_eq!(entry.map(|e| e.content), Some("Sports day".to_string()));

    Ok(())
}

/// Tests that student scope hides entries of other authors.
///
/// Expected: Ok(None) for the classmate, Ok(Some) for the author
#[tokio::test]
async fn student_scope_filters_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_student(db).await?;
    let classmate = factory::create_student(db).await?;
    factory::create_diary(db, &author, "2024-03-05").await?;

    let repo = DiaryRepository::new(db);

    assert!(repo
        .find(&key_for(&classmate, "2024-03-05", RecordScope::Student))
        .await?
        .is_none());
    assert!(repo
        .find(&key_for(&author, "2024-03-05", RecordScope::Student))
        .await?
        .is_some());

    Ok(())
}

/// Tests that other classes and dates are not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_classes_and_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let other_class = factory::student::StudentFactory::new(db)
        .class(2)
        .build()
        .await?;
    factory::create_diary(db, &other_class, "2024-03-05").await?;
    factory::create_diary(db, &student, "2024-03-06").await?;

    let repo = DiaryRepository::new(db);
    let entry = repo
        .find(&key_for(&student, "2024-03-05", RecordScope::Class))
        .await?;

    assert!(entry.is_none());

    Ok(())
}
