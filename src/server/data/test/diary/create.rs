use super::*;

/// Tests writing a diary entry for a class.
///
/// Expected: Ok with entry stored under the class and date
#[tokio::test]
async fn creates_entry_for_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let key = key_for(&student, "2024-03-05", RecordScope::Class);

    let repo = DiaryRepository::new(db);
    let entry = repo.create(&key, &student.email, "Field trip").await?;

    assert_eq!(entry.date, "2024-03-05");
    assert_eq!(entry.content, "Field trip");
    assert_eq!(entry.email, student.email);

    Ok(())
}
