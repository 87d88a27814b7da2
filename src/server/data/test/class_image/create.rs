use super::*;

/// Tests recording an uploaded image.
///
/// Expected: Ok with the location stored for the class and date
#[tokio::test]
async fn records_image_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let key = key_for(&student, "2024-03-05", RecordScope::Class);

    let repo = ClassImageRepository::new(db);
    let image = repo.create(&key, &student.email, "/uploads/a.png").await?;

    assert_eq!(image.path, "/uploads/a.png");
    assert_eq!(repo.find(&key).await?.map(|i| i.path), Some("/uploads/a.png".to_string()));

    Ok(())
}
