use super::*;

/// Tests storing a personal schedule entry.
///
/// Expected: Ok with the entry returned and listed for its owner
#[tokio::test]
async fn creates_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PersonalSchedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonalScheduleRepository::new(db);
    let created = repo
        .create(PersonalSchedule {
            email: "kim@example.com".to_string(),
            name: "Math exam".to_string(),
            date: ymd(2024, 4, 15),
        })
        .await?;

    assert_eq!(created.name, "Math exam");
    assert_eq!(created.date, ymd(2024, 4, 15));
    assert_eq!(repo.get_by_email("kim@example.com").await?.len(), 1);

    Ok(())
}

/// Tests that identical entries are both kept.
///
/// Expected: Ok with two entries listed
#[tokio::test]
async fn allows_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PersonalSchedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonalScheduleRepository::new(db);
    for _ in 0..2 {
        repo.create(PersonalSchedule {
            email: "kim@example.com".to_string(),
            name: "Club".to_string(),
            date: ymd(2024, 4, 15),
        })
        .await?;
    }

    assert_eq!(repo.get_by_email("kim@example.com").await?.len(), 2);

    Ok(())
}
