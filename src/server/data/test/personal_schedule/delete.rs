use super::*;

/// Tests deleting by exact email, name and date.
///
/// Verifies that entries differing in any of the three fields survive.
///
/// Expected: Ok(1)
#[tokio::test]
async fn deletes_exact_match_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PersonalSchedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::personal_schedule::PersonalScheduleFactory::new(db, "kim@example.com")
        .calendar_name("Math exam")
        .calendar_date(ymd(2024, 4, 15))
        .build()
        .await?;
    factory::personal_schedule::PersonalScheduleFactory::new(db, "kim@example.com")
        .calendar_name("Math exam")
        .calendar_date(ymd(2024, 4, 16))
        .build()
        .await?;
    factory::personal_schedule::PersonalScheduleFactory::new(db, "lee@example.com")
        .calendar_name("Math exam")
        .calendar_date(ymd(2024, 4, 15))
        .build()
        .await?;

    let repo = PersonalScheduleRepository::new(db);
    let deleted = repo
        .delete("kim@example.com", "Math exam", ymd(2024, 4, 15))
        .await?;

    assert_eq!(deleted, 1);
    let remaining = repo.get_by_email("kim@example.com").await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].date, ymd(2024, 4, 16));
    assert_eq!(repo.get_by_email("lee@example.com").await?.len(), 1);

    Ok(())
}

/// Tests deleting an entry that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PersonalSchedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_personal_schedule(db, "kim@example.com").await?;

    let repo = PersonalScheduleRepository::new(db);
    let deleted = repo
        .delete("kim@example.com", "Unknown", ymd(2024, 3, 5))
        .await?;

    assert_eq!(deleted, 0);

    Ok(())
}
