use super::*;

/// Tests that entries are listed in date order.
///
/// Expected: Ok with entries sorted ascending by date
#[tokio::test]
async fn lists_entries_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PersonalSchedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, date) in [
        ("Late", ymd(2024, 5, 1)),
        ("Early", ymd(2024, 3, 1)),
        ("Middle", ymd(2024, 4, 1)),
    ] {
        factory::personal_schedule::PersonalScheduleFactory::new(db, "kim@example.com")
            .calendar_name(name)
            .calendar_date(date)
            .build()
            .await?;
    }

    let repo = PersonalScheduleRepository::new(db);
    let names: Vec<String> = repo
        .get_by_email("kim@example.com")
        .await?
        .into_iter()
        .map(|s| s.name)
        .collect();

    assert_eq!(names, vec!["Early", "Middle", "Late"]);

    Ok(())
}

/// Tests listing for an email without entries.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PersonalSchedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_personal_schedule(db, "kim@example.com").await?;

    let repo = PersonalScheduleRepository::new(db);
    let entries = repo.get_by_email("lee@example.com").await?;

    assert!(entries.is_empty());

    Ok(())
}
