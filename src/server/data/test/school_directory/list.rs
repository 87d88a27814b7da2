use super::*;

const SCHOOLS: &[(&str, &str)] = &[
    ("Alpha High School", "7010001"),
    ("Beta High School", "7010002"),
    ("Gamma High School", "7010003"),
    ("Delta High School", "7010004"),
    ("Epsilon High School", "7010005"),
];

/// Tests reading the second page of a directory.
///
/// Expected: Ok with rows 3 and 4 mapped to name and code
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_directory("B10", SCHOOLS)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolDirectoryRepository::new(db);
    let rows = repo
        .list(&ListSchoolsParam {
            table: "b10".to_string(),
            limit: 2,
            offset: 2,
        })
        .await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].school_name, "Gamma High School");
    assert_eq!(rows[0].administrative_code, "7010003");
    assert_eq!(rows[1].school_name, "Delta High School");

    Ok(())
}

/// Tests paging past the end of a directory.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_past_last_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_directory("B10", SCHOOLS)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolDirectoryRepository::new(db);
    let rows = repo
        .list(&ListSchoolsParam {
            table: "b10".to_string(),
            limit: 10,
            offset: 10,
        })
        .await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests listing an office without a directory table.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_unknown_office() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_directory("B10", SCHOOLS)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolDirectoryRepository::new(db);
    let result = repo
        .list(&ListSchoolsParam {
            table: "z99".to_string(),
            limit: 10,
            offset: 0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
