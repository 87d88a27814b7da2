use super::*;

fn param(email: &str) -> UpdateProfileParam {
    UpdateProfileParam {
        email: email.to_string(),
        name: "Kim".to_string(),
        office: "J10".to_string(),
        school_name: "Suwon High School".to_string(),
        school_code: "7530000".to_string(),
        grade: 2,
        class: 4,
        number: 17,
    }
}

/// Tests completing a bare profile.
///
/// Expected: Ok(1) with every field stored
#[tokio::test]
async fn fills_in_bare_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bare = factory::create_bare_student(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo.update_profile(param(&bare.email)).await?;

    assert_eq!(updated, 1);
    let student = repo.find_by_email(&bare.email).await?.unwrap();
    assert_eq!(student.name.as_deref(), Some("Kim"));
    assert_eq!(student.office.as_deref(), Some("J10"));
    assert_eq!(student.school_name.as_deref(), Some("Suwon High School"));
    assert_eq!(student.school_code.as_deref(), Some("7530000"));
    assert_eq!(student.grade, Some(2));
    assert_eq!(student.class, Some(4));
    assert_eq!(student.number, Some(17));

    Ok(())
}

/// Tests that an update leaves the photo and other students alone.
///
/// Expected: Ok(1) with unrelated data unchanged
#[tokio::test]
async fn only_touches_target_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::student::StudentFactory::new(db)
        .photo_url("/profileimg/me.png")
        .build()
        .await?;
    let other = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    repo.update_profile(param(&target.email)).await?;

    let target = repo.find_by_email(&target.email).await?.unwrap();
    assert_eq!(target.photo_url.as_deref(), Some("/profileimg/me.png"));
    let untouched = repo.find_by_email(&other.email).await?.unwrap();
    assert_eq!(untouched.office.as_deref(), Some("B10"));

    Ok(())
}

/// Tests updating an unknown email.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let updated = repo.update_profile(param("nobody@example.com")).await?;

    assert_eq!(updated, 0);

    Ok(())
}
