use super::*;

/// Tests role and main role are written together.
///
/// Expected: both columns equal "admin"
#[tokio::test]
async fn sets_role_and_main_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .set_role(user.id, Role::Admin)
        .await?
        .unwrap();

    assert_eq!(updated.role, "admin");
    assert_eq!(updated.main_role, "admin");

    Ok(())
}

/// Tests demoting an admin.
///
/// Expected: both columns equal "user"
#[tokio::test]
async fn demotes_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    repo.set_role(admin.id, Role::User).await?;

    let (stored, _) = repo.find_by_id(admin.id).await?.unwrap();
    assert_eq!(stored.role, "user");
    assert_eq!(stored.main_role, "user");

    Ok(())
}

/// Tests setting the role of a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_user_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(UserRepository::new(db)
        .set_role(12, Role::Admin)
        .await?
        .is_none());

    Ok(())
}
