use super::*;

/// Tests listing users on behalf of an admin.
///
/// Expected: every other user with their subscriptions, requester excluded
#[tokio::test]
async fn excludes_requester() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let alice = factory::user::UserFactory::new(db).name("Alice").build().await?;
    let bob = factory::user::UserFactory::new(db).name("Bob").build().await?;
    let course = factory::create_course(db).await?;
    factory::create_subscription(db, bob.id, course.id).await?;

    let users = UserService::new(db).get_all_except(admin.id).await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![alice.id, bob.id]);
    assert!(users[0].subscriptions.is_empty());
    assert_eq!(users[1].subscriptions, vec![course.id]);

    Ok(())
}

/// Tests that serialized users carry no password.
///
/// Expected: DTO JSON without a "password" key
#[tokio::test]
async fn serialized_users_omit_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    factory::create_user(db).await?;

    let users = UserService::new(db).get_all_except(admin.id).await?;
    let json = serde_json::to_value(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>())
        .unwrap();

    let first = json[0].as_object().unwrap();
    assert!(!first.contains_key("password"));
    assert!(first.contains_key("email"));

    Ok(())
}
