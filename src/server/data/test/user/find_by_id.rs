use super::*;

/// Tests a user is returned with their subscriptions.
///
/// Expected: Ok(Some) with the subscribed course id
#[tokio::test]
async fn returns_user_with_subscriptions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let course = factory::create_course(db).await?;
    factory::create_subscription(db, user.id, course.id).await?;

    let (found, subscriptions) = UserRepository::new(db).find_by_id(user.id).await?.unwrap();

    assert_eq!(found.id, user.id);
    assert_eq!(subscriptions, vec![course.id]);

    Ok(())
}

/// Tests looking up a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_user_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(UserRepository::new(db).find_by_id(77).await?.is_none());

    Ok(())
}
