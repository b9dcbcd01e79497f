use super::*;

/// Tests course ids are returned for the requested user only.
///
/// Expected: the user's course ids in subscription order
#[tokio::test]
async fn returns_ids_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;
    let first = factory::create_course(db).await?;
    let second = factory::create_course(db).await?;

    factory::create_subscription(db, user.id, first.id).await?;
    factory::create_subscription(db, user.id, second.id).await?;
    factory::create_subscription(db, other_user.id, second.id).await?;

    let ids = SubscriptionRepository::new(db)
        .get_course_ids_for_user(user.id)
        .await?;

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
