use super::*;

/// Tests a course is pulled from every user's subscriptions.
///
/// Verifies all users lose the removed course while keeping their other
/// subscriptions.
///
/// Expected: 2 subscriptions removed, other course subscriptions kept
#[tokio::test]
async fn pulls_course_from_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let removed = factory::create_course(db).await?;
    let kept = factory::create_course(db).await?;

    factory::create_subscription(db, alice.id, removed.id).await?;
    factory::create_subscription(db, alice.id, kept.id).await?;
    factory::create_subscription(db, bob.id, removed.id).await?;

    let repo = SubscriptionRepository::new(db);
    let count = repo.remove_course_from_all(removed.id).await?;

    assert_eq!(count, 2);
    assert_eq!(repo.get_course_ids_for_user(alice.id).await?, vec![kept.id]);
    assert!(repo.get_course_ids_for_user(bob.id).await?.is_empty());

    Ok(())
}

/// Tests removing a course nobody subscribed to.
///
/// Expected: 0 subscriptions removed
#[tokio::test]
async fn course_without_subscribers_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let course = factory::create_course(db).await?;
    let other = factory::create_course(db).await?;
    factory::create_subscription(db, user.id, other.id).await?;

    let repo = SubscriptionRepository::new(db);

    assert_eq!(repo.remove_course_from_all(course.id).await?, 0);
    assert_eq!(repo.get_course_ids_for_user(user.id).await?, vec![other.id]);

    Ok(())
}
