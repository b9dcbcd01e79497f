use super::*;

/// Tests the excluded user is left out of the listing.
///
/// Verifies remaining users are ordered by name and carry their own subscriptions.
///
/// Expected: two users, requester absent
#[tokio::test]
async fn excludes_requester() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::user::UserFactory::new(db)
        .name("Admin")
        .admin()
        .build()
        .await?;
    let zoe = factory::user::UserFactory::new(db).name("Zoe").build().await?;
    let amy = factory::user::UserFactory::new(db).name("Amy").build().await?;
    let course = factory::create_course(db).await?;
    factory::create_subscription(db, zoe.id, course.id).await?;
    factory::create_subscription(db, requester.id, course.id).await?;

    let users = UserRepository::new(db).get_all_except(requester.id).await?;

    let names: Vec<&str> = users.iter().map(|(u, _)| u.name.as_str()).collect();
    assert_eq!(names, vec!["Amy", "Zoe"]);
    assert_eq!(users[0].0.id, amy.id);
    assert!(users[0].1.is_empty());
    assert_eq!(users[1].1, vec![course.id]);

    Ok(())
}

/// Tests listing when the requester is the only user.
///
/// Expected: empty list
#[tokio::test]
async fn only_requester_lists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::user::create_admin(db).await?;

    assert!(UserRepository::new(db)
        .get_all_except(requester.id)
        .await?
        .is_empty());

    Ok(())
}
