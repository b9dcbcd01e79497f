use super::*;

/// Tests an admin passing the admin permission check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::UserFactory::new(db)
        .name("AdminUser")
        .admin()
        .build()
        .await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.name, "AdminUser");
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests a regular user attempting an admin operation.
///
/// Expected: Err(AuthError::AccessDenied) for that user
#[tokio::test]
async fn denies_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) => assert_eq!(id, user.id),
        other => panic!("expected access denied, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests a regular user with no permissions required.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permissions_only_require_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let found = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(found.id, user.id);
    assert_eq!(found.role, Role::User);

    Ok(())
}

/// Tests a request without a logged in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that was removed.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the stale id
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;
    entity::prelude::User::delete_by_id(admin.id).exec(db).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) => assert_eq!(id, admin.id),
        other => panic!("expected missing user, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests that logout clears the session.
///
/// Expected: UserNotInSession after clear
#[tokio::test]
async fn cleared_session_is_logged_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.clear().await;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
