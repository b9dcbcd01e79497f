use super::*;

/// Tests a partial profile update.
///
/// Expected: name changed, email kept, avatar set
#[tokio::test]
async fn updates_supplied_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update_profile(UpdateProfileParam::from_dto(
            user.id,
            UpdateProfileDto {
                name: Some("Renamed".to_string()),
                email: Some("  ".to_string()),
                avatar: Some("avatars/me.png".to_string()),
            },
        ))
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.avatar.as_deref(), Some("avatars/me.png"));

    Ok(())
}

/// Tests taking an email already used by another account.
///
/// Expected: Err(AppError::BadRequest) and the profile unchanged
#[tokio::test]
async fn duplicate_email_is_bad_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let taken = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    let result = service
        .update_profile(UpdateProfileParam {
            user_id: user.id,
            email: Some(taken.email.clone()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let unchanged = service.get_user(user.id).await?.unwrap();
    assert_eq!(unchanged.email, user.email);

    Ok(())
}

/// Tests updating a profile whose user was removed.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .update_profile(UpdateProfileParam {
            user_id: 321,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
