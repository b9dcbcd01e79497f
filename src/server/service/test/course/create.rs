use super::*;

/// Tests creating a course with a staged cover image.
///
/// Verifies numeric fields are stored as the numeric coercion of the input and the
/// staged image path is recorded on the course.
///
/// Expected: Ok(Course) with duration 12.0, price 49.5 and the image path
#[tokio::test]
async fn creates_course_with_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, dir) = test.db_and_assets().await.unwrap();
    let assets = AssetStore::open(&dir).await?;

    let (image, _) = assets.stage(Some("png")).await?;

    let course = CourseService::new(db, &assets)
        .create(
            &complete_form(),
            Some(StagedAsset {
                path: image.clone(),
            }),
        )
        .await?;

    assert_eq!(course.duration, 12.0);
    assert_eq!(course.price, 49.5);
    assert_eq!(course.image.as_deref(), Some(image.as_str()));
    assert!(exists(&image));

    let stored = CourseRepository::new(db).find_by_id(course.id).await?.unwrap();
    assert_eq!(stored.title, "Rust for Services");

    Ok(())
}

/// Tests a missing required field is rejected before anything is stored.
///
/// Expected: Err(ValidationErr(MissingFields(["createdBy"]))), no course, image discarded
#[tokio::test]
async fn missing_field_discards_staged_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, dir) = test.db_and_assets().await.unwrap();
    let assets = AssetStore::open(&dir).await?;

    let (image, _) = assets.stage(Some("png")).await?;
    let mut fields = complete_form();
    fields.remove("createdBy");

    let result = CourseService::new(db, &assets)
        .create(
            &fields,
            Some(StagedAsset {
                path: image.clone(),
            }),
        )
        .await;

    match result {
        Err(AppError::ValidationErr(ValidationError::MissingFields(missing))) => {
            assert_eq!(missing, vec!["createdBy"]);
        }
        other => panic!("expected missing field error, got {:?}", other),
    }
    assert_eq!(CourseRepository::new(db).count().await?, 0);
    assert!(!exists(&image));

    Ok(())
}

/// Tests malformed list fields are a validation error rather than a server error.
///
/// Expected: Err(ValidationErr(InvalidFields)) naming prerequisites, no course stored
#[tokio::test]
async fn malformed_list_is_validation_error() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, dir) = test.db_and_assets().await.unwrap();
    let assets = AssetStore::open(&dir).await?;

    let mut fields = complete_form();
    fields.insert("prerequisites".to_string(), "not json".to_string());

    let result = CourseService::new(db, &assets).create(&fields, None).await;

    match result {
        Err(AppError::ValidationErr(err)) => assert_eq!(err.fields(), vec!["prerequisites"]),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(CourseRepository::new(db).count().await?, 0);

    Ok(())
}
