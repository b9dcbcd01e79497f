use super::*;

/// Tests the full cascade of deleting a course.
///
/// Sets up course C with an image and two lectures with videos, plus an unrelated
/// course D with its own lecture, video and image. Two users subscribe to C, one of
/// them also to D.
///
/// Expected: C, its lectures and its files gone; C pulled from every subscription;
/// D with its lecture, files and subscription untouched; outcome Complete
#[tokio::test]
async fn removes_course_lectures_assets_and_subscriptions() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, dir) = test.db_and_assets().await.unwrap();
    let assets = AssetStore::open(&dir).await?;

    let image = write_asset(&dir, "c-cover.png");
    let video_one = write_asset(&dir, "c-one.mp4");
    let video_two = write_asset(&dir, "c-two.mp4");
    let other_image = write_asset(&dir, "d-cover.png");
    let other_video = write_asset(&dir, "d-one.mp4");

    let course = factory::course::CourseFactory::new(db)
        .image(Some(image.clone()))
        .build()
        .await?;
    factory::lecture::LectureFactory::new(db, course.id)
        .video(Some(video_one.clone()))
        .build()
        .await?;
    factory::lecture::LectureFactory::new(db, course.id)
        .video(Some(video_two.clone()))
        .build()
        .await?;

    let other = factory::course::CourseFactory::new(db)
        .image(Some(other_image.clone()))
        .build()
        .await?;
    let other_lecture = factory::lecture::LectureFactory::new(db, other.id)
        .video(Some(other_video.clone()))
        .build()
        .await?;

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::create_subscription(db, alice.id, course.id).await?;
    factory::create_subscription(db, alice.id, other.id).await?;
    factory::create_subscription(db, bob.id, course.id).await?;

    let deletion = CourseService::new(db, &assets).delete(course.id).await?;

    assert_eq!(deletion.course_id, course.id);
    assert_eq!(deletion.lectures_removed, 2);
    assert_eq!(deletion.subscriptions_removed, 2);
    assert_eq!(deletion.outcome, CascadeOutcome::Complete);

    let course_repo = CourseRepository::new(db);
    let lecture_repo = LectureRepository::new(db);
    let subscription_repo = SubscriptionRepository::new(db);

    assert!(course_repo.find_by_id(course.id).await?.is_none());
    assert!(lecture_repo.get_by_course(course.id).await?.is_empty());
    assert!(!exists(&image));
    assert!(!exists(&video_one));
    assert!(!exists(&video_two));

    assert_eq!(
        subscription_repo.get_course_ids_for_user(alice.id).await?,
        vec![other.id]
    );
    assert!(subscription_repo
        .get_course_ids_for_user(bob.id)
        .await?
        .is_empty());

    assert!(course_repo.find_by_id(other.id).await?.is_some());
    assert!(lecture_repo.find_by_id(other_lecture.id).await?.is_some());
    assert!(exists(&other_image));
    assert!(exists(&other_video));

    Ok(())
}

/// Tests asset files already missing from disk do not affect the outcome.
///
/// Expected: outcome Complete with the records removed
#[tokio::test]
async fn missing_files_still_complete() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, dir) = test.db_and_assets().await.unwrap();
    let assets = AssetStore::open(&dir).await?;

    let absent = dir.join("never-uploaded.mp4").to_string_lossy().into_owned();
    let course = factory::course::CourseFactory::new(db)
        .image(Some(dir.join("gone.png").to_string_lossy().into_owned()))
        .build()
        .await?;
    factory::lecture::LectureFactory::new(db, course.id)
        .video(Some(absent))
        .build()
        .await?;
    factory::create_lecture(db, course.id).await?;

    let deletion = CourseService::new(db, &assets).delete(course.id).await?;

    assert_eq!(deletion.lectures_removed, 2);
    assert_eq!(deletion.outcome, CascadeOutcome::Complete);
    assert!(CourseRepository::new(db)
        .find_by_id(course.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests files that cannot be removed are reported instead of failing the delete.
///
/// The course image points outside the asset root, so the store refuses to touch it.
///
/// Expected: outcome PendingAssetCleanup listing the image, records removed, file kept
#[tokio::test]
async fn unremovable_files_are_reported_as_pending() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, dir) = test.db_and_assets().await.unwrap();
    let assets = AssetStore::open(dir.join("uploads")).await?;

    let outside = write_asset(&dir, "outside.png");
    let video = write_asset(assets.root(), "lecture.mp4");
    let course = factory::course::CourseFactory::new(db)
        .image(Some(outside.clone()))
        .build()
        .await?;
    factory::lecture::LectureFactory::new(db, course.id)
        .video(Some(video.clone()))
        .build()
        .await?;

    let deletion = CourseService::new(db, &assets).delete(course.id).await?;

    assert_eq!(
        deletion.outcome,
        CascadeOutcome::PendingAssetCleanup(vec![outside.clone()])
    );
    assert!(CourseRepository::new(db)
        .find_by_id(course.id)
        .await?
        .is_none());
    assert!(exists(&outside));
    assert!(!exists(&video));

    Ok(())
}

/// Tests deleting an unknown course changes nothing.
///
/// Expected: Err(AppError::NotFound) with every row and file still present
#[tokio::test]
async fn unknown_course_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, dir) = test.db_and_assets().await.unwrap();
    let assets = AssetStore::open(&dir).await?;

    let video = write_asset(&dir, "kept.mp4");
    let course = factory::create_course(db).await?;
    factory::lecture::LectureFactory::new(db, course.id)
        .video(Some(video.clone()))
        .build()
        .await?;

    let result = CourseService::new(db, &assets).delete(course.id + 100).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(CourseRepository::new(db).count().await?, 1);
    assert_eq!(LectureRepository::new(db).count().await?, 1);
    assert!(exists(&video));

    Ok(())
}

/// Tests deleting the same course twice.
///
/// Expected: first call succeeds, second returns NotFound without side effects
#[tokio::test]
async fn second_delete_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, dir) = test.db_and_assets().await.unwrap();
    let assets = AssetStore::open(&dir).await?;

    let (course, _) = factory::helpers::create_course_with_lectures(db, 2).await?;
    let other = factory::create_course(db).await?;

    let service = CourseService::new(db, &assets);
    service.delete(course.id).await?;
    let second = service.delete(course.id).await;

    assert!(matches!(second, Err(AppError::NotFound(_))));
    assert!(CourseRepository::new(db)
        .find_by_id(other.id)
        .await?
        .is_some());

    Ok(())
}
