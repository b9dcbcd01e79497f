use super::*;

/// Tests deleting a lecture removes its video.
///
/// Expected: Ok with AssetRemoval::Deleted, record and file gone, sibling kept
#[tokio::test]
async fn deletes_lecture_and_video() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, dir) = test.db_and_assets().await.unwrap();
    let assets = AssetStore::open(&dir).await?;

    let video = write_asset(&dir, "lecture.mp4");
    let course = factory::create_course(db).await?;
    let lecture = factory::lecture::LectureFactory::new(db, course.id)
        .video(Some(video.clone()))
        .build()
        .await?;
    let sibling = factory::create_lecture(db, course.id).await?;

    let deletion = LectureService::new(db, &assets).delete(lecture.id).await?;

    assert_eq!(deletion.lecture_id, lecture.id);
    assert_eq!(deletion.asset, AssetRemoval::Deleted);
    assert!(!exists(&video));

    let repo = LectureRepository::new(db);
    assert!(repo.find_by_id(lecture.id).await?.is_none());
    assert!(repo.find_by_id(sibling.id).await?.is_some());

    Ok(())
}

/// Tests a lecture whose video is already gone.
///
/// Expected: Ok with AssetRemoval::Missing and the record removed
#[tokio::test]
async fn missing_video_is_tolerated() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, dir) = test.db_and_assets().await.unwrap();
    let assets = AssetStore::open(&dir).await?;

    let course = factory::create_course(db).await?;
    let lecture = factory::lecture::LectureFactory::new(db, course.id)
        .video(Some(dir.join("gone.mp4").to_string_lossy().into_owned()))
        .build()
        .await?;

    let deletion = LectureService::new(db, &assets).delete(lecture.id).await?;

    assert_eq!(deletion.asset, AssetRemoval::Missing);
    assert!(LectureRepository::new(db)
        .find_by_id(lecture.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a lecture that does not exist.
///
/// Expected: Err(AppError::NotFound) and existing lectures untouched
#[tokio::test]
async fn unknown_lecture_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, dir) = test.db_and_assets().await.unwrap();
    let assets = AssetStore::open(&dir).await?;

    let (_, lectures) = factory::helpers::create_course_with_lectures(db, 1).await?;

    let result = LectureService::new(db, &assets)
        .delete(lectures[0].id + 50)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(LectureRepository::new(db).count().await?, 1);

    Ok(())
}
