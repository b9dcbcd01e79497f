use super::*;

/// Tests adding a lecture while its course is being deleted.
///
/// Both operations run concurrently against the same course. Either the delete wins
/// and the add reports NotFound, or the add commits first and the cascade removes the
/// new lecture. In both cases no lecture may survive under the deleted course.
///
/// Expected: delete succeeds, add is Ok or NotFound, no lecture left for the course
#[tokio::test]
async fn concurrent_add_and_delete_leave_no_orphans() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let (db, dir) = test.db_and_assets().await.unwrap();
    let assets = AssetStore::open(&dir).await?;

    let fields = form(&[("title", "Late"), ("description", "Racing the delete")]);
    let lecture_service = LectureService::new(db, &assets);
    let course_service = CourseService::new(db, &assets);
    let lecture_repo = LectureRepository::new(db);

    for _ in 0..5 {
        let course = factory::create_course(db).await?;
        let (staged, _) = assets.stage(Some("mp4")).await?;

        let (added, deleted) = tokio::join!(
            lecture_service.add(
                course.id,
                &fields,
                Some(StagedAsset {
                    path: staged.clone()
                })
            ),
            course_service.delete(course.id),
        );

        let deletion = deleted?;
        match added {
            Ok(lecture) => {
                assert_eq!(deletion.lectures_removed, 1);
                assert!(lecture_repo.find_by_id(lecture.id).await?.is_none());
            }
            Err(AppError::NotFound(_)) => {
                assert_eq!(deletion.lectures_removed, 0);
            }
            Err(other) => panic!("unexpected error: {:?}", other),
        }

        assert!(lecture_repo.get_by_course(course.id).await?.is_empty());
        assert!(!exists(&staged));
    }

    Ok(())
}
