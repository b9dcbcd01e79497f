use super::*;

/// Tests inserting a lecture under an existing course.
///
/// Expected: Ok with the lecture linked to the course
#[tokio::test]
async fn creates_lecture_for_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .with_table(entity::prelude::Lecture)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;

    let lecture = LectureRepository::new(db)
        .create(CreateLectureParams {
            course_id: course.id,
            title: "Intro".to_string(),
            description: "Getting started".to_string(),
            video: Some("uploads/intro.mp4".to_string()),
        })
        .await?;

    assert_eq!(lecture.course_id, course.id);
    assert_eq!(lecture.video.as_deref(), Some("uploads/intro.mp4"));

    Ok(())
}

/// Tests the foreign key rejects lectures for unknown courses.
///
/// Expected: Err(DbErr) and no lecture stored
#[tokio::test]
async fn rejects_unknown_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .with_table(entity::prelude::Lecture)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LectureRepository::new(db);
    let result = repo
        .create(CreateLectureParams {
            course_id: 42,
            title: "Orphan".to_string(),
            description: "No course".to_string(),
            video: None,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
