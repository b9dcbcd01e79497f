use super::*;

/// Tests bulk deleting the lectures of one course.
///
/// Expected: count of removed lectures, other course's lectures untouched
#[tokio::test]
async fn deletes_only_lectures_of_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .with_table(entity::prelude::Lecture)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _) = factory::helpers::create_course_with_lectures(db, 2).await?;
    let (other, _) = factory::helpers::create_course_with_lectures(db, 3).await?;

    let repo = LectureRepository::new(db);
    let removed = repo.delete_by_course(course.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.get_by_course(course.id).await?.is_empty());
    assert_eq!(repo.get_by_course(other.id).await?.len(), 3);

    Ok(())
}

/// Tests deleting a single lecture by id.
///
/// Expected: 1 row removed, then 0 for the same id
#[tokio::test]
async fn deletes_single_lecture() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .with_table(entity::prelude::Lecture)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, lectures) = factory::helpers::create_course_with_lectures(db, 2).await?;

    let repo = LectureRepository::new(db);
    assert_eq!(repo.delete(lectures[0].id).await?, 1);
    assert_eq!(repo.delete(lectures[0].id).await?, 0);
    assert!(repo.find_by_id(lectures[1].id).await?.is_some());

    Ok(())
}
