use super::*;

/// Tests deleting a course leaves other courses alone.
///
/// Expected: 1 row affected, only the target course gone
#[tokio::test]
async fn deletes_only_target_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_course(db).await?;
    let other = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);
    let removed = repo.delete(target.id).await?;

    assert_eq!(removed, 1);
    assert!(repo.find_by_id(target.id).await?.is_none());
    assert!(repo.find_by_id(other.id).await?.is_some());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests deleting a course that does not exist.
///
/// Expected: 0 rows affected
#[tokio::test]
async fn deleting_missing_course_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_course(db).await?;

    let repo = CourseRepository::new(db);
    assert_eq!(repo.delete(999).await?, 0);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
