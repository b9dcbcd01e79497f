//! Course service for business logic.
//!
//! Owns the course aggregate: creating a course with its optional cover image and
//! deleting it together with its lectures, their videos and every subscription that
//! references it.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        asset::AssetStore, course::CourseRepository, lecture::LectureRepository,
        subscription::SubscriptionRepository,
    },
    error::AppError,
    model::{
        asset::{AssetRemoval, StagedAsset},
        course::{CascadeOutcome, Course, CourseDeletion, CreateCourseParams},
    },
};

/// Service providing business logic for course management.
pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
    assets: &'a AssetStore,
}

impl<'a> CourseService<'a> {
    /// Creates a new CourseService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `assets` - Store holding course images and lecture videos
    pub fn new(db: &'a DatabaseConnection, assets: &'a AssetStore) -> Self {
        Self { db, assets }
    }

    /// Creates a course from multipart form fields.
    ///
    /// Input is fully validated before anything is written. If validation or the insert
    /// fails, the staged image is removed so no orphan file is left behind.
    ///
    /// # Arguments
    /// - `form` - Text fields of the request
    /// - `image` - Cover image staged by the upload receiver
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course
    /// - `Err(AppError::ValidationErr)` - Missing or malformed fields
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(
        &self,
        form: &HashMap<String, String>,
        image: Option<StagedAsset>,
    ) -> Result<Course, AppError> {
        let image = image.map(|asset| asset.path);

        let result = self.insert(form, image.clone()).await;
        if result.is_err() {
            self.assets.delete(image.as_deref()).await;
        }

        result
    }

    async fn insert(
        &self,
        form: &HashMap<String, String>,
        image: Option<String>,
    ) -> Result<Course, AppError> {
        let params = CreateCourseParams::from_form(form, image)?;

        let course = CourseRepository::new(self.db).create(params).await?;
        tracing::info!("Created course {} '{}'", course.id, course.title);

        Ok(Course::from_entity(course)?)
    }

    /// Gets all courses, newest first.
    pub async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        let courses = CourseRepository::new(self.db).get_all().await?;

        Ok(courses
            .into_iter()
            .map(Course::from_entity)
            .collect::<Result<_, _>>()?)
    }

    /// Gets a course by id.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Course found
    /// - `Ok(None)` - No course with that id
    pub async fn get_by_id(&self, course_id: i32) -> Result<Option<Course>, AppError> {
        let course = CourseRepository::new(self.db).find_by_id(course_id).await?;

        Ok(course.map(Course::from_entity).transpose()?)
    }

    /// Deletes a course and everything it owns.
    ///
    /// The lecture lookup, lecture delete, subscription removal and course delete run in
    /// one transaction. Asset files are only touched once that transaction has committed:
    /// lecture videos are removed concurrently, then the course image. Files that cannot
    /// be removed are reported in the outcome instead of failing the request, since the
    /// records are already gone.
    ///
    /// # Arguments
    /// - `course_id` - Id of the course to delete
    ///
    /// # Returns
    /// - `Ok(CourseDeletion)` - What was removed and whether any files are left over
    /// - `Err(AppError::NotFound)` - No course with that id; nothing was changed
    /// - `Err(AppError::DbErr)` - Database error; the transaction rolled back and no file
    ///   was touched
    pub async fn delete(&self, course_id: i32) -> Result<CourseDeletion, AppError> {
        let txn = self.db.begin().await?;

        let Some(course) = CourseRepository::new(&txn).find_by_id(course_id).await? else {
            txn.rollback().await?;
            return Err(AppError::NotFound("Course not found".to_string()));
        };

        let lecture_repo = LectureRepository::new(&txn);
        let videos: Vec<String> = lecture_repo
            .get_by_course(course_id)
            .await?
            .into_iter()
            .filter_map(|lecture| lecture.video)
            .collect();
        let lectures_removed = lecture_repo.delete_by_course(course_id).await?;
        let subscriptions_removed = SubscriptionRepository::new(&txn)
            .remove_course_from_all(course_id)
            .await?;
        CourseRepository::new(&txn).delete(course_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted course {} with {} lectures and {} subscriptions",
            course_id,
            lectures_removed,
            subscriptions_removed
        );

        let mut removals = self.assets.delete_all(videos).await;
        if let Some(image) = course.image {
            let removal = self.assets.delete(Some(&image)).await;
            removals.push((image, removal));
        }

        let pending: Vec<String> = removals
            .into_iter()
            .filter(|(_, removal)| matches!(removal, AssetRemoval::Failed(_)))
            .map(|(path, _)| path)
            .collect();

        let outcome = if pending.is_empty() {
            CascadeOutcome::Complete
        } else {
            tracing::warn!(
                "Course {} deleted but {} asset files remain: {:?}",
                course_id,
                pending.len(),
                pending
            );
            CascadeOutcome::PendingAssetCleanup(pending)
        };

        Ok(CourseDeletion {
            course_id,
            lectures_removed,
            subscriptions_removed,
            outcome,
        })
    }
}
