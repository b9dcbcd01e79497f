//! Lecture service for business logic.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{asset::AssetStore, course::CourseRepository, lecture::LectureRepository},
    error::AppError,
    model::{
        asset::StagedAsset,
        lecture::{CreateLectureParams, Lecture, LectureDeletion},
    },
};

/// Service providing business logic for lectures and their videos.
pub struct LectureService<'a> {
    db: &'a DatabaseConnection,
    assets: &'a AssetStore,
}

impl<'a> LectureService<'a> {
    pub fn new(db: &'a DatabaseConnection, assets: &'a AssetStore) -> Self {
        Self { db, assets }
    }

    /// Adds a lecture to an existing course.
    ///
    /// The course check and insert share a transaction, so a course deleted at the same
    /// time either wins and this call returns `NotFound`, or the lecture is committed
    /// first and the delete cascades over it. The staged video is removed whenever the
    /// lecture is not created.
    ///
    /// # Arguments
    /// - `course_id` - Id of the owning course
    /// - `form` - Text fields of the request
    /// - `video` - Video staged by the upload receiver
    ///
    /// # Returns
    /// - `Ok(Lecture)` - The created lecture
    /// - `Err(AppError::NotFound)` - No course with that id
    /// - `Err(AppError::ValidationErr)` - Title or description missing
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn add(
        &self,
        course_id: i32,
        form: &HashMap<String, String>,
        video: Option<StagedAsset>,
    ) -> Result<Lecture, AppError> {
        let video = video.map(|asset| asset.path);

        let result = self.insert(course_id, form, video.clone()).await;
        if result.is_err() {
            self.assets.delete(video.as_deref()).await;
        }

        result
    }

    async fn insert(
        &self,
        course_id: i32,
        form: &HashMap<String, String>,
        video: Option<String>,
    ) -> Result<Lecture, AppError> {
        let txn = self.db.begin().await?;

        if CourseRepository::new(&txn).find_by_id(course_id).await?.is_none() {
            txn.rollback().await?;
            return Err(AppError::NotFound("No Course with this id".to_string()));
        }

        let params = match CreateLectureParams::from_form(course_id, form, video) {
            Ok(params) => params,
            Err(err) => {
                txn.rollback().await?;
                return Err(err.into());
            }
        };

        let lecture = LectureRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!("Added lecture {} to course {}", lecture.id, course_id);

        Ok(Lecture::from_entity(lecture))
    }

    /// Gets the lectures of a course.
    ///
    /// # Returns
    /// - `Ok(Vec<Lecture>)` - Lectures in creation order
    /// - `Err(AppError::NotFound)` - No course with that id
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<Lecture>, AppError> {
        if CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("No Course with this id".to_string()));
        }

        let lectures = LectureRepository::new(self.db)
            .get_by_course(course_id)
            .await?;

        Ok(lectures.into_iter().map(Lecture::from_entity).collect())
    }

    /// Deletes a lecture, then its video.
    ///
    /// The row goes first so a failing file removal can never leave a lecture pointing
    /// at a half-deleted asset; the removal outcome is reported back.
    ///
    /// # Returns
    /// - `Ok(LectureDeletion)` - Lecture removed, with the video removal outcome
    /// - `Err(AppError::NotFound)` - No lecture with that id
    pub async fn delete(&self, lecture_id: i32) -> Result<LectureDeletion, AppError> {
        let repo = LectureRepository::new(self.db);

        let Some(lecture) = repo.find_by_id(lecture_id).await? else {
            return Err(AppError::NotFound("Lecture not found".to_string()));
        };

        if repo.delete(lecture_id).await? == 0 {
            return Err(AppError::NotFound("Lecture not found".to_string()));
        }
        tracing::info!("Deleted lecture {} of course {}", lecture_id, lecture.course_id);

        let asset = self.assets.delete(lecture.video.as_deref()).await;

        Ok(LectureDeletion {
            lecture_id,
            video: lecture.video,
            asset,
        })
    }
}
