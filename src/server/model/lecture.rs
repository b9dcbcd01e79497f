//! Lecture domain models and parameters.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    model::lecture::{LectureDeletedDto, LectureDto},
    server::{
        error::validation::ValidationError, model::asset::AssetRemoval, util::parse::non_empty,
    },
};

/// A lecture belonging to exactly one course.
#[derive(Debug, Clone, PartialEq)]
pub struct Lecture {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub course_id: i32,
    /// Asset path of the lecture video.
    pub video: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Lecture {
    pub fn from_entity(entity: entity::lecture::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            course_id: entity.course_id,
            video: entity.video,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> LectureDto {
        LectureDto {
            id: self.id,
            title: self.title,
            description: self.description,
            course: self.course_id,
            video: self.video,
            created_at: self.created_at,
        }
    }
}

/// Validated input for adding a lecture to a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLectureParams {
    pub course_id: i32,
    pub title: String,
    pub description: String,
    pub video: Option<String>,
}

impl CreateLectureParams {
    /// Validates multipart text fields for a new lecture.
    ///
    /// # Returns
    /// - `Ok(CreateLectureParams)` - Title and description present
    /// - `Err(ValidationError::MissingFields)` - Either is absent or blank
    pub fn from_form(
        course_id: i32,
        form: &HashMap<String, String>,
        video: Option<String>,
    ) -> Result<Self, ValidationError> {
        let (title, description) = match (non_empty(form, "title"), non_empty(form, "description"))
        {
            (Some(title), Some(description)) => (title, description),
            (title, description) => {
                let missing = [("title", title), ("description", description)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(name, _)| name)
                    .collect();
                return Err(ValidationError::MissingFields(missing));
            }
        };

        Ok(Self {
            course_id,
            title: title.to_string(),
            description: description.to_string(),
            video,
        })
    }
}

/// Report of a single lecture delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectureDeletion {
    pub lecture_id: i32,
    pub video: Option<String>,
    pub asset: AssetRemoval,
}

impl LectureDeletion {
    pub fn into_dto(self) -> LectureDeletedDto {
        let pending_asset = if self.asset.is_settled() {
            None
        } else {
            self.video
        };

        LectureDeletedDto {
            message: "Lecture Deleted Successfully".to_string(),
            pending_asset,
        }
    }
}
