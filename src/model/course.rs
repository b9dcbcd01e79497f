use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub image: Option<String>,
    pub duration: f64,
    pub price: f64,
    pub category: String,
    #[schema(value_type = Vec<Object>)]
    pub syllabus: Vec<serde_json::Value>,
    pub prerequisites: Vec<String>,
    #[serde(rename = "whoShouldAttend")]
    pub audience: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseCreatedDto {
    pub message: String,
    pub course: CourseDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CoursesDto {
    pub courses: Vec<CourseDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CascadeOutcomeDto {
    /// Every record and asset of the course is gone.
    Complete,
    /// Records are gone but some asset files could not be removed.
    PendingAssetCleanup,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDeletedDto {
    pub message: String,
    pub outcome: CascadeOutcomeDto,
    pub lectures_removed: u64,
    pub subscriptions_removed: u64,
    pub pending_assets: Vec<String>,
}

/// Multipart body accepted when creating a course.
///
/// List fields are JSON encoded strings.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct CreateCourseFormDto {
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub duration: String,
    pub price: String,
    pub category: String,
    pub syllabus: Option<String>,
    pub prerequisites: Option<String>,
    pub who_should_attend: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub file: Option<Vec<u8>>,
}
