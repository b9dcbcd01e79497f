use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LectureDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Id of the owning course.
    pub course: i32,
    pub video: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LectureCreatedDto {
    pub message: String,
    pub lecture: LectureDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LecturesDto {
    pub lectures: Vec<LectureDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LectureDeletedDto {
    pub message: String,
    /// Video file left behind because it could not be removed.
    pub pending_asset: Option<String>,
}

/// Multipart body accepted when adding a lecture.
#[derive(Debug, Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct AddLectureFormDto {
    pub title: String,
    pub description: String,
    #[schema(value_type = Option<String>, format = Binary)]
    pub file: Option<Vec<u8>>,
}
