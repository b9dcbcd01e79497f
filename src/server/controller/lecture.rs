use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        lecture::{AddLectureFormDto, LectureCreatedDto, LectureDeletedDto, LecturesDto},
    },
    server::{
        controller::{
            extract::{MultipartBody, PathParam},
            upload::UploadForm,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::lecture::LectureService,
        state::AppState,
    },
};

/// Tag for grouping lecture endpoints in OpenAPI documentation
pub static LECTURE_TAG: &str = "lecture";

/// Add a lecture to a course.
///
/// Accepts a multipart body with `title`, `description` and an optional video in the
/// `file` field. Only accessible by admins.
///
/// # Returns
/// - `201 Created` - The created lecture
/// - `400 Bad Request` - Missing fields or an invalid upload
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    post,
    path = "/api/admin/course/{id}/lecture",
    tag = LECTURE_TAG,
    params(
        ("id" = i32, Path, description = "Course id")
    ),
    request_body(content = AddLectureFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully added lecture", body = LectureCreatedDto),
        (status = 400, description = "Missing fields or invalid upload", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_lecture(
    State(state): State<AppState>,
    session: Session,
    PathParam(course_id): PathParam<i32>,
    MultipartBody(multipart): MultipartBody,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = UploadForm::read(multipart, &state.assets).await?;

    let service = LectureService::new(&state.db, &state.assets);
    let lecture = service.add(course_id, &form.fields, form.file).await?;

    Ok((
        StatusCode::CREATED,
        Json(LectureCreatedDto {
            message: "Lecture Added".to_string(),
            lecture: lecture.into_dto(),
        }),
    ))
}

/// List the lectures of a course.
#[utoipa::path(
    get,
    path = "/api/admin/course/{id}/lectures",
    tag = LECTURE_TAG,
    params(
        ("id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Lectures of the course", body = LecturesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lectures(
    State(state): State<AppState>,
    session: Session,
    PathParam(course_id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = LectureService::new(&state.db, &state.assets);
    let lectures = service.get_by_course(course_id).await?;

    Ok((
        StatusCode::OK,
        Json(LecturesDto {
            lectures: lectures.into_iter().map(|l| l.into_dto()).collect(),
        }),
    ))
}

/// Delete a lecture and its video.
#[utoipa::path(
    delete,
    path = "/api/admin/lecture/{id}",
    tag = LECTURE_TAG,
    params(
        ("id" = i32, Path, description = "Lecture id")
    ),
    responses(
        (status = 200, description = "Successfully deleted lecture", body = LectureDeletedDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_lecture(
    State(state): State<AppState>,
    session: Session,
    PathParam(lecture_id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = LectureService::new(&state.db, &state.assets);
    let deletion = service.delete(lecture_id).await?;

    Ok((StatusCode::OK, Json(deletion.into_dto())))
}
