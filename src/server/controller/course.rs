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
        course::{CourseCreatedDto, CourseDeletedDto, CourseDto, CoursesDto, CreateCourseFormDto},
    },
    server::{
        controller::{
            extract::{MultipartBody, PathParam},
            upload::UploadForm,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Create a new course.
///
/// Accepts a multipart body with the course fields and an optional cover image in
/// the `file` field. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can create courses
///
/// # Returns
/// - `201 Created` - The created course
/// - `400 Bad Request` - Missing or malformed fields, or an invalid upload
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    post,
    path = "/api/admin/course",
    tag = COURSE_TAG,
    request_body(content = CreateCourseFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created course", body = CourseCreatedDto),
        (status = 400, description = "Missing or malformed fields", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    session: Session,
    MultipartBody(multipart): MultipartBody,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = UploadForm::read(multipart, &state.assets).await?;

    let service = CourseService::new(&state.db, &state.assets);
    let course = service.create(&form.fields, form.file).await?;

    Ok((
        StatusCode::CREATED,
        Json(CourseCreatedDto {
            message: "Course Created Successfully".to_string(),
            course: course.into_dto(),
        }),
    ))
}

/// Delete a course with its lectures, subscriptions and asset files.
///
/// # Access Control
/// - `Admin` - Only admins can delete courses
///
/// # Returns
/// - `200 OK` - Course deleted; the body reports any asset files left behind
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error, nothing was deleted
#[utoipa::path(
    delete,
    path = "/api/admin/course/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Successfully deleted course", body = CourseDeletedDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    session: Session,
    PathParam(course_id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CourseService::new(&state.db, &state.assets);
    let deletion = service.delete(course_id).await?;

    Ok((StatusCode::OK, Json(deletion.into_dto())))
}

/// List all courses, newest first.
#[utoipa::path(
    get,
    path = "/api/course/all",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "All courses", body = CoursesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db, &state.assets);
    let courses = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(CoursesDto {
            courses: courses.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

/// Get a single course.
#[utoipa::path(
    get,
    path = "/api/course/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "The course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    PathParam(course_id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db, &state.assets);

    let Some(course) = service.get_by_id(course_id).await? else {
        return Err(AppError::NotFound("Course not found".to_string()));
    };

    Ok((StatusCode::OK, Json(course.into_dto())))
}
