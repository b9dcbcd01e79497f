//! OpenAPI documentation.
//!
//! Served through Swagger UI at `/api/docs` outside production.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto, HealthDto, MessageDto},
        course::{
            CascadeOutcomeDto, CourseCreatedDto, CourseDeletedDto, CourseDto, CoursesDto,
            CreateCourseFormDto,
        },
        lecture::{AddLectureFormDto, LectureCreatedDto, LectureDeletedDto, LectureDto, LecturesDto},
        stats::StatsDto,
        user::{UpdateProfileDto, UpdateRoleDto, UserDto, UserUpdatedDto, UsersDto},
    },
    server::controller,
};

/// Registers the session cookie set by tower-sessions.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "id",
                "Session cookie issued at login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Coursedesk admin API",
        description = "Course, lecture and user administration for the learning platform."
    ),
    security(("SessionCookie" = [])),
    paths(
        controller::course::create_course,
        controller::course::delete_course,
        controller::course::get_courses,
        controller::course::get_course,
        controller::lecture::add_lecture,
        controller::lecture::get_lectures,
        controller::lecture::delete_lecture,
        controller::user::get_all_users,
        controller::user::update_role,
        controller::user::update_profile,
        controller::stats::get_stats,
        controller::auth::get_user,
        controller::auth::logout,
        controller::health::health,
    ),
    components(schemas(
        ErrorDto,
        FieldErrorDto,
        MessageDto,
        HealthDto,
        CourseDto,
        CoursesDto,
        CourseCreatedDto,
        CourseDeletedDto,
        CascadeOutcomeDto,
        CreateCourseFormDto,
        LectureDto,
        LecturesDto,
        LectureCreatedDto,
        LectureDeletedDto,
        AddLectureFormDto,
        StatsDto,
        UserDto,
        UsersDto,
        UpdateRoleDto,
        UpdateProfileDto,
        UserUpdatedDto,
    )),
    tags(
        (name = "course", description = "Course lifecycle"),
        (name = "lecture", description = "Lectures and their videos"),
        (name = "user", description = "User listing, roles and profiles"),
        (name = "stats", description = "Collection counts"),
        (name = "auth", description = "Current session"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
