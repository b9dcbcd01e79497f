use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::server::{
    controller::{
        auth::{get_user, logout},
        course::{create_course, delete_course, get_course, get_courses},
        health::health,
        lecture::{add_lecture, delete_lecture, get_lectures},
        stats::get_stats,
        user::{get_all_users, update_profile, update_role},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/course", post(create_course))
        .route("/api/admin/course/{id}", delete(delete_course))
        .route("/api/admin/course/{id}/lecture", post(add_lecture))
        .route("/api/admin/course/{id}/lectures", get(get_lectures))
        .route("/api/admin/lecture/{id}", delete(delete_lecture))
        .route("/api/admin/stats", get(get_stats))
        .route("/api/admin/users", get(get_all_users))
        .route("/api/admin/role", put(update_role))
        .route("/api/admin/profile", put(update_profile))
        .route("/api/course/all", get(get_courses))
        .route("/api/course/{id}", get(get_course))
        .route("/api/auth/user", get(get_user))
        .route("/api/auth/logout", get(logout))
        .route("/health", get(health))
}
