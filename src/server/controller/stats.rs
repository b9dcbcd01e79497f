use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, stats::StatsDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping stats endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Counts of courses, lectures, users and workshops.
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Collection counts", body = StatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stats = StatsService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
