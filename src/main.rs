mod model;
mod server;

use axum::extract::DefaultBodyLimit;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    data::asset::AssetStore,
    doc::ApiDoc,
    error::{panic_response, AppError},
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let assets = AssetStore::open(&config.uploads_dir).await?;

    let mut routes = router::router();
    if !config.environment.is_production() {
        routes = routes
            .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()));
    }

    let include_panic_detail = !config.environment.is_production();
    let app = routes
        .with_state(AppState::new(db, assets))
        .nest_service("/uploads", ServeDir::new(&config.uploads_dir))
        .layer(session)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(startup::cors_layer(&config))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(move |payload| {
            panic_response(include_panic_detail, payload)
        }));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Server running on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
