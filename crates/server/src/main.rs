use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use schedule_core::{load_schedule, FilterAction};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{ScheduleSnapshot, ScheduleUpdate},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use api::{apply_action, schedule_page, schedule_snapshot, ApiContext};
use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings()?;
    let source = source::source_for(&settings.schedule_source);
    let outcome = load_schedule(source.as_ref(), settings.reference.clone()).await;

    let state = AppState {
        api: ApiContext::new(outcome, settings.default_first_day),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, source = %settings.schedule_source, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(page))
        .route("/api/schedule", get(http_schedule))
        .route("/api/schedule/actions", post(http_apply_action))
        .with_state(state)
}

async fn healthz(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    match state.api.outcome.schedule() {
        Some(_) => (StatusCode::OK, "ok"),
        None => (StatusCode::SERVICE_UNAVAILABLE, "schedule unavailable"),
    }
}

async fn page(State(state): State<Arc<AppState>>, RawQuery(query): RawQuery) -> Html<String> {
    Html(schedule_page(&state.api, query.as_deref().unwrap_or_default()))
}

async fn http_schedule(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<ScheduleSnapshot>, (StatusCode, Json<ApiError>)> {
    schedule_snapshot(&state.api, query.as_deref().unwrap_or_default())
        .map(Json)
        .map_err(into_response)
}

async fn http_apply_action(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
    Json(action): Json<FilterAction>,
) -> Result<Json<ScheduleUpdate>, (StatusCode, Json<ApiError>)> {
    apply_action(&state.api, query.as_deref().unwrap_or_default(), action)
        .map(Json)
        .map_err(into_response)
}

fn into_response(err: ApiError) -> (StatusCode, Json<ApiError>) {
    let status = match err.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(err))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
