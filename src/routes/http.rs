// Handlers: version, fleet status, per-server status, probe run ingest

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use super::AppState;
use crate::models::{ResultCategory, RunResult, ServerConfig};
use crate::status;
use crate::version::{NAME, VERSION, banner};

#[derive(Debug, Deserialize)]
pub(super) struct StatusQuery {
    result: Option<String>,
}

impl StatusQuery {
    fn category(&self) -> ResultCategory {
        ResultCategory::from_query(self.result.as_deref())
    }
}

/// Body of a probe run report. `server` falls back to the configured server of the same name;
/// its `name` may be omitted since the path name always wins.
#[derive(Debug, Deserialize)]
pub(super) struct RecordRequest {
    #[serde(default)]
    server: Option<ServerConfig>,
    results: RunResult,
}

fn status_code(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

pub(super) async fn banner_handler() -> impl IntoResponse {
    banner()
}

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/v1/status — every server, filtered by `?result=all|passed|failed` (default failed).
/// Servers with no recorded run yet carry `"results": null`.
pub(super) async fn status_handler(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> impl IntoResponse {
    let fleet = status::get_status(&state.store, query.category()).await;
    (status_code(fleet.http_code), Json(fleet))
}

/// GET /api/v1/status/{name}
pub(super) async fn status_by_name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<StatusQuery>,
) -> impl IntoResponse {
    let server = status::get_status_by_name(&state.store, Some(&name), query.category()).await;
    (status_code(server.http_code), Json(server))
}

/// PUT /api/v1/status/{name} — store the latest run for `name`, replacing the previous one.
pub(super) async fn record_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<RecordRequest>,
) -> impl IntoResponse {
    let mut server = body
        .server
        .or_else(|| state.config.server(&name).cloned())
        .unwrap_or_else(|| ServerConfig::named(name.as_str()));
    server.name = name;

    match state.store.record(server, body.results).await {
        Ok(()) => (
            StatusCode::ACCEPTED,
            Json(serde_json::json!({ "message": "recorded" })),
        ),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "message": e.to_string() })),
        ),
    }
}
