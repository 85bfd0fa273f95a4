// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::store::ResultStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: Arc<ResultStore>,
    pub(crate) config: AppConfig,
}

pub fn app(store: Arc<ResultStore>, config: AppConfig) -> Router {
    let state = AppState { store, config };
    Router::new()
        .route("/", get(http::banner_handler)) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/v1/status", get(http::status_handler)) // GET /api/v1/status
        .route(
            "/api/v1/status/{name}",
            get(http::status_by_name_handler).put(http::record_handler),
        ) // GET + PUT /api/v1/status/{name}
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
