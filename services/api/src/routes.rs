use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use ecofit::auth::{auth_router, TokenDirectory};
use ecofit::coach::{coach_router, CoachService, Picker};

pub(crate) fn with_coach_routes<P>(
    service: Arc<CoachService<P>>,
    tokens: Arc<TokenDirectory>,
) -> axum::Router
where
    P: Picker + 'static,
{
    coach_router(service)
        .merge(auth_router(tokens))
        .route("/", get(root_endpoint))
        .route("/status", get(status_endpoint))
        .route("/favicon.ico", get(favicon_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn root_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to EcoFit Carbon Coach API 🌍💚" }))
}

pub(crate) async fn status_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

pub(crate) async fn favicon_endpoint() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
