use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::picker::Picker;
use super::request::CoachPayload;
use super::service::CoachService;

/// Router builder exposing the carbon coach endpoint.
pub fn coach_router<P>(service: Arc<CoachService<P>>) -> Router
where
    P: Picker + 'static,
{
    Router::new()
        .route("/mcp/carbon_score", post(carbon_score_handler::<P>))
        .with_state(service)
}

pub(crate) async fn carbon_score_handler<P>(
    State(service): State<Arc<CoachService<P>>>,
    body: Bytes,
) -> Response
where
    P: Picker + 'static,
{
    // Content type is not checked; any JSON object body is accepted.
    let payload = match CoachPayload::from_slice(&body) {
        Ok(payload) => payload,
        Err(error) => {
            warn!(%error, "rejected carbon score payload");
            let body = json!({ "message": "Invalid JSON format." });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    match service.respond(payload) {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(error) => {
            warn!(%error, "carbon score request rejected");
            let body = json!({ "message": error.to_string() });
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
    }
}
