//! Bearer-token check backing `/mcp/validate`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{debug, warn};

use crate::config::AuthConfig;

/// Read-only token table mapping bearer tokens to phone numbers.
#[derive(Debug, Clone, Default)]
pub struct TokenDirectory {
    phones: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Missing or invalid Authorization header")]
    MissingBearer,
    #[error("Invalid token")]
    UnknownToken,
}

impl TokenDirectory {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            phones: config.tokens.iter().cloned().collect(),
        }
    }

    /// Resolves an `Authorization` header value to the phone number it unlocks.
    pub fn authorize(&self, authorization: Option<&str>) -> Result<&str, TokenError> {
        let token = authorization
            .and_then(|value| value.strip_prefix("Bearer "))
            .and_then(|rest| rest.split(' ').next())
            .ok_or(TokenError::MissingBearer)?;

        self.phones
            .get(token)
            .map(String::as_str)
            .ok_or(TokenError::UnknownToken)
    }
}

pub fn auth_router(directory: Arc<TokenDirectory>) -> Router {
    Router::new()
        .route("/mcp/validate", post(validate_handler))
        .with_state(directory)
}

pub(crate) async fn validate_handler(
    State(directory): State<Arc<TokenDirectory>>,
    headers: HeaderMap,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match directory.authorize(authorization) {
        Ok(phone) => {
            debug!("bearer token accepted");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                    (header::CACHE_CONTROL, "no-store"),
                    (header::PRAGMA, "no-cache"),
                ],
                phone.to_string(),
            )
                .into_response()
        }
        Err(error) => {
            let status = match error {
                TokenError::MissingBearer => StatusCode::UNAUTHORIZED,
                TokenError::UnknownToken => StatusCode::FORBIDDEN,
            };
            warn!(%error, "bearer token rejected");
            (status, Json(json!({ "detail": error.to_string() }))).into_response()
        }
    }
}
