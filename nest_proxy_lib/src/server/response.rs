use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Body of every failed proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A proxied call failed. The cause has already been logged; the caller only
/// learns which operation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailed(pub String);

impl FetchFailed {
    /// `Failed to fetch <label>`.
    pub fn fetch(label: &str) -> Self {
        Self(format!("Failed to fetch {}", label))
    }
}

impl IntoResponse for FetchFailed {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: self.0 }),
        )
            .into_response()
    }
}
