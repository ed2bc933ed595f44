//! API error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing required selection: {}", .0.join(", "))]
    MissingSelection(Vec<&'static str>),
    #[error("unknown city '{0}'")]
    UnknownCity(String),
    #[error("unknown aircraft '{0}'")]
    UnknownAircraft(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingSelection(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnknownCity(_) | ApiError::UnknownAircraft(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
