//! Number Converter Server
//!
//! HTTP endpoints for one-shot conversions and for conversion sessions that
//! keep an input text and the last successful result.

pub mod http;
pub mod metrics;
pub mod session;
pub mod state;

pub use http::create_router;
pub use metrics::{init_metrics, record_conversion};
pub use session::{ConversionSession, SessionManager, SessionSnapshot};
pub use state::AppState;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use numconv_core::ParseFailure;
use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Session limit reached ({0} sessions)")]
    SessionLimit(usize),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Conversion(#[from] ParseFailure),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Short machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ServerError::SessionNotFound(_) => "session_not_found",
            ServerError::SessionLimit(_) => "session_limit",
            ServerError::InvalidRequest(_) => "invalid_request",
            ServerError::Conversion(_) => "conversion_failed",
            ServerError::Internal(_) => "internal",
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

impl From<&ServerError> for StatusCode {
    fn from(err: &ServerError) -> Self {
        match err {
            ServerError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::SessionLimit(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Conversion(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);
        let mut body = serde_json::json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        if let ServerError::Conversion(failure) = &self {
            body["reason"] = failure.reason().into();
            body["hint"] = failure.hint().into();
        }
        (status, Json(body)).into_response()
    }
}
