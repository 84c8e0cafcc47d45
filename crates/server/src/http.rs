//! HTTP Endpoints
//!
//! REST API for the number converter.

use std::time::Duration;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json, Path, Query, State,
    },
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post, put},
    Router,
};
use numconv_core::ConversionResult;
use numconv_text_processing::sanitize_input;
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::metrics::metrics_handler;
use crate::session::SessionSnapshot;
use crate::state::AppState;
use crate::ServerError;

const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let config = state.get_config();
    let cors_layer = build_cors_layer(&config.server.cors_origins, config.server.cors_enabled);
    let timeout = Duration::from_secs(config.server.timeout_seconds);
    drop(config);

    Router::new()
        // Stateless conversion
        .route("/api/convert", post(convert_body).get(convert_query))
        // Session endpoints
        .route("/api/sessions", post(create_session).get(list_sessions))
        .route("/api/sessions/:id", get(get_session).delete(delete_session))
        .route("/api/sessions/:id/input", put(set_session_input))
        .route("/api/sessions/:id/convert", post(convert_session))
        // Health check
        .route("/health", get(health_check))
        // Prometheus metrics
        .route("/metrics", get(metrics_handler))
        // Admin endpoints
        .route("/admin/reload-config", post(reload_config))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(timeout))
                .layer(cors_layer),
        )
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    let allow_origin = if parsed_origins.is_empty() {
        tracing::info!("No valid CORS origins configured, defaulting to {}", DEFAULT_ORIGIN);
        vec![HeaderValue::from_static(DEFAULT_ORIGIN)]
    } else {
        tracing::info!("CORS configured with {} origins", parsed_origins.len());
        parsed_origins
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// Display options shared by every endpoint returning a result
#[derive(Debug, Default, Deserialize)]
struct DisplayOptions {
    #[serde(default)]
    capitalize: bool,
}

impl DisplayOptions {
    fn apply(&self, result: ConversionResult) -> ConversionResult {
        if self.capitalize {
            result.capitalized()
        } else {
            result
        }
    }
}

/// Body of POST /api/convert and PUT /api/sessions/:id/input
#[derive(Debug, Deserialize)]
struct InputRequest {
    input: String,
}

/// Query of GET /api/convert
#[derive(Debug, Deserialize)]
struct ConvertQuery {
    #[serde(default)]
    input: String,
    #[serde(default)]
    capitalize: bool,
}

/// POST /api/convert
async fn convert_body(
    State(state): State<AppState>,
    display: Result<Query<DisplayOptions>, QueryRejection>,
    request: Result<Json<InputRequest>, JsonRejection>,
) -> Result<Json<ConversionResult>, ServerError> {
    let Query(display) = display?;
    let Json(request) = request?;
    let result = state.convert(&request.input)?;
    Ok(Json(display.apply(result)))
}

/// GET /api/convert?input=...
async fn convert_query(
    State(state): State<AppState>,
    query: Result<Query<ConvertQuery>, QueryRejection>,
) -> Result<Json<ConversionResult>, ServerError> {
    let Query(query) = query?;
    let result = state.convert(&query.input)?;
    let display = DisplayOptions {
        capitalize: query.capitalize,
    };
    Ok(Json(display.apply(result)))
}

/// Create a new conversion session
async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServerError> {
    let session = state.sessions.create()?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "session_id": session.id })),
    ))
}

/// Get session info
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, ServerError> {
    let session = state
        .sessions
        .get(&id)
        .ok_or(ServerError::SessionNotFound(id))?;
    Ok(Json(session.snapshot()))
}

/// Replace the text being edited in a session
async fn set_session_input(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<InputRequest>, JsonRejection>,
) -> Result<Json<SessionSnapshot>, ServerError> {
    let Json(request) = request?;
    let session = state
        .sessions
        .get(&id)
        .ok_or(ServerError::SessionNotFound(id))?;

    let sanitize = state.get_config().converter.sanitize_input;
    let text = if sanitize {
        sanitize_input(&request.input)
    } else {
        request.input
    };
    session.set_input(text);

    Ok(Json(session.snapshot()))
}

/// Convert the stored input of a session
async fn convert_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    display: Result<Query<DisplayOptions>, QueryRejection>,
) -> Result<Json<ConversionResult>, ServerError> {
    let Query(display) = display?;
    let session = state
        .sessions
        .get(&id)
        .ok_or(ServerError::SessionNotFound(id))?;

    let result = state.convert_session(&session)?;
    Ok(Json(display.apply(result)))
}

/// Delete session
async fn delete_session(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.sessions.remove(&id);
    StatusCode::NO_CONTENT
}

/// List sessions
async fn list_sessions(State(state): State<AppState>) -> Json<serde_json::Value> {
    let sessions = state.sessions.list();
    Json(serde_json::json!({
        "sessions": sessions,
        "count": sessions.len(),
    }))
}

/// Health check
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let converter = state.converter();
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "converter": converter.name(),
        "max_value": converter.max_value(),
        "sessions": state.sessions.count(),
    }))
}

/// POST /admin/reload-config
async fn reload_config(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ServerError> {
    state.reload_config().map_err(|e| {
        tracing::error!("Config reload failed: {}", e);
        e
    })?;

    let config = state.get_config();
    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Configuration reloaded successfully",
        "max_value": config.converter.max_value,
    })))
}
