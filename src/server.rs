//! HTTP front end of the pipeline.
//!
//! | Method | Path       | Body             |
//! |--------|------------|------------------|
//! | GET    | `/`        |                  |
//! | GET    | `/health`  |                  |
//! | POST   | `/process` | `ProcessRequest` |
//! | POST   | `/full`    | `FullRequest`    |
//!
//! Validation errors map to `400`, everything else to `500`; both carry a
//! `{"detail": "..."}` body.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use crate::error::{Result, TextlabError};
use crate::pipeline::{FullRequest, Pipeline, ProcessRequest, ProcessResult};

/// Service name reported by `/` and `/health`.
pub const SERVICE_NAME: &str = "NLP Text Processing Lab API";

/// Shared state for the handlers.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        AppState {
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// A pipeline error on its way to the client.
#[derive(Debug)]
pub struct ApiError(TextlabError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    pub fn detail(&self) -> String {
        match &self.0 {
            TextlabError::Validation(message) => message.clone(),
            TextlabError::Processing(_) => self.0.to_string(),
            other => TextlabError::processing(other.to_string()).to_string(),
        }
    }
}

impl From<TextlabError> for ApiError {
    fn from(error: TextlabError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        if status.is_server_error() {
            warn!("request failed: {detail}");
        } else {
            debug!("request rejected: {detail}");
        }
        (status, Json(ErrorDetail { detail })).into_response()
    }
}

/// Build the router with permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/process", post(process))
        .route("/full", post(full))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, pipeline: Pipeline) -> Result<()> {
    let app = router(AppState::new(pipeline));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("{SERVICE_NAME} listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Handler for GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": SERVICE_NAME,
        "version": crate::VERSION,
        "endpoints": {
            "health": "GET /health",
            "process": "POST /process",
            "full": "POST /full",
        },
        "example_request": {
            "text": "The quick brown fox jumps over the lazy dog. NLP is amazing!",
            "options": {
                "tokenization": true,
                "lowercasing": true,
                "stopword_removal": true,
                "lemmatization": true,
                "vocabulary": true,
                "bag_of_words": true,
                "tf": true,
                "tfidf": true,
                "pos_tagging": true,
            },
            "custom_stopwords": ["quick", "lazy"],
        },
    }))
}

/// Handler for GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": crate::VERSION,
    }))
}

/// Handler for POST /process
pub async fn process(
    State(state): State<AppState>,
    Json(request): Json<ProcessRequest>,
) -> std::result::Result<Json<ProcessResult>, ApiError> {
    let result = state.pipeline.run(&request)?;
    Ok(Json(result))
}

/// Handler for POST /full
pub async fn full(
    State(state): State<AppState>,
    Json(request): Json<FullRequest>,
) -> std::result::Result<Json<ProcessResult>, ApiError> {
    let result = state.pipeline.run(&ProcessRequest::from(request))?;
    Ok(Json(result))
}
