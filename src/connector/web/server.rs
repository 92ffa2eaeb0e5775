use std::future::pending;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::connector::api::Container;
use crate::domain::DomainError;

/// Largest accepted request body (CSV text travels inside the JSON payload).
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;
const DEFAULT_DATASET_NAME: &str = "upload.csv";

const INDEX_HTML: &str = include_str!("index.html");

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub name: Option<String>,
    pub csv: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub row_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub name: Option<String>,
    pub csv: String,
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub backend: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A [`DomainError`] rendered as a JSON error body.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::Dataset(_) | DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::Generation(_) => StatusCode::BAD_GATEWAY,
            DomainError::IoError(_) | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status != StatusCode::BAD_REQUEST {
            warn!("Request failed: {}", self.0);
        }
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Build the web UI router around a shared container.
pub fn app(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/preview", post(preview))
        .route("/api/ask", post(ask))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(container)
}

/// Serve the web UI until ctrl+c.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let backend = container.backend_description().to_string();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("csvask listening on http://{addr} ({backend})");
    axum::serve(listener, app(container))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("ctrl+c received; shutting down"),
        Err(err) => {
            warn!("failed to install ctrl+c handler: {err}; continuing without graceful shutdown");
            pending::<()>().await;
        }
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    "ok"
}

async fn preview(
    State(container): State<Arc<Container>>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let name = request.name.as_deref().unwrap_or(DEFAULT_DATASET_NAME);
    let preview = container
        .preview_use_case()
        .execute(name, request.csv.as_bytes())?;

    Ok(Json(PreviewResponse {
        name: preview.name,
        columns: preview.columns,
        rows: preview.rows,
        row_count: preview.row_count,
    }))
}

async fn ask(
    State(container): State<Arc<Container>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let name = request.name.as_deref().unwrap_or(DEFAULT_DATASET_NAME);
    let dataset = container.reader().read(name, request.csv.as_bytes())?;
    let answer = container
        .ask_use_case()
        .execute(&dataset, &request.question)
        .await?;

    Ok(Json(AskResponse {
        answer: answer.text().to_string(),
        backend: answer.backend().to_string(),
    }))
}
