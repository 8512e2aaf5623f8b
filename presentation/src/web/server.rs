//! HTTP API over the SCAMPER use case
//!
//! - `GET /` - browser front end posting to the API
//! - `POST /api/scamper` - run a SCAMPER analysis
//! - `GET /api/status` - orchestrator and agent status
//! - `GET /health` - liveness probe

use crate::input::{InputError, web_input};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use scamper_application::{RunScamperUseCase, TextGenerator};
use scamper_domain::SystemStatus;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Message returned when processing fails unexpectedly
const PROCESSING_ERROR: &str = "Ocurrió un error procesando tu solicitud.";

const INDEX_HTML: &str = include_str!("index.html");

/// Errors that stop the web server
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Web server error: {0}")]
    Server(#[from] std::io::Error),
}

struct AppState<G: TextGenerator + 'static> {
    use_case: Arc<RunScamperUseCase<G>>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Web API server
pub struct WebServer<G: TextGenerator + 'static> {
    use_case: Arc<RunScamperUseCase<G>>,
}

impl<G: TextGenerator + 'static> WebServer<G> {
    pub fn new(use_case: Arc<RunScamperUseCase<G>>) -> Self {
        Self { use_case }
    }

    pub fn router(&self) -> Router {
        let state = Arc::new(AppState {
            use_case: Arc::clone(&self.use_case),
        });
        Router::new()
            .route("/", get(index_handler))
            .route("/api/scamper", post(scamper_handler::<G>))
            .route("/api/status", get(status_handler::<G>))
            .route("/health", get(health_handler))
            .with_state(state)
    }

    /// Serve until Ctrl-C.
    pub async fn start(&self, addr: &str) -> Result<(), ServeError> {
        let app = self.router();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServeError::Bind {
                addr: addr.to_string(),
                source,
            })?;

        info!("Web API listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                info!("Shutting down web API");
            })
            .await?;

        Ok(())
    }
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn scamper_handler<G: TextGenerator + 'static>(
    State(state): State<Arc<AppState<G>>>,
    body: Bytes,
) -> Response {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let input = match web_input(&body) {
        Ok(input) => input,
        Err(e) => return input_error(e),
    };

    info!("POST /api/scamper: {}", input.problem());

    // A panic anywhere in processing must not take the server down.
    let use_case = Arc::clone(&state.use_case);
    let task = tokio::spawn(async move { use_case.process(&input).await });

    match task.await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            error!("Error in /api/scamper: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_ERROR)
        }
    }
}

async fn status_handler<G: TextGenerator + 'static>(
    State(state): State<Arc<AppState<G>>>,
) -> Json<SystemStatus> {
    Json(state.use_case.status())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn input_error(e: InputError) -> Response {
    warn!("Rejected request: {}", e);
    error_response(StatusCode::BAD_REQUEST, &e.to_string())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}
