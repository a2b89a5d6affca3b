//! HTTP surface: router, shared state, and the error-to-status boundary.

pub mod cookie;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::config::Config;
use crate::error::{MedimateError, Result};
use crate::gateway::{ChatGateway, GeminiClient};
use crate::reports::ReportStore;
use crate::session::{FilesystemSessionStore, SessionStore};

/// Shared state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn ChatGateway>,
    pub sessions: Arc<dyn SessionStore>,
    pub reports: Arc<ReportStore>,
    pub session_secret: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::homepage))
        .route("/chatbot", get(handlers::chatbot))
        .route("/chat", post(handlers::chat))
        .route("/reports", get(handlers::list_reports))
        .route("/report/{filename}", get(handlers::view_report))
        .route("/report_content/{filename}", get(handlers::report_content))
        .with_state(state)
}

/// Start the HTTP server and block until shutdown.
pub async fn run(config: Config) -> Result<()> {
    let gateway = GeminiClient::new(&config)?;

    let state = AppState {
        gateway: Arc::new(gateway),
        sessions: Arc::new(FilesystemSessionStore::new(config.sessions_dir.clone())),
        reports: Arc::new(ReportStore::new(config.reports_dir.clone())),
        session_secret: config.session_secret.clone(),
    };

    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| {
            MedimateError::ConfigError(format!(
                "invalid bind address {}:{}: {}",
                config.host, config.port, e
            ))
        })?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("medimate listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("medimate shutting down");
        })
        .await?;

    Ok(())
}

/// Single mapping layer from error kinds to externally visible responses.
///
/// Upstream and internal failures are logged with full detail but answered
/// with a generic message; only client-input problems echo their cause.
impl IntoResponse for MedimateError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            MedimateError::ClientInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            MedimateError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "Report not found".to_string())
            }
            MedimateError::Gateway { .. }
            | MedimateError::NetworkError(_)
            | MedimateError::Timeout => {
                tracing::error!("model gateway failure: {}", self);
                (
                    StatusCode::BAD_GATEWAY,
                    "Model service unavailable".to_string(),
                )
            }
            _ => {
                tracing::error!("request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
