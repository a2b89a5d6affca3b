use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{cookie, AppState};
use crate::{chat, session};

const INDEX_HTML: &str = include_str!("../../templates/index.html");
const CHATBOT_HTML: &str = include_str!("../../templates/chatbot.html");

/// GET / — landing page.
pub async fn homepage() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /chatbot — chat page; makes sure the session history exists.
pub async fn chatbot(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (session_id, set_cookie) = cookie::establish(&state.session_secret, &headers);

    let session = session::load_or_create(state.sessions.as_ref(), &session_id);
    if let Err(e) = state.sessions.save(&session) {
        tracing::warn!("failed to initialize session {}: {}", session_id, e);
    }

    with_session_cookie(set_cookie, Html(CHATBOT_HTML))
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// POST /chat — one conversation turn.
pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> Response {
    let (session_id, set_cookie) = cookie::establish(&state.session_secret, &headers);
    let message = request.message.unwrap_or_default();

    match chat::run_turn(
        state.gateway.as_ref(),
        state.sessions.as_ref(),
        &state.reports,
        &session_id,
        &message,
    )
    .await
    {
        Ok(reply) => with_session_cookie(
            set_cookie,
            Json(serde_json::json!({ "reply": reply })),
        ),
        Err(e) => e.into_response(),
    }
}

/// GET /reports — all report filenames, newest first.
pub async fn list_reports(State(state): State<AppState>) -> Response {
    match state.reports.list() {
        Ok(files) => Json(serde_json::json!({ "reports": files })).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /report/{filename} — raw file bytes.
pub async fn view_report(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    match state.reports.read_bytes(&filename) {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /report_content/{filename} — report content as text.
pub async fn report_content(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    match state.reports.read(&filename) {
        Ok(content) => Json(serde_json::json!({ "content": content })).into_response(),
        Err(e) => e.into_response(),
    }
}

fn with_session_cookie(set_cookie: Option<String>, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if let Some(value) = set_cookie {
        if let Ok(header_value) = HeaderValue::from_str(&value) {
            response.headers_mut().insert(header::SET_COOKIE, header_value);
        }
    }
    response
}
