//! HTTP surface: `/health`, `/analyze`, optional `/metrics`, static UI fallback.
//!
//! `/analyze` takes text from, in order of preference: a multipart `file`
//! part (UTF-8), a multipart/urlencoded `text` field, or JSON `{"text": ...}`.

use std::{sync::Arc, time::Instant};

use axum::{
    extract::{DefaultBodyLimit, FromRequest, Multipart, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::warn;

use crate::analyze::SentimentAnalyzer;
use crate::config::{AppConfig, ServerConfig};
use crate::metrics::{self, Metrics};

/// Extra room for multipart/JSON framing on top of the text limit.
const FRAMING_ALLOWANCE: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<SentimentAnalyzer>,
    max_input_bytes: usize,
}

impl AppState {
    pub fn new(analyzer: SentimentAnalyzer, max_input_bytes: usize) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            max_input_bytes,
        }
    }

    /// Build the analyzer (lexicon overrides included) from config.
    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        let analyzer = cfg.analysis.build_analyzer()?;
        Ok(Self::new(analyzer, cfg.server.max_input_bytes))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            SentimentAnalyzer::new(),
            ServerConfig::default().max_input_bytes,
        )
    }
}

/// Router with default server settings and no metrics route.
pub fn router(state: AppState) -> Router {
    create_router(state, &ServerConfig::default(), None)
}

pub fn create_router(state: AppState, server: &ServerConfig, metrics: Option<&Metrics>) -> Router {
    let body_limit = state.max_input_bytes.saturating_add(FRAMING_ALLOWANCE);

    let mut app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    if let Some(m) = metrics {
        app = app.merge(m.router());
    }
    app = app.fallback_service(ServeDir::new(&server.static_dir));
    if server.cors_permissive {
        app = app.layer(CorsLayer::very_permissive());
    }
    app
}

#[derive(Debug, serde::Deserialize)]
struct TextBody {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug)]
enum ApiError {
    NoText,
    BadEncoding,
    TooLarge(usize),
    Rejected(StatusCode, String),
    Analysis(anyhow::Error),
}

impl ApiError {
    fn reason(&self) -> &'static str {
        match self {
            ApiError::NoText => "no_text",
            ApiError::BadEncoding => "bad_encoding",
            ApiError::TooLarge(_) => "too_large",
            ApiError::Rejected(..) => "rejected",
            ApiError::Analysis(_) => "analysis_failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::NoText => (StatusCode::BAD_REQUEST, "No text provided".to_string()),
            ApiError::BadEncoding => (
                StatusCode::BAD_REQUEST,
                "Invalid file encoding. Please upload a UTF-8 text file.".to_string(),
            ),
            ApiError::TooLarge(limit) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("Text exceeds the {limit}-byte limit"),
            ),
            ApiError::Rejected(status, msg) => (status, msg),
            ApiError::Analysis(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Analysis failed: {e}"),
            ),
        };
        (status, Json(json!({ "error": msg }))).into_response()
    }
}

async fn analyze(State(state): State<AppState>, req: Request) -> Response {
    let started = Instant::now();
    match analyze_inner(&state, req).await {
        Ok(resp) => {
            metrics::record_analysis(resp.label, started.elapsed().as_secs_f64());
            Json(resp).into_response()
        }
        Err(e) => {
            metrics::record_rejected(e.reason());
            match &e {
                ApiError::Analysis(err) => warn!(target: "api", error = %err, "analysis failed"),
                other => warn!(target: "api", reason = other.reason(), "request rejected"),
            }
            e.into_response()
        }
    }
}

async fn analyze_inner(
    state: &AppState,
    req: Request,
) -> Result<crate::analyze::AnalysisReport, ApiError> {
    let text = extract_text(state, req).await?;
    if text.is_empty() {
        return Err(ApiError::NoText);
    }
    if text.len() > state.max_input_bytes {
        return Err(ApiError::TooLarge(state.max_input_bytes));
    }
    // CPU-bound; keep it off the async workers
    let analyzer = Arc::clone(&state.analyzer);
    tokio::task::spawn_blocking(move || analyzer.analyze(&text))
        .await
        .map_err(|e| ApiError::Analysis(anyhow::anyhow!("analysis task failed: {e}")))?
        .map_err(ApiError::Analysis)
}

async fn extract_text(state: &AppState, req: Request) -> Result<String, ApiError> {
    let ctype = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    if ctype.starts_with("multipart/form-data") {
        let mut mp = Multipart::from_request(req, state)
            .await
            .map_err(|r| ApiError::Rejected(r.status(), r.body_text()))?;
        return text_from_multipart(&mut mp).await;
    }
    if ctype.starts_with("application/x-www-form-urlencoded") {
        let Form(body) = Form::<TextBody>::from_request(req, state)
            .await
            .map_err(|r| ApiError::Rejected(r.status(), r.body_text()))?;
        return Ok(body.text.unwrap_or_default());
    }
    let Json(body) = Json::<TextBody>::from_request(req, state)
        .await
        .map_err(|r| ApiError::Rejected(r.status(), r.body_text()))?;
    Ok(body.text.unwrap_or_default())
}

/// An uploaded file (non-empty filename) wins over the `text` field.
async fn text_from_multipart(mp: &mut Multipart) -> Result<String, ApiError> {
    let mut file_text: Option<String> = None;
    let mut form_text: Option<String> = None;

    while let Some(field) = mp
        .next_field()
        .await
        .map_err(|e| ApiError::Rejected(e.status(), e.body_text()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let has_name = field.file_name().is_some_and(|n| !n.is_empty());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Rejected(e.status(), e.body_text()))?;
                if has_name {
                    let s = String::from_utf8(bytes.to_vec()).map_err(|_| ApiError::BadEncoding)?;
                    file_text = Some(s);
                }
            }
            "text" => {
                let s = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Rejected(e.status(), e.body_text()))?;
                form_text = Some(s);
            }
            _ => {}
        }
    }

    Ok(file_text
        .filter(|s| !s.is_empty())
        .or(form_text)
        .unwrap_or_default())
}
