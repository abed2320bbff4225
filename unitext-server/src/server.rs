//! HTTP front end
//!
//! `GET /?q=<expression>` answers with JSON; without `q` it serves the
//! bundled HTML page. The converter is built once and shared read-only.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use unitext::{Converter, Measurement};

/// Longest accepted query, in characters
pub const MAX_QUERY_LEN: usize = 100;

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    q: Option<String>,
}

/// JSON body of every API answer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Success(Measurement),
    Failure { error: String },
}

impl ApiResponse {
    fn failure(message: impl Into<String>) -> Self {
        ApiResponse::Failure { error: message.into() }
    }
}

#[derive(Debug, PartialEq)]
pub enum Reply {
    /// The static front-end page
    Page,
    Json(StatusCode, ApiResponse),
}

/// Decide the answer for a query without touching the network
pub fn respond(converter: &Converter, query: Option<&str>) -> Reply {
    let query = match query {
        Some(q) if !q.is_empty() => q,
        _ => return Reply::Page,
    };

    if query.chars().count() > MAX_QUERY_LEN {
        info!(len = query.chars().count(), "query rejected: too long");
        return Reply::Json(
            StatusCode::BAD_REQUEST,
            ApiResponse::failure(format!(
                "Query too long. Maximum {} characters allowed.",
                MAX_QUERY_LEN
            )),
        );
    }

    match converter.process(query) {
        Ok(measurement) => {
            debug!(query, value = measurement.value, unit = %measurement.unit_symbol, "converted");
            Reply::Json(StatusCode::OK, ApiResponse::Success(measurement))
        }
        Err(e) => {
            info!(query, code = e.code(), "conversion failed: {}", e);
            Reply::Json(StatusCode::BAD_REQUEST, ApiResponse::failure(e.to_string()))
        }
    }
}

async fn handle_query(
    State(converter): State<Arc<Converter>>,
    Query(params): Query<QueryParams>,
) -> Response {
    match respond(&converter, params.q.as_deref()) {
        Reply::Page => Html(INDEX_HTML).into_response(),
        Reply::Json(status, body) => (status, Json(body)).into_response(),
    }
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiResponse::failure("Only GET requests are allowed")),
    )
        .into_response()
}

pub fn router(converter: Arc<Converter>) -> Router {
    Router::new()
        .route("/", get(handle_query).fallback(method_not_allowed))
        .with_state(converter)
}

/// Bind and serve until the process is stopped
pub async fn run(converter: Converter, bind: &str, port: u16) -> std::io::Result<()> {
    let addr = format!("{}:{}", bind, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        %addr,
        units = converter.index().units().len(),
        aliases = converter.index().len(),
        "unit converter API listening"
    );
    info!("open http://localhost:{} in your browser", port);
    info!("API endpoint: http://localhost:{}/?q=your+query", port);

    axum::serve(listener, router(Arc::new(converter))).await
}
