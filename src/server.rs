//! Read-only HTTP server.
//!
//! Exposes the feed store as a JSON API. Handlers never reject a request
//! over a malformed path parameter — normalization clamps it into range —
//! and store failures surface as 500-class JSON errors while the process
//! keeps serving.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/user-sources/{user}` | Sources followed by a user |
//! | `GET`  | `/source-articles-paged/{source}/{page}` | One page of a source's articles |
//! | `GET`  | `/search-user-articles-paged/{user}/{search}/{page}` | One page of a user's articles matching a keyword |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! Trailing-slash variants of the data routes are registered too, routing
//! to the same handlers. Unknown paths get axum's default 404.
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "internal", "message": "..." } }
//! ```
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted; the API is read-only
//! and unauthenticated, intended for browser-based readers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_server::tls_rustls::RustlsConfig;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::db;
use crate::models::{ArticlesResponse, SourcesResponse};
use crate::params::{int_param, page_param, MAX_ID_PARAM, MAX_USERS};
use crate::queries::QuerySet;

/// Shared application state passed to all route handlers via Axum's `State`
/// extractor. Both fields are constructed once at startup and read-only
/// from then on.
#[derive(Clone)]
struct AppState {
    pool: sqlx::SqlitePool,
    queries: Arc<QuerySet>,
}

/// Starts the HTTP server.
///
/// Opens the pool, loads the query files, and binds to `0.0.0.0` on the
/// configured port. When the config carries both a certificate and a key
/// the listener terminates TLS; otherwise it serves plain HTTP. Runs until
/// the process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let pool = db::connect(config).await?;
    let queries = QuerySet::load(&config.queries.dir)?;

    let state = AppState {
        pool,
        queries: Arc::new(queries),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state).layer(cors);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    match config.server.tls_pair() {
        Some((cert, key)) => {
            let tls = RustlsConfig::from_pem_file(cert, key).await?;
            tracing::info!(%addr, "listening (tls)");
            axum_server::bind_rustls(addr, tls)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!(%addr, "listening");
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/user-sources/{user}", get(handle_user_sources))
        .route("/user-sources/{user}/", get(handle_user_sources))
        .route(
            "/source-articles-paged/{source}/{page}",
            get(handle_source_articles),
        )
        .route(
            "/source-articles-paged/{source}/{page}/",
            get(handle_source_articles),
        )
        .route(
            "/search-user-articles-paged/{user}/{search}/{page}",
            get(handle_search_user_articles),
        )
        .route(
            "/search-user-articles-paged/{user}/{search}/{page}/",
            get(handle_search_user_articles),
        )
        .route("/health", get(handle_health))
        .with_state(state)
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Inner error detail with a machine-readable code and human-readable message.
#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

/// Maps a store failure to a 500 response, logging the underlying error.
/// The request fails; the server keeps serving.
fn store_error(err: anyhow::Error) -> AppError {
    tracing::error!(error = %err, "store query failed");
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: "internal".to_string(),
        message: err.to_string(),
    }
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is running.
    status: String,
    /// The crate version from `Cargo.toml`.
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /user-sources/{user} ============

/// Handler for `GET /user-sources/{user}`.
///
/// `user` falls back to `1` and is clamped into `[1, MAX_USERS]`.
async fn handle_user_sources(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<SourcesResponse>, AppError> {
    let user = int_param(&user, "1", 1, 1, MAX_USERS);

    let results = state
        .queries
        .user_sources(&state.pool, user)
        .await
        .map_err(store_error)?;

    Ok(Json(SourcesResponse { results }))
}

// ============ GET /source-articles-paged/{source}/{page} ============

/// Handler for `GET /source-articles-paged/{source}/{page}`.
///
/// `source` falls back to `0` and is clamped into `[0, MAX_ID_PARAM]`;
/// `page` goes through the pagination helper.
async fn handle_source_articles(
    State(state): State<AppState>,
    Path((source, page)): Path<(String, String)>,
) -> Result<Json<ArticlesResponse>, AppError> {
    let source = int_param(&source, "0", 0, 0, MAX_ID_PARAM);
    let page = page_param(&page);

    let results = state
        .queries
        .source_articles(&state.pool, source, page)
        .await
        .map_err(store_error)?;

    Ok(Json(ArticlesResponse { results }))
}

// ============ GET /search-user-articles-paged/{user}/{search}/{page} ============

/// Handler for `GET /search-user-articles-paged/{user}/{search}/{page}`.
///
/// The keyword travels to the query exactly as received (after URL
/// decoding); only the numeric segments are normalized.
async fn handle_search_user_articles(
    State(state): State<AppState>,
    Path((user, search, page)): Path<(String, String, String)>,
) -> Result<Json<ArticlesResponse>, AppError> {
    let user = int_param(&user, "0", 0, 0, MAX_ID_PARAM);
    let page = page_param(&page);

    let results = state
        .queries
        .search_user_articles(&state.pool, &search, user, page)
        .await
        .map_err(store_error)?;

    Ok(Json(ArticlesResponse { results }))
}
