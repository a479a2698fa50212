//! HTTP API server
//!
//! Serves the article API and, for every other path, the public directory
//! (thumbnails and media assets).

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::{Article, ContentError, ContentStore};
use crate::helpers::{chapters, Chapter};
use crate::Folio;

/// Server state
struct ServerState {
    store: ContentStore,
    recent_limit: usize,
}

/// Query string shared by the article endpoints
#[derive(Debug, Deserialize)]
struct ContentQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
    slug: Option<String>,
}

#[derive(Serialize)]
struct ArticlesResponse {
    articles: Vec<Article>,
}

#[derive(Serialize)]
struct ArticleResponse {
    article: Article,
    chapters: Vec<Chapter>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Repository failure as seen by API clients
struct ApiError(ContentError);

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_not_found() {
            tracing::warn!("{}", self.0);
            return error_response(StatusCode::NOT_FOUND, "Content not found");
        }
        tracing::error!("{}", self.0);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, &self.0.public_message())
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Build the application router
pub fn router(store: ContentStore, recent_limit: usize, public_dir: &Path) -> Router {
    let state = Arc::new(ServerState {
        store,
        recent_limit,
    });

    Router::new()
        .route("/api/articles", get(articles_handler))
        .route("/api/article", get(article_handler))
        .route("/api/last_articles", get(last_articles_handler))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server
pub async fn start(folio: &Folio, ip: &str, port: u16) -> Result<()> {
    let store = folio.store()?;
    let app = router(store, folio.config.recent_limit, &folio.public_dir);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("{} running at http://{}:{}", folio.config.title, ip, port);
    if folio.mode.caching_enabled() {
        println!("Production mode: content is cached until restart.");
    }
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `GET /api/articles?type=...`
async fn articles_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ContentQuery>,
) -> Result<Json<ArticlesResponse>, ApiError> {
    let kind = query.kind.unwrap_or_default();
    let articles = state.store.list(&kind).await?;
    Ok(Json(ArticlesResponse { articles }))
}

/// `GET /api/last_articles?type=...`
async fn last_articles_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ContentQuery>,
) -> Result<Json<ArticlesResponse>, ApiError> {
    let kind = query.kind.unwrap_or_default();
    let articles = state.store.recent(&kind, state.recent_limit).await?;
    Ok(Json(ArticlesResponse { articles }))
}

/// `GET /api/article?slug=...&type=...`
async fn article_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ContentQuery>,
) -> Result<Response, ApiError> {
    let Some(slug) = query.slug.filter(|s| !s.is_empty()) else {
        return Ok(error_response(
            StatusCode::BAD_REQUEST,
            "Missing article slug (?slug=...)",
        ));
    };
    let Some(kind) = query.kind.filter(|k| !k.is_empty()) else {
        return Ok(error_response(
            StatusCode::BAD_REQUEST,
            "Missing article type (?type=...)",
        ));
    };

    let Some(article) = state.store.get(&kind, &slug).await? else {
        return Ok(error_response(StatusCode::NOT_FOUND, "Article not found"));
    };

    let toc = article.body.as_deref().map(chapters).unwrap_or_default();
    Ok(Json(ArticleResponse {
        article,
        chapters: toc,
    })
    .into_response())
}
