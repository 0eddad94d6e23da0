//! HTTP API server

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::inventory::Inventory;
use crate::content::{Catalog, Language, ListOptions, MarkdownRenderer};
use crate::error::ArticleError;
use crate::{seo, Folio};

/// Shared, read-only server state
pub struct AppState {
    pub folio: Folio,
    pub catalog: Catalog,
    pub renderer: MarkdownRenderer,
}

impl AppState {
    pub fn new(folio: Folio) -> Result<Self> {
        let catalog = folio.catalog()?;
        let renderer = MarkdownRenderer::with_theme(&folio.config.highlight_theme);
        Ok(Self {
            folio,
            catalog,
            renderer,
        })
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let public_dir = state.folio.public_dir.clone();

    let mut app = Router::new()
        .route("/api/articles", get(list_articles))
        .route("/api/articles/:slug", get(get_article))
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots));

    if state.folio.config.server.diagnostics {
        app = app.route("/api/debug-files", get(debug_files));
    }

    app.fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(folio: Folio, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(AppState::new(folio)?);
    tracing::info!(
        "Loaded {} catalog entries ({} published)",
        state.catalog.entries().len(),
        state.catalog.published().count()
    );

    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Error returned by the API handlers
#[derive(Debug)]
pub enum ApiError {
    Article(ArticleError),
    /// A failure outside the article layer, with its context message
    Internal(&'static str, String),
}

impl From<ArticleError> for ApiError {
    fn from(e: ArticleError) -> Self {
        ApiError::Article(e)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal("Server error", e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Article(ArticleError::NotFound(missing)) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "File not found",
                    "slug": missing.slug,
                    "lang": missing.lang,
                    "searchedPaths": missing.searched_paths,
                    "existingFiles": missing.existing_files,
                    "articlesDirectory": missing.articles_directory,
                }),
            ),
            ApiError::Article(e) if e.is_client_error() => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid request", "details": e.to_string() }),
            ),
            ApiError::Article(e) => {
                tracing::error!("API error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Server error", "details": e.to_string() }),
                )
            }
            ApiError::Internal(error, details) => {
                tracing::error!("{}: {}", error, details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": error, "details": details }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    #[serde(default)]
    featured: bool,
    category: Option<String>,
    limit: Option<usize>,
}

async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    let options = ListOptions {
        featured_first: query.featured,
        category: query.category,
        limit: query.limit,
    };

    let articles = tokio::task::spawn_blocking(move || {
        state.catalog.list(&state.folio.resolver(), &options)
    })
    .await
    .map_err(|e| ApiError::Internal("Failed to fetch articles", e.to_string()))?;

    tracing::info!("Returning {} articles", articles.len());
    Ok(Json(articles).into_response())
}

#[derive(Debug, Default, Deserialize)]
struct DetailQuery {
    lang: Option<String>,
    #[serde(default)]
    html: bool,
}

async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Result<Response, ApiError> {
    let lang = match query.lang.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(code) => code.parse::<Language>()?,
        None => state.folio.config.default_language,
    };

    tracing::info!("Looking for article {} ({})", slug, lang);

    let resolved = tokio::task::spawn_blocking(move || {
        let entry = state.catalog.get(&slug);
        let mut resolved = state.folio.resolver().resolve(&slug, lang, entry)?;
        if query.html {
            resolved.html = Some(state.renderer.render(&resolved.content));
        }
        Ok::<_, ArticleError>(resolved)
    })
    .await??;

    Ok(Json(resolved).into_response())
}

async fn debug_files(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let inventory = tokio::task::spawn_blocking(move || {
        let folio = &state.folio;
        Inventory::scan(
            &folio.base_dir,
            &[folio.articles_dir.as_path(), folio.public_dir.as_path()],
        )
    })
    .await?;

    Ok(Json(inventory).into_response())
}

async fn sitemap(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let xml = tokio::task::spawn_blocking(move || {
        let articles = state.catalog.list_available(&state.folio.resolver());
        seo::sitemap_xml(&state.folio.config, &articles)
    })
    .await?;

    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}

async fn robots(State(state): State<Arc<AppState>>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        seo::robots_txt(&state.folio.config),
    )
        .into_response()
}
