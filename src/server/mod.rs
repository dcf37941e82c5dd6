//! HTTP server

use anyhow::Result;
use axum::{
    extract::{Path, State},
    handler::Handler,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::PostCatalog;
use crate::pages::{PageComposer, PageError};
use crate::Blog;

/// Server state shared by all handlers
pub struct AppState {
    catalog: Arc<PostCatalog>,
    pages: PageComposer,
}

impl AppState {
    /// Build the state, loading the catalog if it has not been loaded yet
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            catalog: blog.catalog(),
            pages: PageComposer::new(&blog.config)?,
        })
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("Failed to render page: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
    }
}

/// Build the application router
pub fn router(blog: &Blog, state: Arc<AppState>) -> Router {
    let not_found = not_found_handler.with_state(state.clone());
    let static_files = ServeDir::new(&blog.static_dir).not_found_service(not_found);

    Router::new()
        .route("/", get(index_handler))
        .route("/about", get(about_handler))
        .route("/test", get(demo_handler))
        .route("/data", get(data_handler))
        .route("/blog/:slug", get(post_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    // Load posts before accepting connections
    let state = Arc::new(AppState::new(blog)?);
    tracing::info!("Serving {} posts", state.catalog.len());

    let app = router(blog, state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    Ok(Html(state.pages.index(&state.catalog)?))
}

async fn about_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    Ok(Html(state.pages.about()?))
}

async fn demo_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    Ok(Html(state.pages.demo()?))
}

async fn data_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    Ok(Html(state.pages.data_fragment(&state.catalog)?))
}

async fn post_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    uri: Uri,
) -> Result<Response, PageError> {
    match state.pages.post(&state.catalog, &slug)? {
        Some(html) => Ok(Html(html).into_response()),
        None => {
            tracing::debug!("No post with slug {}", slug);
            let html = state.pages.post_not_found(uri.path())?;
            Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
        }
    }
}

async fn not_found_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Html<String>, PageError> {
    // ServeDir sets the 404 status
    Ok(Html(state.pages.page_not_found(uri.path())?))
}
