//! Page Routes
//!
//! - GET / - Homepage
//! - GET /:file - Host page (`*.html`) or static asset
//! - POST /:file - Host page with a contact form acknowledgment

use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::Uri,
    response::{Html, IntoResponse, Response},
    Form,
};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::page::{ContactSubmission, PageError};
use crate::server::error::ServerResult;
use crate::server::state::AppState;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> ServerResult<Html<String>> {
    render_page(&state, "/", "index.html", None).await
}

/// GET /:file
///
/// Host pages are rendered; anything else is served from the site root.
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(file): Path<String>,
    request: Request,
) -> ServerResult<Response> {
    if !file.ends_with(".html") {
        return Ok(serve_asset(&state, request).await);
    }

    let path = request.uri().path().to_string();
    let page = render_page(&state, &path, &file, None).await?;
    Ok(page.into_response())
}

/// POST /:file
///
/// The submission is acknowledged on the returned page and dropped.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(file): Path<String>,
    uri: Uri,
    Form(submission): Form<ContactSubmission>,
) -> ServerResult<Html<String>> {
    if !file.ends_with(".html") {
        return Err(PageError::NotFound(file).into());
    }

    render_page(&state, uri.path(), &file, Some(&submission)).await
}

async fn render_page(
    state: &AppState,
    path: &str,
    file: &str,
    submission: Option<&ContactSubmission>,
) -> ServerResult<Html<String>> {
    let markup = state.site.read_host_page(file).await?;
    let html = state.controller.render(path, markup, submission).await;
    Ok(Html(html))
}

async fn serve_asset(state: &AppState, request: Request) -> Response {
    match ServeDir::new(state.site.root()).oneshot(request).await {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}
