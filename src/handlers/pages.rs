use std::sync::Arc;
use axum::{
    extract::{Request, State},
    http::{header, Method, StatusCode, Uri},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use crate::{config, AppState};

pub async fn home(State(state): State<Arc<AppState>>) -> Response {
    serve_page(&state, "index").await
}

/// Clean-URL handler. Runs behind the static file service, so anything
/// arriving here matched no real file; single-segment slugs are tried as
/// `{name}.html`, everything else is a 404.
pub async fn page(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let name = uri.path().trim_start_matches('/');
    if config::PAGES.contains(&name) || valid_page_name(name) {
        serve_page(&state, name).await
    } else {
        tracing::debug!("rejected page name: {:?}", name);
        not_found_body(&state).await
    }
}

/// 301 for ".html" URLs, ahead of the file service so the document is never
/// reachable under two paths.
pub async fn redirect_html(request: Request, next: Next) -> Response {
    if request.method() == Method::GET {
        if let Some(stem) = request.uri().path().strip_suffix(".html") {
            let location = if stem.is_empty() { "/" } else { stem };
            return (
                StatusCode::MOVED_PERMANENTLY,
                [(header::LOCATION, location.to_string())],
            )
                .into_response();
        }
    }
    next.run(request).await
}

async fn serve_page(state: &AppState, name: &str) -> Response {
    let path = state.site_root.join(format!("{}.html", name));
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::debug!("no document for page '{}': {}", name, e);
            not_found_body(state).await
        }
    }
}

// The home document doubles as the 404 body, matching the site's behavior.
async fn not_found_body(state: &AppState) -> Response {
    let body = tokio::fs::read_to_string(state.site_root.join("index.html"))
        .await
        .unwrap_or_default();
    (StatusCode::NOT_FOUND, Html(body)).into_response()
}

// Page names come from URLs; only plain slugs may reach the filesystem.
fn valid_page_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
