use dotenvy::dotenv;
use axum::{
    middleware,
    routing::{any, get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
mod handlers {
    pub mod contact;
    pub mod pages;
}
mod config;
mod error;
mod mailer;
use config::MailConfig;
use mailer::MailRelay;

pub struct AppState {
    pub site_root: PathBuf,
    pub mail: Option<MailRelay>,
}

async fn health_check() -> &'static str {
    "OK"
}

// "/" serves index.html and real files under the site root are served
// directly; anything else is tried as a clean-URL page ({name}.html) before
// the 404 handler. ".html" requests are redirected to the clean URL first so
// each document has one canonical path.
pub fn router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(handlers::contact::submit_contact));
    let clean_urls = any(handlers::pages::page).with_state(state.clone());
    let static_files = ServeDir::new(&state.site_root).not_found_service(clean_urls);
    Router::new()
        .merge(api_routes)
        .route("/", get(handlers::pages::home))
        .fallback_service(static_files)
        .layer(middleware::from_fn(handlers::pages::redirect_html))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,atelier_site=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
    let site_root = std::env::var("SITE_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("site"));
    let mail = match MailConfig::from_env() {
        Some(config) => {
            Some(MailRelay::from_config(config).expect("Failed to build SMTP relay"))
        }
        None => {
            tracing::warn!("EMAIL_USER/EMAIL_PASS not set, contact relay disabled; pages are still served");
            None
        }
    };
    let state = Arc::new(AppState { site_root, mail });
    let app = router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        );
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    tracing::info!("Starting server on port {}", port);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
