//! Web server hosting the console shell and WASM bundle

use std::path::PathBuf;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use hub_console_app::api::BASE_URL_META;
use tower_http::services::ServeDir;

const STYLESHEET: &str = include_str!("../assets/console.css");

/// Server application state
#[derive(Debug, Clone)]
pub struct ServerState {
    pub api_base_url: String,
    pub assets_dir: PathBuf,
}

/// Build the console axum router
pub fn build_router(state: ServerState) -> Router {
    let assets = ServeDir::new(&state.assets_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest_service("/pkg", assets)
        .with_state(state)
}

/// Escape a value for use inside a double-quoted HTML attribute
fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

async fn index_handler(State(server): State<ServerState>) -> impl IntoResponse {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="{meta_name}" content="{base_url}">
    <title>IoT Hub Devices</title>
    <style>{stylesheet}</style>
    <script type="module">
        import init, {{ start }} from '/pkg/hub-console-app.js';
        init('/pkg/hub-console-app_bg.wasm').then(() => start());
    </script>
</head>
<body></body>
</html>"#,
        meta_name = BASE_URL_META,
        base_url = escape_attr(&server.api_base_url),
        stylesheet = STYLESHEET,
    );

    Html(html)
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
