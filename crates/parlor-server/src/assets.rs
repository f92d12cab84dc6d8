use std::path::{Component, Path};

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;

use parlor_llm::provider::Provider;

use crate::api::options_ok;
use crate::auth::has_session;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index).options(options_ok))
        .route("/index.html", get(index).options(options_ok))
        .route("/keys.js", get(keys_js).options(options_ok))
        .fallback(static_fallback)
}

/// The game page is the one gated surface; everything it loads afterwards
/// comes through the open static fallback.
async fn index(State(state): State<AppState>, jar: CookieJar) -> Response {
    if !has_session(&state, &jar).await {
        return Redirect::to("/login").into_response();
    }
    serve_file(&state.config.assets_dir, "index.html").await
}

/// Hands the server-side provider keys to a logged-in page as the
/// `PRELOADED_API_KEYS` global. Providers without a configured key are left
/// out entirely.
async fn keys_js(State(state): State<AppState>, jar: CookieJar) -> Response {
    if !has_session(&state, &jar).await {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let mut keys = serde_json::Map::new();
    for (name, key) in [
        ("google", state.config.preloaded_key(&Provider::Google)),
        ("anthropic", state.config.preloaded_key(&Provider::Anthropic)),
        ("openai", state.config.preloaded_key(&Provider::OpenAI)),
    ] {
        if let Some(key) = key {
            keys.insert(name.to_string(), Value::from(key));
        }
    }

    let body = format!("window.PRELOADED_API_KEYS = {};\n", Value::Object(keys));
    ([(header::CONTENT_TYPE, "application/javascript")], body).into_response()
}

async fn static_fallback(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    if method != Method::GET {
        return not_found();
    }
    serve_file(&state.config.assets_dir, uri.path().trim_start_matches('/')).await
}

/// Read one file from the asset directory. Any path component other than a
/// plain name (`..`, `.`, a root) stays inside the directory by being
/// rejected outright.
pub(crate) async fn serve_file(dir: &Path, rel: &str) -> Response {
    let rel_path = Path::new(rel);
    if rel_path
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return not_found();
    }

    let path = dir.join(rel_path);
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type_for(&path))], bytes).into_response(),
        Err(_) => not_found(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        _ => "text/plain",
    }
}
