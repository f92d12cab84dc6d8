use axum::extract::State;
use axum::response::{Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::api::options_ok;
use crate::assets::serve_file;
use crate::state::AppState;
use crate::types::LoginForm;

pub const SESSION_COOKIE: &str = "parlor_session";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login).options(options_ok))
        .route("/logout", get(logout).options(options_ok))
}

/// True when the request carries a cookie for a live session.
pub async fn has_session(state: &AppState, jar: &CookieJar) -> bool {
    match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.sessions.contains(cookie.value()).await,
        None => false,
    }
}

/// The login page itself is reachable without a session; it reads the
/// `?error=1` query flag client-side.
async fn login_page(State(state): State<AppState>) -> Response {
    serve_file(&state.config.assets_dir, "login.html").await
}

async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> (CookieJar, Redirect) {
    if form.password == state.config.password {
        let token = state.sessions.issue().await;
        let cookie = Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .build();
        (jar.add(cookie), Redirect::to("/"))
    } else {
        tracing::info!("rejected login attempt");
        (jar, Redirect::to("/login?error=1"))
    }
}

async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.revoke(cookie.value()).await;
    }
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (jar.remove(removal), Redirect::to("/login"))
}
