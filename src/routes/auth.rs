// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, signup and logout routes.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, MaybeViewer, TOKEN_COOKIE};
use crate::models::User;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/signup", post(signup))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(current_session))
}

#[derive(Deserialize)]
pub struct Credentials {
    email: String,
    password: String,
}

/// Signed-in user plus the bearer token for API calls.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionResponse {
    pub user: User,
    pub token: String,
}

/// Token cookie attributes; removal must use the same ones.
fn token_cookie(state: &AppState, value: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(state.config.frontend_url.starts_with("https://"))
        .same_site(SameSite::Lax)
        .build()
}

fn start_session(
    state: &AppState,
    jar: CookieJar,
    user: User,
) -> Result<(CookieJar, Json<SessionResponse>)> {
    let token = create_jwt(&user.email, &state.config.jwt_signing_key)?;
    let jar = jar.add(token_cookie(state, token.clone()));
    Ok((jar, Json(SessionResponse { user, token })))
}

/// Sign in with the accepted credential pair.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Result<(CookieJar, Json<SessionResponse>)> {
    let user = state
        .sessions
        .login(credentials.email.trim(), &credentials.password)?;
    start_session(&state, jar, user)
}

/// Create an account and sign in as it.
async fn signup(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Result<(CookieJar, Json<SessionResponse>)> {
    let email = credentials.email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }

    let user = state.sessions.signup(email, &credentials.password);
    start_session(&state, jar, user)
}

/// Drop the token cookie, and end the session if the caller holds it.
async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<MaybeViewer>,
    jar: CookieJar,
) -> (StatusCode, CookieJar) {
    if let Some(user_id) = viewer.user_id() {
        state.sessions.logout_as(user_id);
    }
    let jar = jar.remove(token_cookie(&state, String::new()));
    (StatusCode::NO_CONTENT, jar)
}

/// The caller's session user, or `null` for anyone else.
async fn current_session(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<MaybeViewer>,
) -> Json<Option<User>> {
    Json(
        viewer
            .user_id()
            .and_then(|user_id| state.sessions.current_for(user_id)),
    )
}
