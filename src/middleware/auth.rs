// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT viewer identity middleware.
//!
//! Tokens are read from the `feed_token` cookie first, then from an
//! `Authorization: Bearer` header.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Cookie holding the session JWT.
pub const TOKEN_COOKIE: &str = "feed_token";

/// Session lifetime.
const TOKEN_TTL_SECS: usize = 7 * 24 * 60 * 60;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (viewer ID, the user's email)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Authenticated viewer extracted from JWT.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub user_id: String,
}

/// Viewer identity on routes that also serve anonymous requests.
#[derive(Debug, Clone, Default)]
pub struct MaybeViewer(pub Option<Viewer>);

impl MaybeViewer {
    pub fn user_id(&self) -> Option<&str> {
        self.0.as_ref().map(|v| v.user_id.as_str())
    }
}

fn extract_token(jar: &CookieJar, request: &Request) -> Option<String> {
    if let Some(cookie) = jar.get(TOKEN_COOKIE) {
        return Some(cookie.value().to_string());
    }

    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Decode and validate a session token.
pub fn verify_jwt(token: &str, signing_key: &[u8]) -> Result<Viewer, AppError> {
    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);

    let token_data =
        decode::<Claims>(token, &key, &validation).map_err(|_| AppError::InvalidToken)?;

    if token_data.claims.sub.is_empty() {
        return Err(AppError::InvalidToken);
    }

    Ok(Viewer {
        user_id: token_data.claims.sub,
    })
}

/// Middleware that requires valid JWT authentication.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&jar, &request).ok_or(AppError::AuthRequired)?;
    let viewer = verify_jwt(&token, &state.config.jwt_signing_key)?;

    request.extensions_mut().insert(viewer);

    Ok(next.run(request).await)
}

/// Middleware that records the viewer if a valid token is present.
///
/// A missing or invalid token yields an anonymous viewer rather than an
/// error.
pub async fn identify_viewer(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let viewer = extract_token(&jar, &request).and_then(|token| {
        verify_jwt(&token, &state.config.jwt_signing_key)
            .map_err(|_| tracing::debug!("Ignoring invalid token on public route"))
            .ok()
    });

    request.extensions_mut().insert(MaybeViewer(viewer));

    next.run(request).await
}

/// Create a JWT for a viewer session.
pub fn create_jwt(user_id: &str, signing_key: &[u8]) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}
