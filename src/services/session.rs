// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-wide session state for the stand-in auth flow.
//!
//! Holds at most one signed-in user. Nothing is persisted; a restart
//! starts signed out.

use crate::error::{AppError, Result};
use crate::models::User;
use std::sync::{PoisonError, RwLock};

/// Session store with explicit login/logout/signup transitions.
pub struct SessionStore {
    login_email: String,
    login_password: String,
    current: RwLock<Option<User>>,
}

impl SessionStore {
    /// Create a signed-out store accepting a single credential pair.
    pub fn new(login_email: impl Into<String>, login_password: impl Into<String>) -> Self {
        Self {
            login_email: login_email.into(),
            login_password: login_password.into(),
            current: RwLock::new(None),
        }
    }

    /// The signed-in user, if any.
    pub fn current(&self) -> Option<User> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sign in. Only the configured pair is accepted; a failed attempt
    /// leaves the current session untouched.
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        if email != self.login_email || password != self.login_password {
            tracing::warn!(email, "Login rejected");
            return Err(AppError::InvalidCredentials);
        }

        let user = User {
            email: email.to_string(),
            username: "testuser".to_string(),
            posts_count: 3,
            following_count: 2,
            followers_count: 5,
        };
        self.replace(Some(user.clone()));
        tracing::info!(email, "Session started");
        Ok(user)
    }

    /// Create a new account and sign in as it. Always succeeds.
    pub fn signup(&self, email: &str, _password: &str) -> User {
        let user = User::new_signup(email);
        self.replace(Some(user.clone()));
        tracing::info!(email, username = %user.username, "Signed up");
        user
    }

    /// Sign out.
    pub fn logout(&self) {
        if let Some(user) = self.current() {
            tracing::info!(email = %user.email, "Session ended");
        }
        self.replace(None);
    }

    /// The signed-in user, only if it is `user_id`.
    pub fn current_for(&self, user_id: &str) -> Option<User> {
        self.current().filter(|user| user.email == user_id)
    }

    /// Sign out, but only if `user_id` holds the session. Returns whether
    /// a session was ended.
    pub fn logout_as(&self, user_id: &str) -> bool {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if current.as_ref().is_some_and(|user| user.email == user_id) {
            *current = None;
            tracing::info!(email = user_id, "Session ended");
            true
        } else {
            tracing::debug!(user_id, "Logout by a viewer without the session");
            false
        }
    }

    fn replace(&self, user: Option<User>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = user;
    }
}
