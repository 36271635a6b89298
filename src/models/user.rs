// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session user model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Signed-in user held by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    /// Email address (also the viewer ID used for reactions)
    pub email: String,
    /// Display name
    pub username: String,
    /// Number of posts authored
    pub posts_count: u32,
    /// Number of accounts followed
    pub following_count: u32,
    /// Number of followers
    pub followers_count: u32,
}

impl User {
    /// Fresh profile for a newly signed-up email; the username is the
    /// local part before `@`.
    pub fn new_signup(email: &str) -> Self {
        let username = email.split('@').next().unwrap_or_default().to_string();
        Self {
            email: email.to_string(),
            username,
            posts_count: 0,
            following_count: 0,
            followers_count: 0,
        }
    }
}
