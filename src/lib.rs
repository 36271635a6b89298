// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Social feed: posts with per-user like/dislike reactions.
//!
//! This crate provides the backend API and client-side view state for a
//! small social feed backed by a document database.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod views;

use config::Config;
use db::DocumentStore;
use services::{PostService, ReactionStore, SessionStore};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Arc<dyn DocumentStore>,
    pub posts: PostService,
    pub reactions: ReactionStore,
    pub sessions: SessionStore,
}

impl AppState {
    /// Wire services over a document store.
    pub fn new(config: Config, db: Arc<dyn DocumentStore>) -> Self {
        let sessions = SessionStore::new(&config.login_email, &config.login_password);
        Self {
            posts: PostService::new(db.clone()),
            reactions: ReactionStore::new(db.clone()),
            sessions,
            db,
            config,
        }
    }
}
