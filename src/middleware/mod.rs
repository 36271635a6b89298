// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (viewer identity, security headers).

pub mod auth;
pub mod security;

pub use auth::{identify_viewer, require_auth, MaybeViewer, Viewer};
