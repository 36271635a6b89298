// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod post;
pub mod reaction;
pub mod user;

pub use post::{BackendTimestamp, NewPost, Post};
pub use reaction::{AggregatedReactions, NewReaction, ReactionKind, ReactionRecord, ViewerReaction};
pub use user::User;
