// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer: the document store contract and its adapters.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::error::Result;
use crate::models::{NewPost, NewReaction, Post, ReactionRecord};
use async_trait::async_trait;

/// Collection names as constants.
pub mod collections {
    pub const POSTS: &str = "posts";
    /// Subcollection under each post: `posts/{post_id}/reactions`
    pub const REACTIONS: &str = "reactions";
}

/// Minimal CRUD contract the service needs from a document database.
///
/// Every failure surfaces as `AppError::BackendUnavailable`; adapters do
/// not retry.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    // --- Posts ---
    async fn list_posts(&self) -> Result<Vec<Post>>;

    async fn list_posts_by_author(&self, author: &str) -> Result<Vec<Post>>;

    async fn get_post(&self, post_id: &str) -> Result<Option<Post>>;

    async fn add_post(&self, post: NewPost) -> Result<Post>;

    // --- Reactions (scoped per post) ---
    async fn list_reactions(&self, post_id: &str) -> Result<Vec<ReactionRecord>>;

    async fn add_reaction(&self, post_id: &str, reaction: NewReaction) -> Result<ReactionRecord>;

    async fn delete_reaction(&self, post_id: &str, reaction_id: &str) -> Result<()>;
}

/// Generate a document ID for a new record.
pub(crate) fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
