// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store.
//!
//! Backs local runs without Firestore and the test suite. Availability can
//! be toggled to exercise `BackendUnavailable` paths.

use crate::db::{new_document_id, DocumentStore};
use crate::error::{AppError, Result};
use crate::models::{NewPost, NewReaction, Post, ReactionRecord};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Inner {
    posts: DashMap<String, Post>,
    /// Reaction records keyed by post ID, in insertion order.
    reactions: DashMap<String, Vec<ReactionRecord>>,
    unavailable: AtomicBool,
}

/// In-memory document store. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Inner>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.inner.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::BackendUnavailable(
                "In-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }

    /// Store a post with a caller-chosen ID (fixtures and imports).
    pub fn insert_post(&self, post: Post) {
        self.inner.posts.insert(post.id.clone(), post);
    }
}

#[async_trait]
impl DocumentStore for MemoryDb {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.check_available()?;
        Ok(self
            .inner
            .posts
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn list_posts_by_author(&self, author: &str) -> Result<Vec<Post>> {
        self.check_available()?;
        Ok(self
            .inner
            .posts
            .iter()
            .filter(|entry| entry.value().author == author)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn get_post(&self, post_id: &str) -> Result<Option<Post>> {
        self.check_available()?;
        Ok(self.inner.posts.get(post_id).map(|p| p.value().clone()))
    }

    async fn add_post(&self, post: NewPost) -> Result<Post> {
        self.check_available()?;
        let post = post.into_post(new_document_id());
        self.inner.posts.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn list_reactions(&self, post_id: &str) -> Result<Vec<ReactionRecord>> {
        self.check_available()?;
        Ok(self
            .inner
            .reactions
            .get(post_id)
            .map(|records| records.value().clone())
            .unwrap_or_default())
    }

    async fn add_reaction(&self, post_id: &str, reaction: NewReaction) -> Result<ReactionRecord> {
        self.check_available()?;
        let record = ReactionRecord {
            id: new_document_id(),
            post_id: post_id.to_string(),
            user_id: reaction.user_id,
            kind: reaction.kind,
        };
        self.inner
            .reactions
            .entry(post_id.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn delete_reaction(&self, post_id: &str, reaction_id: &str) -> Result<()> {
        self.check_available()?;
        if let Some(mut records) = self.inner.reactions.get_mut(post_id) {
            records.retain(|r| r.id != reaction_id);
        }
        Ok(())
    }
}
