// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post feed and post creation.

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::models::{BackendTimestamp, NewPost, Post};
use std::cmp::Reverse;
use std::sync::Arc;

/// Service for reading the feed and creating posts.
#[derive(Clone)]
pub struct PostService {
    db: Arc<dyn DocumentStore>,
}

impl PostService {
    pub fn new(db: Arc<dyn DocumentStore>) -> Self {
        Self { db }
    }

    /// All posts, newest first.
    pub async fn feed(&self) -> Result<Vec<Post>> {
        let mut posts = self.db.list_posts().await?;
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    /// Posts by one author, newest first.
    pub async fn posts_by_author(&self, author: &str) -> Result<Vec<Post>> {
        let mut posts = self.db.list_posts_by_author(author).await?;
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    /// Look up a single post.
    pub async fn get_post(&self, post_id: &str) -> Result<Post> {
        self.db
            .get_post(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))
    }

    /// Create a post authored by the signed-in user.
    ///
    /// Whitespace-only content is rejected; otherwise the content is stored
    /// as given.
    pub async fn create_post(&self, author: Option<&str>, content: &str) -> Result<Post> {
        let author = author
            .filter(|a| !a.trim().is_empty())
            .ok_or(AppError::AuthRequired)?;

        if content.trim().is_empty() {
            return Err(AppError::Validation("Post content is empty".to_string()));
        }

        let post = self
            .db
            .add_post(NewPost {
                author: author.to_string(),
                content: content.to_string(),
                timestamp: BackendTimestamp::now(),
            })
            .await?;

        tracing::info!(post_id = %post.id, author, "Post created");
        Ok(post)
    }
}

/// Newest first; posts with an unreadable timestamp sink to the end.
fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        Reverse(a.timestamp.to_datetime())
            .cmp(&Reverse(b.timestamp.to_datetime()))
            .then_with(|| a.id.cmp(&b.id))
    });
}
