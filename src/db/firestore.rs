// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore adapter for the document store contract.
//!
//! Layout:
//! - `posts/{post_id}` (post documents)
//! - `posts/{post_id}/reactions/{reaction_id}` (one record per reacting user)

use crate::db::{collections, new_document_id, DocumentStore};
use crate::error::{AppError, Result};
use crate::models::{NewPost, NewReaction, Post, ReactionRecord};
use async_trait::async_trait;

fn backend_error(e: impl std::fmt::Display) -> AppError {
    AppError::BackendUnavailable(e.to_string())
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: firestore::FirestoreDb,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id).await.map_err(|e| {
            AppError::BackendUnavailable(format!("Failed to connect to Firestore: {}", e))
        })?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self { client })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::BackendUnavailable(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self { client })
    }

    /// Path of the post document that parents its reactions.
    fn post_path(&self, post_id: &str) -> Result<firestore::ParentPathBuilder> {
        self.client
            .parent_path(collections::POSTS, post_id)
            .map_err(backend_error)
    }
}

#[async_trait]
impl DocumentStore for FirestoreDb {
    // ─── Post Operations ─────────────────────────────────────────

    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.client
            .fluent()
            .select()
            .from(collections::POSTS)
            .obj()
            .query()
            .await
            .map_err(backend_error)
    }

    async fn list_posts_by_author(&self, author: &str) -> Result<Vec<Post>> {
        self.client
            .fluent()
            .select()
            .from(collections::POSTS)
            .filter(|q| q.for_all([q.field("author").eq(author)]))
            .obj()
            .query()
            .await
            .map_err(backend_error)
    }

    async fn get_post(&self, post_id: &str) -> Result<Option<Post>> {
        self.client
            .fluent()
            .select()
            .by_id_in(collections::POSTS)
            .obj()
            .one(post_id)
            .await
            .map_err(backend_error)
    }

    async fn add_post(&self, post: NewPost) -> Result<Post> {
        let post = post.into_post(new_document_id());

        let _: () = self
            .client
            .fluent()
            .insert()
            .into(collections::POSTS)
            .document_id(&post.id)
            .object(&post)
            .execute()
            .await
            .map_err(backend_error)?;

        tracing::debug!(post_id = %post.id, author = %post.author, "Post stored");
        Ok(post)
    }

    // ─── Reaction Operations ─────────────────────────────────────

    async fn list_reactions(&self, post_id: &str) -> Result<Vec<ReactionRecord>> {
        let parent = self.post_path(post_id)?;

        self.client
            .fluent()
            .select()
            .from(collections::REACTIONS)
            .parent(&parent)
            .obj()
            .query()
            .await
            .map_err(backend_error)
    }

    async fn add_reaction(&self, post_id: &str, reaction: NewReaction) -> Result<ReactionRecord> {
        let parent = self.post_path(post_id)?;
        let record = ReactionRecord {
            id: new_document_id(),
            post_id: post_id.to_string(),
            user_id: reaction.user_id,
            kind: reaction.kind,
        };

        let _: () = self
            .client
            .fluent()
            .insert()
            .into(collections::REACTIONS)
            .document_id(&record.id)
            .parent(&parent)
            .object(&record)
            .execute()
            .await
            .map_err(backend_error)?;

        Ok(record)
    }

    async fn delete_reaction(&self, post_id: &str, reaction_id: &str) -> Result<()> {
        let parent = self.post_path(post_id)?;

        self.client
            .fluent()
            .delete()
            .from(collections::REACTIONS)
            .parent(&parent)
            .document_id(reaction_id)
            .execute()
            .await
            .map_err(backend_error)?;
        Ok(())
    }
}
