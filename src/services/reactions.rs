// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reads and writes of a post's reaction records.
//!
//! The store keeps at most one record per `(post_id, user_id)`. A toggle
//! is a read-modify-write without a transaction: two concurrent toggles by
//! the same user may leave either the pre- or post-toggle state, and a
//! duplicate left behind by such a race is removed by the next write.

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::models::{AggregatedReactions, NewReaction, ReactionKind, ReactionRecord};
use crate::services::aggregator::aggregate;
use std::sync::Arc;

/// Reaction store over a document database.
#[derive(Clone)]
pub struct ReactionStore {
    db: Arc<dyn DocumentStore>,
}

impl ReactionStore {
    pub fn new(db: Arc<dyn DocumentStore>) -> Self {
        Self { db }
    }

    /// All reaction records for a post, in no particular order.
    pub async fn list_reactions(&self, post_id: &str) -> Result<Vec<ReactionRecord>> {
        self.db.list_reactions(post_id).await
    }

    /// Toggle the user's reaction on a post.
    ///
    /// - same kind already present: removed
    /// - other kind present: replaced (deleted before the new record is added)
    /// - nothing present: created
    pub async fn set_reaction(
        &self,
        post_id: &str,
        user_id: Option<&str>,
        kind: ReactionKind,
    ) -> Result<()> {
        let user_id = require_user(user_id)?;
        let existing = self.records_for_user(post_id, user_id).await?;
        let toggle_off = existing.iter().any(|r| r.kind == kind);

        for record in &existing {
            self.db.delete_reaction(post_id, &record.id).await?;
        }

        if toggle_off {
            tracing::info!(post_id, user_id, ?kind, "Reaction toggled off");
            return Ok(());
        }

        self.db
            .add_reaction(
                post_id,
                NewReaction {
                    user_id: user_id.to_string(),
                    kind,
                },
            )
            .await?;

        tracing::info!(
            post_id,
            user_id,
            ?kind,
            replaced = existing.len(),
            "Reaction set"
        );
        Ok(())
    }

    /// Remove the user's reaction on a post, if any.
    pub async fn clear_reaction(&self, post_id: &str, user_id: Option<&str>) -> Result<()> {
        let user_id = require_user(user_id)?;
        let existing = self.records_for_user(post_id, user_id).await?;

        for record in &existing {
            self.db.delete_reaction(post_id, &record.id).await?;
        }

        tracing::debug!(post_id, user_id, removed = existing.len(), "Reaction cleared");
        Ok(())
    }

    /// Fetch and aggregate a post's reactions for a viewer.
    pub async fn aggregated(
        &self,
        post_id: &str,
        viewer_id: Option<&str>,
    ) -> Result<AggregatedReactions> {
        let records = self.list_reactions(post_id).await?;
        Ok(aggregate(&records, viewer_id))
    }

    async fn records_for_user(&self, post_id: &str, user_id: &str) -> Result<Vec<ReactionRecord>> {
        Ok(self
            .list_reactions(post_id)
            .await?
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect())
    }
}

/// Per-user uniqueness needs an identity; anonymous writes are refused.
fn require_user(user_id: Option<&str>) -> Result<&str> {
    match user_id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(AppError::AuthRequired),
    }
}
