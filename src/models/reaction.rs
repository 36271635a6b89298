// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Reaction records and their derived per-post aggregate.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Kind of a stored reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ReactionKind {
    Like,
    Dislike,
}

/// Reaction document stored at `posts/{post_id}/reactions/{id}`.
///
/// At most one record exists per `(post_id, user_id)`; the reaction store
/// maintains that, the backend schema does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRecord {
    /// Document ID
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub kind: ReactionKind,
}

/// Reaction fields supplied on insert; the store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub user_id: String,
    pub kind: ReactionKind,
}

/// The viewer's own reaction to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ViewerReaction {
    #[default]
    None,
    Like,
    Dislike,
}

impl From<ReactionKind> for ViewerReaction {
    fn from(kind: ReactionKind) -> Self {
        match kind {
            ReactionKind::Like => ViewerReaction::Like,
            ReactionKind::Dislike => ViewerReaction::Dislike,
        }
    }
}

/// Counts and viewer state derived from a post's reaction records.
///
/// Never persisted; recomputed on every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AggregatedReactions {
    pub like_count: u32,
    pub dislike_count: u32,
    pub viewer_reaction: ViewerReaction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_client_field_names() {
        let record = ReactionRecord {
            id: "r1".to_string(),
            post_id: "p1".to_string(),
            user_id: "u1".to_string(),
            kind: ReactionKind::Dislike,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["postId"], "p1");
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["kind"], "dislike");
    }

    #[test]
    fn test_default_aggregate_is_empty() {
        let agg = AggregatedReactions::default();
        assert_eq!(agg.like_count, 0);
        assert_eq!(agg.dislike_count, 0);
        assert_eq!(agg.viewer_reaction, ViewerReaction::None);
    }
}
