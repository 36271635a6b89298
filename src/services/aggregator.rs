// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derive per-post reaction counts and the viewer's own reaction.

use crate::models::{AggregatedReactions, ReactionKind, ReactionRecord, ViewerReaction};

/// Aggregate a post's reaction records for a viewer.
///
/// Pure and order-independent. An anonymous viewer (`None`) always gets
/// `ViewerReaction::None`. If racing writes left the viewer with more than
/// one record, the record with the smallest ID wins so the answer does not
/// depend on input order.
pub fn aggregate(records: &[ReactionRecord], viewer_id: Option<&str>) -> AggregatedReactions {
    let mut like_count = 0;
    let mut dislike_count = 0;
    let mut viewer_record: Option<&ReactionRecord> = None;

    for record in records {
        match record.kind {
            ReactionKind::Like => like_count += 1,
            ReactionKind::Dislike => dislike_count += 1,
        }

        if viewer_id == Some(record.user_id.as_str())
            && viewer_record.map_or(true, |current| record.id < current.id)
        {
            viewer_record = Some(record);
        }
    }

    AggregatedReactions {
        like_count,
        dislike_count,
        viewer_reaction: viewer_record
            .map(|r| ViewerReaction::from(r.kind))
            .unwrap_or_default(),
    }
}
