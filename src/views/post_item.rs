// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! A single post in the feed with its like/dislike controls.

use crate::error::Result;
use crate::models::{AggregatedReactions, Post, ReactionKind, ViewerReaction};
use crate::services::ReactionStore;
use crate::time_utils::format_timestamp;

/// What the viewer asked for by clicking a reaction control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostIntent {
    ToggleLike,
    ToggleDislike,
}

impl PostIntent {
    pub fn kind(self) -> ReactionKind {
        match self {
            PostIntent::ToggleLike => ReactionKind::Like,
            PostIntent::ToggleDislike => ReactionKind::Dislike,
        }
    }

    /// Carry the intent out against the reaction store.
    pub async fn dispatch(
        self,
        store: &ReactionStore,
        post_id: &str,
        viewer_id: Option<&str>,
    ) -> Result<()> {
        store.set_reaction(post_id, viewer_id, self.kind()).await
    }
}

/// Rendered state of one reaction control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionButton {
    /// CSS class (`like-btn` / `dislike-btn`)
    pub class: &'static str,
    /// Emoji plus count, e.g. `👍 3`
    pub label: String,
    /// Whether the viewer's own reaction is this kind
    pub active: bool,
}

/// Handle for one in-flight reaction fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// What happened to a fetch result handed back to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer fetch was started or the view is gone; result dropped.
    Stale,
    /// The fetch failed; previous counts kept.
    Failed,
}

/// View state for a post and its reaction counts.
#[derive(Debug, Clone)]
pub struct PostItemView {
    post: Post,
    reactions: AggregatedReactions,
    latest_ticket: u64,
    mounted: bool,
}

impl PostItemView {
    pub fn new(post: Post) -> Self {
        Self::with_reactions(post, AggregatedReactions::default())
    }

    pub fn with_reactions(post: Post, reactions: AggregatedReactions) -> Self {
        Self {
            post,
            reactions,
            latest_ticket: 0,
            mounted: true,
        }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn reactions(&self) -> AggregatedReactions {
        self.reactions
    }

    pub fn author(&self) -> &str {
        &self.post.author
    }

    pub fn content(&self) -> &str {
        &self.post.content
    }

    pub fn formatted_time(&self) -> String {
        format_timestamp(Some(&self.post.timestamp))
    }

    pub fn like_button(&self) -> ReactionButton {
        ReactionButton {
            class: "like-btn",
            label: format!("👍 {}", self.reactions.like_count),
            active: self.reactions.viewer_reaction == ViewerReaction::Like,
        }
    }

    pub fn dislike_button(&self) -> ReactionButton {
        ReactionButton {
            class: "dislike-btn",
            label: format!("👎 {}", self.reactions.dislike_count),
            active: self.reactions.viewer_reaction == ViewerReaction::Dislike,
        }
    }

    pub fn click_like(&self) -> PostIntent {
        PostIntent::ToggleLike
    }

    pub fn click_dislike(&self) -> PostIntent {
        PostIntent::ToggleDislike
    }

    /// Plain-text rendering, one field per line.
    pub fn text(&self) -> String {
        format!(
            "{}\n{}\n{}\n{} {}",
            self.author(),
            self.formatted_time(),
            self.content(),
            self.like_button().label,
            self.dislike_button().label
        )
    }

    /// Start a fetch. Only the most recent ticket can apply its result.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest_ticket += 1;
        RefreshTicket(self.latest_ticket)
    }

    /// Hand a fetch result back to the view.
    pub fn apply_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<AggregatedReactions>,
    ) -> RefreshOutcome {
        if !self.mounted || ticket.0 != self.latest_ticket {
            tracing::debug!(post_id = %self.post.id, "Dropping stale reaction refresh");
            return RefreshOutcome::Stale;
        }

        match result {
            Ok(reactions) => {
                self.reactions = reactions;
                RefreshOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(post_id = %self.post.id, error = %err, "Reaction refresh failed");
                RefreshOutcome::Failed
            }
        }
    }

    /// The view is leaving the screen; later results are discarded.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::BackendTimestamp;

    fn sample_post() -> Post {
        Post {
            id: "test-post-1".to_string(),
            author: "test@example.com".to_string(),
            content: "This is a test post".to_string(),
            timestamp: BackendTimestamp::Seconds {
                seconds: 1640995200,
            },
        }
    }

    fn counts(like: u32, dislike: u32, viewer: ViewerReaction) -> AggregatedReactions {
        AggregatedReactions {
            like_count: like,
            dislike_count: dislike,
            viewer_reaction: viewer,
        }
    }

    #[test]
    fn test_renders_post_and_zero_counts() {
        let view = PostItemView::new(sample_post());
        let text = view.text();

        assert!(text.contains("test@example.com"));
        assert!(text.contains("This is a test post"));
        assert!(text.contains("👍 0"));
        assert!(text.contains("👎 0"));
        assert!(text.contains("2022") || text.contains("2021"));
    }

    #[test]
    fn test_buttons_reflect_viewer_reaction() {
        let view =
            PostItemView::with_reactions(sample_post(), counts(2, 1, ViewerReaction::Dislike));

        let like = view.like_button();
        let dislike = view.dislike_button();
        assert_eq!(like.class, "like-btn");
        assert_eq!(like.label, "👍 2");
        assert!(!like.active);
        assert_eq!(dislike.class, "dislike-btn");
        assert_eq!(dislike.label, "👎 1");
        assert!(dislike.active);
    }

    #[test]
    fn test_clicks_emit_intents() {
        let view = PostItemView::new(sample_post());
        assert_eq!(view.click_like().kind(), ReactionKind::Like);
        assert_eq!(view.click_dislike().kind(), ReactionKind::Dislike);
    }

    #[test]
    fn test_older_refresh_is_dropped() {
        let mut view = PostItemView::new(sample_post());
        let first = view.begin_refresh();
        let second = view.begin_refresh();

        assert_eq!(
            view.apply_refresh(second, Ok(counts(1, 0, ViewerReaction::Like))),
            RefreshOutcome::Applied
        );
        assert_eq!(
            view.apply_refresh(first, Ok(counts(0, 0, ViewerReaction::None))),
            RefreshOutcome::Stale
        );
        assert_eq!(view.reactions().like_count, 1);
    }

    #[test]
    fn test_unmounted_view_ignores_results() {
        let mut view = PostItemView::new(sample_post());
        let ticket = view.begin_refresh();
        view.unmount();

        assert_eq!(
            view.apply_refresh(ticket, Ok(counts(5, 5, ViewerReaction::Like))),
            RefreshOutcome::Stale
        );
        assert_eq!(view.reactions(), AggregatedReactions::default());
    }

    #[test]
    fn test_failed_refresh_keeps_counts() {
        let mut view =
            PostItemView::with_reactions(sample_post(), counts(4, 2, ViewerReaction::None));
        let ticket = view.begin_refresh();

        let outcome = view.apply_refresh(
            ticket,
            Err(AppError::BackendUnavailable("timeout".to_string())),
        );
        assert_eq!(outcome, RefreshOutcome::Failed);
        assert_eq!(view.like_button().label, "👍 4");
        assert_eq!(view.dislike_button().label, "👎 2");
    }
}
