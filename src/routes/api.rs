// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Feed, post and reaction API routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::{MaybeViewer, Viewer};
use crate::models::{AggregatedReactions, BackendTimestamp, Post, ReactionKind};
use crate::time_utils::{format_timestamp_in, format_utc_rfc3339};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use chrono::{FixedOffset, Local};
use futures_util::{stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Upper bound on concurrent reaction fetches while building a feed.
const MAX_CONCURRENT_DB_OPS: usize = 16;

/// Routes open to anonymous viewers (viewer identity is optional).
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/posts", get(get_feed))
        .route("/api/users/{user_id}/posts", get(get_user_posts))
        .route("/api/posts/{post_id}/reactions", get(get_reactions))
}

/// Routes that need a signed-in viewer.
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/posts", post(create_post))
        .route(
            "/api/posts/{post_id}/reactions",
            put(set_reaction).delete(clear_reaction),
        )
}

// ─── Posts ───────────────────────────────────────────────────

/// Post with display fields and the viewer's reaction summary.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: BackendTimestamp,
    /// RFC3339, absent if the stored timestamp is unreadable
    pub created_at: Option<String>,
    /// e.g. `Jan 1, 2022 at 12:00 PM`
    pub display_time: String,
    pub reactions: AggregatedReactions,
}

#[derive(Deserialize, Default)]
struct DisplayQuery {
    /// Viewer's UTC offset in minutes (e.g. -480 for PST). Server local
    /// time is used when absent.
    tz_offset: Option<i32>,
}

impl DisplayQuery {
    fn display_time(&self, ts: &BackendTimestamp) -> Result<String> {
        match self.tz_offset {
            Some(minutes) => {
                let offset = minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or_else(|| {
                        AppError::Validation("Invalid 'tz_offset' parameter".to_string())
                    })?;
                Ok(format_timestamp_in(Some(ts), &offset))
            }
            None => Ok(format_timestamp_in(Some(ts), &Local)),
        }
    }
}

/// Attach reaction summaries to posts, preserving order.
///
/// Any failed fetch fails the whole response; counts are never reported
/// as zero in place of an unknown value.
async fn build_post_responses(
    state: &AppState,
    posts: Vec<Post>,
    viewer: Option<&str>,
    display: &DisplayQuery,
) -> Result<Vec<PostResponse>> {
    let ids: Vec<String> = posts.iter().map(|post| post.id.clone()).collect();
    let store = state.reactions.clone();
    let viewer = viewer.map(str::to_owned);
    let reactions = stream::iter(ids)
        .map(move |post_id| {
            let store = store.clone();
            let viewer = viewer.clone();
            async move { store.aggregated(&post_id, viewer.as_deref()).await }
        })
        .buffered(MAX_CONCURRENT_DB_OPS)
        .collect::<Vec<Result<AggregatedReactions>>>()
        .await
        .into_iter()
        .collect::<Result<Vec<AggregatedReactions>>>()?;

    posts
        .into_iter()
        .zip(reactions)
        .map(|(post, reactions)| {
            Ok(PostResponse {
                display_time: display.display_time(&post.timestamp)?,
                created_at: post.timestamp.to_datetime().map(format_utc_rfc3339),
                id: post.id,
                author: post.author,
                content: post.content,
                timestamp: post.timestamp,
                reactions,
            })
        })
        .collect()
}

/// Full feed, newest first.
async fn get_feed(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<MaybeViewer>,
    Query(display): Query<DisplayQuery>,
) -> Result<Json<Vec<PostResponse>>> {
    let posts = state.posts.feed().await?;
    let response = build_post_responses(&state, posts, viewer.user_id(), &display).await?;
    Ok(Json(response))
}

/// Posts by one author (profile and "my submissions" pages).
async fn get_user_posts(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Extension(viewer): Extension<MaybeViewer>,
    Query(display): Query<DisplayQuery>,
) -> Result<Json<Vec<PostResponse>>> {
    let posts = state.posts.posts_by_author(&user_id).await?;
    let response = build_post_responses(&state, posts, viewer.user_id(), &display).await?;
    Ok(Json(response))
}

#[derive(Deserialize, Validate)]
struct CreatePostRequest {
    #[validate(length(
        max = 5000,
        message = "Post content must be at most 5000 characters"
    ))]
    content: String,
}

/// Create a post authored by the viewer.
async fn create_post(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<Viewer>,
    Query(display): Query<DisplayQuery>,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    // Reject a bad offset before anything is written
    display.display_time(&BackendTimestamp::now())?;

    let post = state
        .posts
        .create_post(Some(&viewer.user_id), &request.content)
        .await?;

    let mut response = build_post_responses(
        &state,
        vec![post],
        Some(&viewer.user_id),
        &display,
    )
    .await?;

    let created = response
        .pop()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Created post missing from response")))?;
    Ok((StatusCode::CREATED, Json(created)))
}

// ─── Reactions ───────────────────────────────────────────────

/// Reaction summary for one post.
async fn get_reactions(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
    Extension(viewer): Extension<MaybeViewer>,
) -> Result<Json<AggregatedReactions>> {
    let aggregated = state
        .reactions
        .aggregated(&post_id, viewer.user_id())
        .await?;
    Ok(Json(aggregated))
}

#[derive(Deserialize)]
struct ReactionRequest {
    kind: ReactionKind,
}

/// Toggle the viewer's reaction and return the fresh summary.
async fn set_reaction(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
    Extension(viewer): Extension<Viewer>,
    Json(request): Json<ReactionRequest>,
) -> Result<Json<AggregatedReactions>> {
    // Reactions on unknown posts would be orphaned
    state.posts.get_post(&post_id).await?;

    state
        .reactions
        .set_reaction(&post_id, Some(&viewer.user_id), request.kind)
        .await?;

    let aggregated = state
        .reactions
        .aggregated(&post_id, Some(&viewer.user_id))
        .await?;
    Ok(Json(aggregated))
}

/// Remove the viewer's reaction and return the fresh summary.
async fn clear_reaction(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
    Extension(viewer): Extension<Viewer>,
) -> Result<Json<AggregatedReactions>> {
    state.posts.get_post(&post_id).await?;

    state
        .reactions
        .clear_reaction(&post_id, Some(&viewer.user_id))
        .await?;

    let aggregated = state
        .reactions
        .aggregated(&post_id, Some(&viewer.user_id))
        .await?;
    Ok(Json(aggregated))
}
