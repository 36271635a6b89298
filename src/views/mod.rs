// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presentational state for the web client.
//!
//! Views hold what is rendered and turn user input into intents; they do
//! not talk to the backend. Callers fetch, then hand results back in.

pub mod create_post;
pub mod feed;
pub mod login_button;
pub mod nav;
pub mod post_item;

pub use create_post::CreatePostView;
pub use feed::PostFeedView;
pub use login_button::LoginButton;
pub use nav::ClientRoute;
pub use post_item::{PostIntent, PostItemView, ReactionButton, RefreshOutcome, RefreshTicket};
