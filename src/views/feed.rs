// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The post feed.

use crate::models::Post;
use crate::views::post_item::PostItemView;

/// One `PostItemView` per post, in the order given.
#[derive(Debug, Clone, Default)]
pub struct PostFeedView {
    items: Vec<PostItemView>,
}

impl PostFeedView {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            items: posts.into_iter().map(PostItemView::new).collect(),
        }
    }

    pub fn items(&self) -> &[PostItemView] {
        &self.items
    }

    pub fn item_mut(&mut self, post_id: &str) -> Option<&mut PostItemView> {
        self.items.iter_mut().find(|item| item.post().id == post_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Leaving the feed unmounts every item.
    pub fn unmount(&mut self) {
        self.items.iter_mut().for_each(PostItemView::unmount);
    }
}
