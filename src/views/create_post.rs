// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post composer.

/// Composer with a single pending-content field.
///
/// `on_post` fires once per accepted submission with the content as typed.
pub struct CreatePostView<F: FnMut(String)> {
    text: String,
    on_post: F,
}

impl<F: FnMut(String)> CreatePostView<F> {
    pub fn new(on_post: F) -> Self {
        Self {
            text: String::new(),
            on_post,
        }
    }

    pub fn heading(&self) -> &'static str {
        "Create Post"
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Submit the pending content. Whitespace-only content is ignored and
    /// left in place. Returns whether the callback fired.
    pub fn submit(&mut self) -> bool {
        if self.text.trim().is_empty() {
            return false;
        }

        let content = std::mem::take(&mut self.text);
        (self.on_post)(content);
        true
    }
}
