// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Header button that sends the viewer to the login page.

use crate::views::nav::ClientRoute;

/// Login button bound to a `navigate(path)` capability.
pub struct LoginButton<N: FnMut(&str)> {
    navigate: N,
}

impl<N: FnMut(&str)> LoginButton<N> {
    pub fn new(navigate: N) -> Self {
        Self { navigate }
    }

    pub fn label(&self) -> &'static str {
        "Log In"
    }

    pub fn click(&mut self) {
        (self.navigate)(&ClientRoute::Login.path());
    }
}
