// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;
pub mod posts;
pub mod reactions;
pub mod session;

pub use aggregator::aggregate;
pub use posts::PostService;
pub use reactions::ReactionStore;
pub use session::SessionStore;
