// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Post model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Creation time of a post as the backend hands it back.
///
/// Documents written by the web client carry a `{ seconds, nanoseconds }`
/// wrapper; documents written by this service may carry an RFC3339 date.
/// Exactly one representation is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum BackendTimestamp {
    /// Epoch seconds wrapper.
    Seconds {
        #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
        seconds: i64,
    },
    /// Native date value.
    Date(DateTime<Utc>),
}

impl BackendTimestamp {
    /// Timestamp for the current instant, in the epoch-seconds encoding.
    pub fn now() -> Self {
        BackendTimestamp::Seconds {
            seconds: Utc::now().timestamp(),
        }
    }

    /// Resolve to a UTC instant. `None` if the seconds are out of range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match *self {
            BackendTimestamp::Seconds { seconds } => {
                DateTime::from_timestamp_millis(seconds.checked_mul(1000)?)
            }
            BackendTimestamp::Date(date) => Some(date),
        }
    }
}

impl From<DateTime<Utc>> for BackendTimestamp {
    fn from(date: DateTime<Utc>) -> Self {
        BackendTimestamp::Date(date)
    }
}

/// Post document stored in the `posts` collection.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Document ID
    pub id: String,
    /// Author identifier (email)
    pub author: String,
    /// Post body
    pub content: String,
    /// Creation time
    pub timestamp: BackendTimestamp,
}

/// Fields supplied when creating a post; the store assigns the ID.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author: String,
    pub content: String,
    pub timestamp: BackendTimestamp,
}

impl NewPost {
    pub fn into_post(self, id: String) -> Post {
        Post {
            id,
            author: self.author,
            content: self.content,
            timestamp: self.timestamp,
        }
    }
}
