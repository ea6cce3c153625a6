//! Domain DTOs for the posts API.
//!
//! # Design
//! `Post` mirrors the mock-server's schema but is defined independently, so
//! the client never links against Axum. Integration tests catch any schema
//! drift between the two crates. Only `id`, `title` and `content` are
//! required; every other field is optional on the wire and absent fields
//! deserialize to `None`.

use serde::{Deserialize, Serialize};

/// A single blog post returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// ISO-8601 date-time, e.g. `2024-01-05T09:30:00Z`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Post {
    /// Minimal post with only the required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            excerpt: None,
            author: None,
            published_at: None,
            slug: None,
        }
    }
}
