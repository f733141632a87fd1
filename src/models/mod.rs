/// Data models for the blog service
use serde::{Deserialize, Serialize};

/// A persisted blog post.
///
/// `id` is assigned by SQLite at insert time and never changes; the three
/// text fields are immutable after creation (there is no update endpoint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
}
