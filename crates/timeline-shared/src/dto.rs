//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Form body of `POST /api/timeline_post`.
///
/// Fields are optional so that a missing field reaches validation instead of
/// failing form decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A timeline post as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePostResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub content: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

/// Envelope of both list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePostsResponse {
    pub timeline_posts: Vec<TimelinePostResponse>,
}

/// Confirmation of `DELETE /api/timeline_post/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub message: String,
    pub deleted_id: i64,
}

impl DeletePostResponse {
    pub fn new(deleted_id: i64) -> Self {
        Self {
            message: "Post deleted successfully".to_string(),
            deleted_id,
        }
    }
}
