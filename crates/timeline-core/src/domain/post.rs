use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Surrogate key of a timeline post, assigned by the store.
pub type PostId = i64;

/// Timeline post entity - a guestbook message left by a visitor.
///
/// Posts are immutable once stored; the only transition after creation is
/// deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePost {
    pub id: PostId,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A submission as received from a visitor, before validation.
///
/// Every field may be missing; see [`crate::validation::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
}

impl PostDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            content: Some(content.into()),
        }
    }
}

/// A validated post that has not been persisted yet.
///
/// Only [`crate::validation::validate`] produces these, and the store
/// assigns `id` and `created_at` when it persists one.
///
/// ```compile_fail
/// use timeline_core::domain::NewTimelinePost;
///
/// let post = NewTimelinePost {
///     name: "Alice".to_string(),
///     email: "nope".to_string(),
///     content: String::new(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimelinePost {
    name: String,
    email: String,
    content: String,
}

impl NewTimelinePost {
    pub(crate) fn new(name: String, email: String, content: String) -> Self {
        Self {
            name,
            email,
            content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Split into `(name, email, content)`.
    pub fn into_parts(self) -> (String, String, String) {
        (self.name, self.email, self.content)
    }

    /// Attach the store-assigned identity, producing the durable record.
    pub fn into_post(self, id: PostId, created_at: DateTime<Utc>) -> TimelinePost {
        TimelinePost {
            id,
            name: self.name,
            email: self.email,
            content: self.content,
            created_at,
        }
    }
}
