use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned post identifier.
pub type PostId = i64;

/// Longest title a post may carry, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Post entity - a blog post as it is stored.
///
/// `created` is fixed when the post is inserted; `updated` moves forward on
/// every modification and never falls behind `created`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Fields needed to insert a post. The store assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// Partial modification of an existing post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChanges {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Post {
    /// Build a freshly inserted post: both timestamps are `now`.
    pub fn create(id: PostId, new: NewPost, now: DateTime<Utc>) -> Result<Self, DomainError> {
        Self::validate_title(&new.title)?;
        Ok(Self {
            id,
            title: new.title,
            content: new.content,
            created: now,
            updated: now,
        })
    }

    /// Apply `changes`, leaving `created` untouched and moving `updated` to `now`.
    pub fn apply(&mut self, changes: PostChanges, now: DateTime<Utc>) -> Result<(), DomainError> {
        if let Some(title) = &changes.title {
            Self::validate_title(title)?;
        }
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.updated = now.max(self.created);
        Ok(())
    }

    /// Reject titles longer than [`TITLE_MAX_CHARS`] characters.
    pub fn validate_title(title: &str) -> Result<(), DomainError> {
        let len = title.chars().count();
        if len > TITLE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "title is {len} characters long, at most {TITLE_MAX_CHARS} allowed"
            )));
        }
        Ok(())
    }
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
