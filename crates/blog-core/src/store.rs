//! Read-only access to posts, as consumed by the web layer.

use std::sync::Arc;

use crate::domain::{Post, PostId};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// The two queries the pages need, on top of whichever repository is wired in.
#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All posts, ascending by id. An empty store yields an empty list.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_post(&self, id: PostId) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }
}
