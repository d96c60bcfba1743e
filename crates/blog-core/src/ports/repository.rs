use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, PostId};
use crate::error::RepoError;

/// Generic read/delete operations shared by every repository.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Every stored entity, ordered by ascending id.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
///
/// The web layer only reads. `create` and `update` exist for the
/// administrative side (fixtures, migrations of content) and own the
/// timestamp rules: both are set on insert, only `updated` moves afterwards.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    async fn create(&self, new: NewPost) -> Result<Post, RepoError>;

    /// Fails with [`RepoError::NotFound`] when no post has `id`.
    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError>;
}
