//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, NotSet, QueryOrder, Set,
};

use blog_core::domain::{NewPost, Post, PostChanges, PostId};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

use super::entity::post::{self, Entity as PostEntity};

fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = id, "Deleted post");
        Ok(())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, new: NewPost) -> Result<Post, RepoError> {
        Post::validate_title(&new.title)?;

        // Timestamps are filled in by the entity's before_save hook.
        let model = post::ActiveModel {
            id: NotSet,
            title: Set(new.title),
            content: Set(new.content),
            created: NotSet,
            updated: NotSet,
        }
        .insert(&self.db)
        .await
        .map_err(query_error)?;

        tracing::debug!(post_id = model.id, "Created post");
        Ok(model.into())
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError> {
        if let Some(title) = &changes.title {
            Post::validate_title(title)?;
        }

        let existing = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?
            .ok_or(RepoError::NotFound)?;

        let mut active = existing.into_active_model();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }

        let model = active.update(&self.db).await.map_err(query_error)?;

        tracing::debug!(post_id = id, "Updated post");
        Ok(model.into())
    }
}
