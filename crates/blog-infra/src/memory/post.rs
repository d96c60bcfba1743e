//! In-memory post repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post, PostChanges, PostId};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

struct Table {
    rows: BTreeMap<PostId, Post>,
    next_id: PostId,
}

/// Post repository backed by a `BTreeMap` behind an async RwLock.
///
/// Ids start at 1 and are never reused, so iteration order is insertion order.
/// Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).ok_or(RepoError::NotFound)?;
        tracing::debug!(post_id = id, "Deleted post");
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        let post = Post::create(id, new, Utc::now())?;
        table.next_id += 1;
        table.rows.insert(id, post.clone());

        tracing::debug!(post_id = id, "Created post");
        Ok(post)
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let post = table.rows.get_mut(&id).ok_or(RepoError::NotFound)?;

        post.apply(changes, Utc::now())?;

        tracing::debug!(post_id = id, "Updated post");
        Ok(post.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use blog_core::{DomainError, PostStore};

    use super::*;

    async fn seeded(titles: &[&str]) -> Arc<InMemoryPostRepository> {
        let repo = Arc::new(InMemoryPostRepository::new());
        for title in titles {
            repo.create(NewPost::new(*title, format!("{title} body")))
                .await
                .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = seeded(&["first", "second"]).await;
        let ids: Vec<_> = repo.find_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_list_posts_returns_each_post_once() {
        for size in [0usize, 1, 7] {
            let titles: Vec<String> = (0..size).map(|i| format!("post {i}")).collect();
            let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
            let store = PostStore::new(seeded(&refs).await);

            let posts = store.list_posts().await.unwrap();
            assert_eq!(posts.len(), size);

            let ids: HashSet<_> = posts.iter().map(|p| p.id).collect();
            assert_eq!(ids.len(), size);
            assert!(posts.windows(2).all(|w| w[0].id < w[1].id));
        }
    }

    #[tokio::test]
    async fn test_get_post_by_present_id() {
        let store = PostStore::new(seeded(&["Hello", "Again"]).await);

        for id in [1, 2] {
            let post = store.get_post(id).await.unwrap();
            assert_eq!(post.id, id);
        }
    }

    #[tokio::test]
    async fn test_get_post_by_absent_id_is_not_found() {
        let store = PostStore::new(seeded(&["Hello"]).await);

        let err = store.get_post(2).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id: 2, .. }));
    }

    #[tokio::test]
    async fn test_update_keeps_created_and_moves_updated() {
        let repo = seeded(&["Hello"]).await;
        let before = repo.find_by_id(1).await.unwrap().unwrap();

        let after = repo
            .update(
                1,
                PostChanges {
                    title: Some("Hello again".to_string()),
                    content: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(after.created, before.created);
        assert!(after.updated >= before.updated);
        assert!(after.created <= after.updated);
        assert_eq!(after.title, "Hello again");
        assert_eq!(after.content, "Hello body");
    }

    #[tokio::test]
    async fn test_update_missing_post() {
        let repo = seeded(&[]).await;
        let result = repo.update(9, PostChanges::default()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_rejects_long_title() {
        let repo = seeded(&[]).await;
        let result = repo.create(NewPost::new("t".repeat(101), "body")).await;

        assert!(matches!(result, Err(RepoError::Invalid(_))));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let repo = seeded(&["one", "two"]).await;
        repo.delete(2).await.unwrap();

        let post = repo.create(NewPost::new("three", "body")).await.unwrap();
        assert_eq!(post.id, 3);
        assert!(matches!(repo.delete(2).await, Err(RepoError::NotFound)));
    }
}
