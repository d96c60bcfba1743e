//! Seed data: a JSON array of `{ "title": ..., "content": ... }` records.

use std::path::Path;

use thiserror::Error;

use blog_core::domain::NewPost;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixtures {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixtures {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to inspect the store before seeding: {0}")]
    Inspect(#[source] RepoError),

    #[error("Failed to store fixture #{index}: {source}")]
    Store {
        index: usize,
        #[source]
        source: RepoError,
    },
}

/// Insert every record of the fixture file, in file order, into an empty store.
///
/// Returns the number of posts created. A store that already holds posts is
/// left untouched, so restarting against a persistent database does not
/// duplicate the seed. Nothing is inserted when the file cannot be read or
/// parsed; a store failure stops at the offending record.
pub async fn load_fixtures(
    repo: &dyn PostRepository,
    path: impl AsRef<Path>,
) -> Result<usize, FixtureError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FixtureError::Io {
            path: shown.clone(),
            source,
        })?;

    let records: Vec<NewPost> =
        serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
            path: shown.clone(),
            source,
        })?;

    let existing = repo
        .find_all()
        .await
        .map_err(FixtureError::Inspect)?;
    if !existing.is_empty() {
        tracing::info!(
            path = %shown,
            existing = existing.len(),
            "Store already holds posts, skipping fixtures"
        );
        return Ok(0);
    }

    for (index, record) in records.iter().cloned().enumerate() {
        repo.create(record)
            .await
            .map_err(|source| FixtureError::Store { index, source })?;
    }

    tracing::info!(path = %shown, count = records.len(), "Loaded fixtures");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::memory::InMemoryPostRepository;

    #[tokio::test]
    async fn test_loads_records_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(
            &path,
            r#"[{"title": "Hello", "content": "World"}, {"title": "Second", "content": ""}]"#,
        )
        .unwrap();

        let repo = InMemoryPostRepository::new();
        let count = load_fixtures(&repo, &path).await.unwrap();
        assert_eq!(count, 2);

        let posts = repo.find_all().await.unwrap();
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].title, "Hello");
        assert_eq!(posts[1].title, "Second");
    }

    #[tokio::test]
    async fn test_malformed_file_inserts_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, r#"[{"title": "Hello"}]"#).unwrap();

        let repo = InMemoryPostRepository::new();
        let result = load_fixtures(&repo, &path).await;

        assert!(matches!(result, Err(FixtureError::Parse { .. })));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_load_does_not_duplicate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, r#"[{"title": "Hello", "content": "World"}]"#).unwrap();

        let repo = InMemoryPostRepository::new();
        assert_eq!(load_fixtures(&repo, &path).await.unwrap(), 1);
        assert_eq!(load_fixtures(&repo, &path).await.unwrap(), 0);

        let posts = repo.find_all().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].title, "Hello");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let repo = InMemoryPostRepository::new();
        let result = load_fixtures(&repo, "/nonexistent/posts.json").await;
        assert!(matches!(result, Err(FixtureError::Io { .. })));
    }
}
