//! Application state - shared across all handlers.

use std::sync::Arc;

use thiserror::Error;

use blog_core::PostStore;
use blog_core::ports::{PostRepository, RenderError, TemplateRenderer};
use blog_infra::{FixtureError, InMemoryPostRepository, LiquidRenderer, load_fixtures};

#[cfg(feature = "postgres")]
use blog_infra::PostgresPostRepository;

use crate::config::AppConfig;

/// Failures that prevent the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Templates(#[from] RenderError),

    #[error(transparent)]
    Fixtures(#[from] FixtureError),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
    pub renderer: Arc<dyn TemplateRenderer>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Result<Self, StartupError> {
        let repo = Self::post_repository(config).await;

        if let Some(path) = &config.fixtures_path {
            load_fixtures(repo.as_ref(), path).await?;
        }

        let renderer = LiquidRenderer::load(config.template_dir.as_deref()).await?;

        tracing::info!("Application state initialized");

        Ok(Self::from_parts(repo, Arc::new(renderer)))
    }

    pub fn from_parts(repo: Arc<dyn PostRepository>, renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self {
            posts: PostStore::new(repo),
            renderer,
        }
    }

    #[cfg(feature = "postgres")]
    async fn post_repository(config: &AppConfig) -> Arc<dyn PostRepository> {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryPostRepository::new());
        };

        match blog_infra::database::connect(db_config).await {
            Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryPostRepository::new())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn post_repository(_config: &AppConfig) -> Arc<dyn PostRepository> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryPostRepository::new())
    }
}
