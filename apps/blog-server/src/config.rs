//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Absent means the in-memory store.
    pub database: Option<DatabaseConfig>,
    /// Directory whose `*.html.liquid` files override the built-in templates.
    pub template_dir: Option<PathBuf>,
    /// JSON file of posts inserted at startup.
    pub fixtures_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: lookup("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            template_dir: lookup("TEMPLATE_DIR").map(PathBuf::from),
            fixtures_path: lookup("FIXTURES_PATH").map(PathBuf::from),
        }
    }
}
