//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;
pub mod fixtures;
pub mod memory;
pub mod templates;

pub use database::DatabaseConfig;
pub use fixtures::{FixtureError, load_fixtures};
pub use memory::InMemoryPostRepository;
pub use templates::LiquidRenderer;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
