//! In-memory implementations - used when no database is configured.

mod post;

pub use post::InMemoryPostRepository;
