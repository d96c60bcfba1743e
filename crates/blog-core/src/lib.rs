//! # Blog Core
//!
//! The domain layer of the blog.
//! This crate holds the `Post` entity, the ports its adapters implement,
//! and the read-only `PostStore` the web layer talks to.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use error::DomainError;
pub use store::PostStore;
