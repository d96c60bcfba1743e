//! # Blog Shared
//!
//! Types handed across the web boundary: the view models templates see
//! and the problem-details body returned for errors.

pub mod dto;
pub mod response;

pub use dto::{PostDetailPage, PostListPage, PostView};
pub use response::ErrorResponse;
