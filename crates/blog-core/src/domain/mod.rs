//! Domain entities - the core business objects.

mod post;

pub use post::{NewPost, Post, PostChanges, PostId, TITLE_MAX_CHARS};
