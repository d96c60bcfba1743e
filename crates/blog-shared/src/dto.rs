//! View models - what the page templates receive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DISPLAY_DATE: &str = "%B %-d, %Y";

/// A post as templates see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// RFC 3339.
    pub created: String,
    /// RFC 3339.
    pub updated: String,
    /// `created` as a reader-facing date, e.g. "March 4, 2024".
    pub created_display: String,
    /// `updated` as a reader-facing date.
    pub updated_display: String,
    /// Path of the post's detail page.
    pub url: String,
}

impl PostView {
    pub fn new(
        id: i64,
        title: String,
        content: String,
        created: DateTime<Utc>,
        updated: DateTime<Utc>,
        url: String,
    ) -> Self {
        Self {
            id,
            title,
            content,
            created: created.to_rfc3339(),
            updated: updated.to_rfc3339(),
            created_display: created.format(DISPLAY_DATE).to_string(),
            updated_display: updated.format(DISPLAY_DATE).to_string(),
            url,
        }
    }
}

/// Context for the `post_list` template.
///
/// The list is exposed under both `post_list` and `object_list`.
#[derive(Debug, Clone, Serialize)]
pub struct PostListPage {
    pub page_title: String,
    pub post_list: Vec<PostView>,
    pub object_list: Vec<PostView>,
    pub is_empty: bool,
}

impl PostListPage {
    pub fn new(posts: Vec<PostView>) -> Self {
        Self {
            page_title: "Posts".to_string(),
            is_empty: posts.is_empty(),
            object_list: posts.clone(),
            post_list: posts,
        }
    }
}

/// Context for the `post_detail` template, exposed as `post` and `object`.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailPage {
    pub page_title: String,
    pub post: PostView,
    pub object: PostView,
}

impl PostDetailPage {
    pub fn new(post: PostView) -> Self {
        Self {
            page_title: post.title.clone(),
            object: post.clone(),
            post,
        }
    }
}
