use std::fmt;

use thiserror::Error;

/// Templates the web layer knows how to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    PostList,
    PostDetail,
}

impl TemplateName {
    pub const ALL: [TemplateName; 2] = [TemplateName::PostList, TemplateName::PostDetail];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::PostList => "post_list",
            TemplateName::PostDetail => "post_detail",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template {0} is not registered")]
    Missing(String),

    #[error("Failed to load template {name}: {reason}")]
    Load { name: String, reason: String },

    #[error("Failed to render template {name}: {reason}")]
    Render { name: String, reason: String },
}

/// Turns a named template plus a serializable context into a page body.
pub trait TemplateRenderer: Send + Sync {
    fn render(
        &self,
        template: TemplateName,
        context: &serde_json::Value,
    ) -> Result<String, RenderError>;
}
