//! Liquid template rendering.
//!
//! Each page template is `<name>.html.liquid`. The `_header` and `_footer`
//! partials are rendered with the page's context and injected into it as the
//! `header` and `footer` globals. Built-in copies of every template ship with
//! the crate; a template directory, when configured, overrides them file by
//! file.

use std::collections::HashMap;
use std::path::Path;

use liquid::{Parser, Template};

use blog_core::ports::{RenderError, TemplateName, TemplateRenderer};

const HEADER: &str = "_header.html.liquid";
const FOOTER: &str = "_footer.html.liquid";

const BUILTIN: &[(&str, &str)] = &[
    (HEADER, include_str!("../../templates/_header.html.liquid")),
    (FOOTER, include_str!("../../templates/_footer.html.liquid")),
    (
        "post_list.html.liquid",
        include_str!("../../templates/post_list.html.liquid"),
    ),
    (
        "post_detail.html.liquid",
        include_str!("../../templates/post_detail.html.liquid"),
    ),
];

fn file_name(template: TemplateName) -> String {
    format!("{}.html.liquid", template.as_str())
}

/// Renderer holding every template pre-parsed.
pub struct LiquidRenderer {
    header: Template,
    footer: Template,
    pages: HashMap<TemplateName, Template>,
}

impl std::fmt::Debug for LiquidRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiquidRenderer")
            .field("pages", &self.pages.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl LiquidRenderer {
    /// Renderer using only the built-in templates.
    pub fn builtin() -> Result<Self, RenderError> {
        let sources = BUILTIN
            .iter()
            .map(|(name, source)| (name.to_string(), source.to_string()))
            .collect();
        Self::from_sources(sources)
    }

    /// Renderer using files from `dir` where present and built-ins otherwise.
    pub async fn load(dir: Option<&Path>) -> Result<Self, RenderError> {
        let mut sources = HashMap::new();

        for (name, builtin) in BUILTIN {
            let source = match dir {
                Some(dir) => {
                    let path = dir.join(name);
                    match tokio::fs::read_to_string(&path).await {
                        Ok(content) => {
                            tracing::info!("Loading template override: {}", path.display());
                            content
                        }
                        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                            tracing::debug!("No override for {}, using built-in", name);
                            builtin.to_string()
                        }
                        Err(e) => {
                            return Err(RenderError::Load {
                                name: name.to_string(),
                                reason: e.to_string(),
                            });
                        }
                    }
                }
                None => builtin.to_string(),
            };
            sources.insert(name.to_string(), source);
        }

        Self::from_sources(sources)
    }

    fn from_sources(mut sources: HashMap<String, String>) -> Result<Self, RenderError> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| RenderError::Load {
                name: "parser".to_string(),
                reason: e.to_string(),
            })?;

        let mut take = |name: &str| -> Result<Template, RenderError> {
            let source = sources
                .remove(name)
                .ok_or_else(|| RenderError::Missing(name.to_string()))?;
            parse(&parser, name, &source)
        };

        let header = take(HEADER)?;
        let footer = take(FOOTER)?;

        let mut pages = HashMap::new();
        for template in TemplateName::ALL {
            pages.insert(template, take(&file_name(template))?);
        }

        Ok(Self {
            header,
            footer,
            pages,
        })
    }
}

fn parse(parser: &Parser, name: &str, source: &str) -> Result<Template, RenderError> {
    parser.parse(source).map_err(|e| RenderError::Load {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn render_error(name: &str, reason: impl ToString) -> RenderError {
    RenderError::Render {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

impl TemplateRenderer for LiquidRenderer {
    fn render(
        &self,
        template: TemplateName,
        context: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let name = template.as_str();
        let page = self
            .pages
            .get(&template)
            .ok_or_else(|| RenderError::Missing(name.to_string()))?;

        let mut globals = liquid::to_object(context).map_err(|e| render_error(name, e))?;

        let header = self
            .header
            .render(&globals)
            .map_err(|e| render_error(HEADER, e))?;
        let footer = self
            .footer
            .render(&globals)
            .map_err(|e| render_error(FOOTER, e))?;

        globals.insert("header".into(), liquid::model::Value::Scalar(header.into()));
        globals.insert("footer".into(), liquid::model::Value::Scalar(footer.into()));

        page.render(&globals).map_err(|e| render_error(name, e))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn post(id: i64, title: &str, content: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "content": content,
            "created": "2024-03-04T10:00:00+00:00",
            "updated": "2024-03-04T10:00:00+00:00",
            "created_display": "March 4, 2024",
            "updated_display": "March 4, 2024",
            "url": format!("/{id}/"),
        })
    }

    #[test]
    fn test_builtin_list_renders_every_post() {
        let renderer = LiquidRenderer::builtin().unwrap();
        let posts = vec![post(1, "Hello", "World"), post(2, "Second", "More")];
        let context = json!({
            "page_title": "Posts",
            "post_list": posts,
            "object_list": posts,
            "is_empty": false,
        });

        let html = renderer.render(TemplateName::PostList, &context).unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains(r#"<a href="/1/">Hello</a>"#));
        assert!(html.contains(r#"<a href="/2/">Second</a>"#));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_builtin_list_handles_empty_store() {
        let renderer = LiquidRenderer::builtin().unwrap();
        let context = json!({
            "page_title": "Posts",
            "post_list": [],
            "object_list": [],
            "is_empty": true,
        });

        let html = renderer.render(TemplateName::PostList, &context).unwrap();
        assert!(html.contains("No posts yet."));
    }

    #[test]
    fn test_builtin_detail_escapes_content() {
        let renderer = LiquidRenderer::builtin().unwrap();
        let detail = post(1, "Hello", "<script>World</script>");
        let context = json!({ "page_title": "Hello", "post": detail, "object": detail });

        let html = renderer.render(TemplateName::PostDetail, &context).unwrap();

        assert!(html.contains("<title>Hello - Blog</title>"));
        assert!(html.contains("&lt;script&gt;World&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[tokio::test]
    async fn test_directory_overrides_single_template() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("post_detail.html.liquid"),
            "custom {{ post.title }} / {{ object.content }}",
        )
        .unwrap();

        let renderer = LiquidRenderer::load(Some(dir.path())).await.unwrap();
        let detail = post(1, "Hello", "World");
        let context = json!({ "post": detail, "object": detail });

        let html = renderer.render(TemplateName::PostDetail, &context).unwrap();
        assert_eq!(html, "custom Hello / World");

        // Not overridden, still the built-in.
        let list = json!({ "post_list": [], "object_list": [], "is_empty": true });
        let html = renderer.render(TemplateName::PostList, &list).unwrap();
        assert!(html.contains("No posts yet."));
    }

    #[tokio::test]
    async fn test_invalid_override_fails_to_load() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("post_list.html.liquid"), "{% for %}").unwrap();

        let result = LiquidRenderer::load(Some(dir.path())).await;
        assert!(matches!(result, Err(RenderError::Load { .. })));
    }
}
