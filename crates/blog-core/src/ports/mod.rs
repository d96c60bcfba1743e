//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod render;
mod repository;

pub use render::{RenderError, TemplateName, TemplateRenderer};
pub use repository::{BaseRepository, PostRepository};
