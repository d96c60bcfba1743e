//! Post list and detail pages.

use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

use blog_core::domain::{Post, PostId};
use blog_core::ports::TemplateName;
use blog_shared::{PostDetailPage, PostListPage, PostView};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /
pub async fn list(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    tracing::debug!(count = posts.len(), "Listing posts");

    let views = posts
        .into_iter()
        .map(|post| post_view(&req, post))
        .collect::<AppResult<Vec<_>>>()?;

    render(&state, TemplateName::PostList, &PostListPage::new(views))
}

/// GET /{id}/
pub async fn detail(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.get_post(id).await?;

    render(
        &state,
        TemplateName::PostDetail,
        &PostDetailPage::new(post_view(&req, post)?),
    )
}

fn post_view(req: &HttpRequest, post: Post) -> AppResult<PostView> {
    let url = req
        .url_for("post-detail", [post.id.to_string()])
        .map_err(|e| AppError::Internal(format!("Cannot build URL for post {}: {}", post.id, e)))?;

    Ok(PostView::new(
        post.id,
        post.title,
        post.content,
        post.created,
        post.updated,
        url.path().to_string(),
    ))
}

fn render<C: Serialize>(
    state: &AppState,
    template: TemplateName,
    context: &C,
) -> AppResult<HttpResponse> {
    let context = serde_json::to_value(context)
        .map_err(|e| AppError::Internal(format!("Cannot serialize {} context: {}", template, e)))?;

    let html = state.renderer.render(template, &context)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}
