//! Server-rendered pages.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use askama::Template;

use postboard_core::domain::{Post, PostId};

use crate::middleware::error::{AppError, AppResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Submission form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage;

/// Listing with per-post edit and delete forms.
#[derive(Template)]
#[template(path = "view_posts.html")]
pub struct ViewPostsPage {
    pub posts: Vec<PostView>,
}

/// A post with its timestamps pre-formatted for display.
pub struct PostView {
    pub id: PostId,
    pub name: String,
    pub post: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            name: post.name,
            post: post.post,
            created_at: post.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: post
                .updated_at
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

impl ViewPostsPage {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: posts.into_iter().map(PostView::from).collect(),
        }
    }
}

/// Render a page into a `200 OK` HTML response.
pub fn render<T: Template>(page: &T) -> AppResult<HttpResponse> {
    let body = page
        .render()
        .map_err(|e| AppError::Render(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
