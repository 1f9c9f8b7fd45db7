//! Post handlers. Mutations always answer with a `303 See Other`.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};

use postboard_core::domain::{NewPost, PostId};
use postboard_shared::dto::{AddPostForm, UpdatePostForm};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, IndexPage, ViewPostsPage};

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Largest accepted form body. Posts are `TEXT`, so this only guards memory.
pub const FORM_LIMIT: usize = 1024 * 1024;

/// Use the decoded form, or empty fields when the request carried no body.
///
/// Any other extraction failure (oversized, wrong content type, bad
/// encoding) is returned so nothing gets written.
fn form_or_default<T: Default>(
    req: &HttpRequest,
    form: Result<web::Form<T>, actix_web::Error>,
) -> AppResult<T> {
    match form {
        Ok(form) => Ok(form.into_inner()),
        Err(_) if has_empty_body(req) => Ok(T::default()),
        Err(e) => Err(AppError::Request(e)),
    }
}

fn has_empty_body(req: &HttpRequest) -> bool {
    match req.headers().get(header::CONTENT_LENGTH) {
        Some(len) => len.to_str().ok().map(str::trim) == Some("0"),
        None => !req.headers().contains_key(header::TRANSFER_ENCODING),
    }
}

/// GET /
pub async fn index() -> AppResult<HttpResponse> {
    views::render(&IndexPage)
}

/// POST /add_post
///
/// Missing fields or a missing body are stored as empty strings.
pub async fn add_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: Result<web::Form<AddPostForm>, actix_web::Error>,
) -> AppResult<HttpResponse> {
    let form = form_or_default(&req, form)?;

    let post = state.posts.create(NewPost::new(form.name, form.post)).await?;
    tracing::info!(post_id = post.id, "Post created");

    Ok(see_other("/"))
}

/// GET /view_posts
pub async fn view_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    views::render(&ViewPostsPage::new(posts))
}

/// POST /update_post/{id}
pub async fn update_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    form: Result<web::Form<UpdatePostForm>, actix_web::Error>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = form_or_default(&req, form)?;

    if state.posts.update(id, &form.updated_post).await? {
        tracing::info!(post_id = id, "Post updated");
    } else {
        tracing::debug!(post_id = id, "Update skipped, post not found");
    }

    Ok(see_other("/view_posts"))
}

/// POST /delete_post/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if state.posts.delete(id).await? {
        tracing::info!(post_id = id, "Post deleted");
    } else {
        tracing::debug!(post_id = id, "Delete skipped, post not found");
    }

    Ok(see_other("/view_posts"))
}
