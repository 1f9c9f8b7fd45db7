use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Post repository - storage-agnostic CRUD over posts.
///
/// `update` and `delete` report whether a post with the given id existed.
/// A missing id is not an error; callers decide what to do with it.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post and return it with its assigned id and timestamps.
    async fn create(&self, draft: NewPost) -> Result<Post, RepoError>;

    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Replace the body of a post. Returns `false` if no such post exists.
    async fn update(&self, id: PostId, body: &str) -> Result<bool, RepoError>;

    /// Remove a post. Returns `false` if no such post exists.
    async fn delete(&self, id: PostId) -> Result<bool, RepoError>;

    /// Cheap liveness probe against the backing store.
    async fn ping(&self) -> Result<(), RepoError>;
}
