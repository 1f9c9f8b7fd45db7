//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use postboard_core::domain::{NewPost, Post, PostId};
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

struct Store {
    posts: BTreeMap<PostId, Post>,
    next_id: PostId,
}

/// In-memory post repository backed by an id-keyed map and a monotonic id counter.
///
/// Ids are never handed out twice, even after deletes.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, draft: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id = id
            .checked_add(1)
            .ok_or_else(|| RepoError::Query("post id space exhausted".to_string()))?;

        let post = Post::new(id, draft, Utc::now());
        store.posts.insert(id, post.clone());

        tracing::debug!(post_id = id, "Stored post in memory");
        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.posts.values().cloned().collect();
        posts.sort_by(Post::newest_first);
        Ok(posts)
    }

    async fn update(&self, id: PostId, body: &str) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        match store.posts.get_mut(&id) {
            Some(post) => {
                post.edit(body, Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.posts.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_list() {
        let repo = InMemoryPostRepository::new();
        repo.create(NewPost::new("Alice", "Hello")).await.unwrap();

        let posts = repo.list().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].name, "Alice");
        assert_eq!(posts[0].post, "Hello");
        assert!(posts[0].updated_at.is_none());
    }

    #[tokio::test]
    async fn test_update_sets_body_and_timestamp() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(NewPost::new("Alice", "Hello")).await.unwrap();

        assert!(repo.update(created.id, "new text").await.unwrap());

        let posts = repo.list().await.unwrap();
        assert_eq!(posts[0].post, "new text");
        assert_eq!(posts[0].name, "Alice");
        let updated_at = posts[0].updated_at.expect("updated_at set after edit");
        assert!(updated_at >= posts[0].created_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_noop() {
        let repo = InMemoryPostRepository::new();
        repo.create(NewPost::new("Alice", "Hello")).await.unwrap();

        assert!(!repo.update(9999, "ignored").await.unwrap());

        let posts = repo.list().await.unwrap();
        assert_eq!(posts[0].post, "Hello");
        assert!(posts[0].updated_at.is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let repo = InMemoryPostRepository::new();
        let a = repo.create(NewPost::new("a", "1")).await.unwrap();
        let b = repo.create(NewPost::new("b", "2")).await.unwrap();
        let c = repo.create(NewPost::new("c", "3")).await.unwrap();

        assert!(repo.delete(b.id).await.unwrap());
        assert!(!repo.delete(b.id).await.unwrap());

        let ids: Vec<PostId> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&a.id));
        assert!(ids.contains(&c.id));
        assert!(!ids.contains(&b.id));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();
        repo.create(NewPost::new("a", "1")).await.unwrap();
        let second = repo.create(NewPost::new("b", "2")).await.unwrap();
        repo.delete(second.id).await.unwrap();

        let third = repo.create(NewPost::new("c", "3")).await.unwrap();
        assert!(third.id > second.id);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = InMemoryPostRepository::new();
        for i in 0..5 {
            repo.create(NewPost::new("n", i.to_string())).await.unwrap();
        }

        let posts = repo.list().await.unwrap();
        assert!(
            posts
                .windows(2)
                .all(|w| w[0].created_at >= w[1].created_at && w[0].id > w[1].id)
        );
    }
}
