use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post identifier. Matches the `SERIAL` primary key of the `posts` table.
pub type PostId = i32;

/// Post entity - a named text message with creation/edit timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub name: String,
    pub post: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Build a freshly created post. `updated_at` stays empty until the first edit.
    pub fn new(id: PostId, draft: NewPost, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            post: draft.post,
            created_at,
            updated_at: None,
        }
    }

    /// Replace the body and stamp the edit time.
    pub fn edit(&mut self, body: impl Into<String>, at: DateTime<Utc>) {
        self.post = body.into();
        self.updated_at = Some(at);
    }

    /// Listing order shared by every backend: newest first, ties by id descending.
    pub fn newest_first(a: &Post, b: &Post) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    }
}

/// Author input for a post that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub name: String,
    pub post: String,
}

impl NewPost {
    pub fn new(name: impl Into<String>, post: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            post: post.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_post_has_no_update_time() {
        let now = Utc::now();
        let post = Post::new(1, NewPost::new("Alice", "Hello"), now);
        assert_eq!(post.name, "Alice");
        assert_eq!(post.post, "Hello");
        assert_eq!(post.created_at, now);
        assert!(post.updated_at.is_none());
    }

    #[test]
    fn test_edit_keeps_created_at() {
        let created = Utc::now();
        let mut post = Post::new(1, NewPost::new("Alice", "Hello"), created);
        let later = created + Duration::seconds(5);
        post.edit("new text", later);
        assert_eq!(post.post, "new text");
        assert_eq!(post.created_at, created);
        assert_eq!(post.updated_at, Some(later));
    }

    #[test]
    fn test_newest_first_breaks_ties_by_id() {
        let now = Utc::now();
        let older = Post::new(1, NewPost::default(), now - Duration::seconds(1));
        let a = Post::new(2, NewPost::default(), now);
        let b = Post::new(3, NewPost::default(), now);

        let mut posts = vec![older.clone(), a.clone(), b.clone()];
        posts.sort_by(Post::newest_first);

        let ids: Vec<PostId> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
