use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Status of a post that is not yet visible to readers.
pub const STATUS_DRAFT: &str = "draft";
/// Status of a post that counts toward dashboard and analytics aggregation.
pub const STATUS_PUBLISHED: &str = "published";

/// Post entity - a single authored content item with engagement metrics.
///
/// Status is an open string rather than a closed enum: `draft` and
/// `published` are the values the platform acts on, but others are stored
/// and filtered verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub status: String,
    pub featured_image: String,
    pub views: i32,
    pub likes: i32,
    pub comments: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating a post. Everything optional here has
/// a documented default; the author never comes from this struct.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
    pub featured_image: Option<String>,
}

impl Post {
    /// Create a new post owned by `author_id`.
    ///
    /// The owner is taken from the authenticated identity, never from
    /// request input. Absent tags become an empty set, absent status
    /// becomes [`STATUS_DRAFT`], absent featured image becomes empty.
    pub fn new(author_id: Uuid, input: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title: input.title,
            content: input.content,
            category: input.category,
            tags: input.tags.unwrap_or_default(),
            status: input.status.unwrap_or_else(|| STATUS_DRAFT.to_string()),
            featured_image: input.featured_image.unwrap_or_default(),
            views: 0,
            likes: 0,
            comments: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Ownership check shared by every single-post operation.
    ///
    /// Callers must establish existence first so that a missing post is
    /// reported as not-found and only a foreign post as not-authorized.
    pub fn ensure_owned_by(&self, user_id: Uuid) -> Result<(), DomainError> {
        if self.author_id == user_id {
            Ok(())
        } else {
            Err(DomainError::NotAuthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewPost {
        NewPost {
            title: "Title".to_string(),
            content: "Content".to_string(),
            category: "tech".to_string(),
            tags: None,
            status: None,
            featured_image: None,
        }
    }

    #[test]
    fn new_post_applies_defaults() {
        let author = Uuid::new_v4();
        let post = Post::new(author, input());

        assert_eq!(post.author_id, author);
        assert_eq!(post.status, STATUS_DRAFT);
        assert!(post.tags.is_empty());
        assert_eq!(post.featured_image, "");
        assert_eq!((post.views, post.likes, post.comments), (0, 0, 0));
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn new_post_keeps_supplied_values() {
        let post = Post::new(
            Uuid::new_v4(),
            NewPost {
                tags: Some(vec!["rust".to_string()]),
                status: Some(STATUS_PUBLISHED.to_string()),
                featured_image: Some("/img/cover.png".to_string()),
                ..input()
            },
        );

        assert_eq!(post.tags, vec!["rust".to_string()]);
        assert_eq!(post.status, STATUS_PUBLISHED);
        assert_eq!(post.featured_image, "/img/cover.png");
    }

    #[test]
    fn ownership_check() {
        let owner = Uuid::new_v4();
        let post = Post::new(owner, input());

        assert!(post.ensure_owned_by(owner).is_ok());
        assert!(matches!(
            post.ensure_owned_by(Uuid::new_v4()),
            Err(DomainError::NotAuthorized)
        ));
    }
}
