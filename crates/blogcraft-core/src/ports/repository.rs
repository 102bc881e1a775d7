use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Sort orders for the post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSort {
    /// `created_at` descending. The default.
    Newest,
    /// `created_at` ascending.
    Oldest,
    /// `views` descending.
    Popular,
}

impl PostSort {
    /// Map the `sort` query parameter. Anything unrecognized or absent
    /// falls back to newest-first.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("oldest") => Self::Oldest,
            Some("popular") => Self::Popular,
            _ => Self::Newest,
        }
    }
}

/// Filter + sort specification for listing an author's posts.
///
/// `status: Some("all")` is a sentinel that disables the status filter.
#[derive(Debug, Clone)]
pub struct PostQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: PostSort,
}

/// Field overwrites applied by a post update.
///
/// `status: None` leaves the stored status untouched; every other field
/// always overwrites (callers apply the create-time defaults for absent
/// tags and featured image).
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub status: Option<String>,
    pub featured_image: String,
}

/// Profile fields a user may change; `None` preserves the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

/// Post repository. All reads and writes except `find_by_id` are scoped to
/// a single author.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by id regardless of owner. Handlers use this to tell
    /// not-found apart from not-authorized.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// The author's posts matching `query`, in the requested order.
    async fn list_for_author(
        &self,
        author_id: Uuid,
        query: &PostQuery,
    ) -> Result<Vec<Post>, RepoError>;

    /// The author's published posts in deterministic order
    /// (`created_at` ascending, then id). Aggregation tie-breaks depend on
    /// this order being stable.
    async fn published_for_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// The author's most recent posts of any status, newest first.
    async fn recent_for_author(&self, author_id: Uuid, limit: u64) -> Result<Vec<Post>, RepoError>;

    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Apply `changes` in a single statement scoped by both id and author.
    /// `None` means nothing matched (lost to a concurrent delete).
    async fn update_owned(
        &self,
        id: Uuid,
        author_id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<Post>, RepoError>;

    /// Delete in a single statement scoped by both id and author; `false`
    /// if nothing matched.
    async fn delete_owned(&self, id: Uuid, author_id: Uuid) -> Result<bool, RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Patch the user's profile; `None` means the user row no longer exists.
    async fn update_profile(
        &self,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Option<User>, RepoError>;

    /// Delete the user's posts and the user row in one transaction.
    async fn delete_account(&self, id: Uuid) -> Result<(), RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_param_mapping() {
        assert_eq!(PostSort::from_param(Some("oldest")), PostSort::Oldest);
        assert_eq!(PostSort::from_param(Some("popular")), PostSort::Popular);
        assert_eq!(PostSort::from_param(Some("newest")), PostSort::Newest);
        assert_eq!(PostSort::from_param(Some("bogus")), PostSort::Newest);
        assert_eq!(PostSort::from_param(None), PostSort::Newest);
    }
}
