//! Data Transfer Objects - request/response types for the API.
//!
//! Field names on the wire are camelCase; conversions from the domain types
//! live here so handlers never hand-build JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blogcraft_core::analytics::{AnalyticsSummary, DashboardStats};
use blogcraft_core::domain::{Post, User};

/// Query parameters accepted by the post listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

/// Body for creating a post.
///
/// Unknown fields are dropped by serde, so a client-supplied `authorId`
/// never reaches the handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
}

/// Body for updating a post. Same shape as create, but an omitted `status`
/// preserves the stored value instead of defaulting to draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
}

/// Body for updating the requester's profile; omitted fields are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
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

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            title: post.title,
            content: post.content,
            category: post.category,
            tags: post.tags,
            status: post.status,
            featured_image: post.featured_image,
            views: post.views,
            likes: post.likes,
            comments: post.comments,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// A user as returned by the API. The password hash never appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub website: String,
    pub location: String,
    pub twitter: String,
    pub linkedin: String,
    pub github: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            bio: user.bio,
            website: user.website,
            location: user.location,
            twitter: user.twitter,
            linkedin: user.linkedin,
            github: user.github,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Dashboard summary for the requesting author.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub total_posts: u64,
    pub total_views: i64,
    pub total_likes: i64,
    pub total_comments: i64,
    pub recent_posts: Vec<PostResponse>,
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_posts: stats.total_posts,
            total_views: stats.total_views,
            total_likes: stats.total_likes,
            total_comments: stats.total_comments,
            recent_posts: stats.recent_posts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Analytics summary for the requesting author.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub avg_views: i64,
    pub engagement_rate: String,
    pub popular_category: String,
    pub top_posts: Vec<PostResponse>,
}

impl From<AnalyticsSummary> for AnalyticsResponse {
    fn from(summary: AnalyticsSummary) -> Self {
        Self {
            avg_views: summary.avg_views,
            engagement_rate: summary.engagement_rate,
            popular_category: summary.popular_category,
            top_posts: summary.top_posts.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogcraft_core::domain::NewPost;

    #[test]
    fn post_response_uses_camel_case_keys() {
        let post = Post::new(
            Uuid::new_v4(),
            NewPost {
                title: "t".to_string(),
                content: "c".to_string(),
                category: "tech".to_string(),
                tags: None,
                status: None,
                featured_image: None,
            },
        );

        let json = serde_json::to_value(PostResponse::from(post)).unwrap();

        assert!(json.get("authorId").is_some());
        assert!(json.get("featuredImage").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("author_id").is_none());
    }

    #[test]
    fn user_response_excludes_password() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            bio: String::new(),
            website: String::new(),
            location: String::new(),
            twitter: String::new(),
            linkedin: String::new(),
            github: String::new(),
            password_hash: "secret-hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();

        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn create_request_ignores_author_field() {
        let body = r#"{
            "title": "t",
            "content": "c",
            "category": "tech",
            "authorId": "1c8f2cd2-66a8-4a92-9e2b-6c8a4ee82f96"
        }"#;

        let req: CreatePostRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.title, "t");
        assert!(req.tags.is_none());
    }
}
