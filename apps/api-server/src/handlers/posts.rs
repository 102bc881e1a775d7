//! Post handlers - listing, CRUD, dashboard stats, analytics.

use actix_web::{HttpResponse, web};

use blogcraft_core::analytics as aggregation;
use blogcraft_core::domain::{NewPost, Post};
use blogcraft_core::error::DomainError;
use blogcraft_core::ports::{PostChanges, PostQuery, PostSort};
use blogcraft_shared::MessageBody;
use blogcraft_shared::dto::{
    AnalyticsResponse, CreatePostRequest, DashboardStatsResponse, ListPostsQuery, PostResponse,
    UpdatePostRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const RECENT_POSTS_LIMIT: u64 = 5;

fn validate_text(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(())
}

/// GET /api/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner();

    let query = PostQuery {
        // Empty parameters behave like absent ones.
        status: params.status.filter(|s| !s.is_empty()),
        search: params.search.filter(|s| !s.is_empty()),
        sort: PostSort::from_param(params.sort.as_deref()),
    };

    let posts = state
        .posts
        .list_for_author(identity.user_id, &query)
        .await?;

    Ok(HttpResponse::Ok().json(
        posts
            .into_iter()
            .map(PostResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<uuid::Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    // Existence before ownership: a missing post is 404 for everyone,
    // a foreign post is 401.
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Post", id))?;
    post.ensure_owned_by(identity.user_id)?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validate_text("title", &req.title)?;
    validate_text("content", &req.content)?;

    // The author always comes from the authenticated identity; an
    // `authorId` in the body never reaches this point.
    let post = Post::new(
        identity.user_id,
        NewPost {
            title: req.title,
            content: req.content,
            category: req.category,
            tags: req.tags,
            status: req.status,
            featured_image: req.featured_image,
        },
    );

    let created = state.posts.insert(post).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(created)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<uuid::Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    validate_text("title", &req.title)?;
    validate_text("content", &req.content)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Post", id))?;
    post.ensure_owned_by(identity.user_id)?;

    let changes = PostChanges {
        title: req.title,
        content: req.content,
        category: req.category,
        tags: req.tags.unwrap_or_default(),
        // Omitted status keeps the stored value.
        status: req.status,
        featured_image: req.featured_image.unwrap_or_default(),
    };

    // The write itself is scoped by id and author; zero rows means the post
    // vanished between the check and the write.
    let updated = state
        .posts
        .update_owned(id, identity.user_id, changes)
        .await?
        .ok_or_else(|| DomainError::not_found("Post", id))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(updated)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<uuid::Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Post", id))?;
    post.ensure_owned_by(identity.user_id)?;

    let removed = state.posts.delete_owned(id, identity.user_id).await?;
    if !removed {
        return Err(DomainError::not_found("Post", id).into());
    }

    Ok(HttpResponse::Ok().json(MessageBody::new("Post removed")))
}

/// GET /api/posts/dashboard-stats
pub async fn dashboard_stats(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let published = state.posts.published_for_author(identity.user_id).await?;
    let recent = state
        .posts
        .recent_for_author(identity.user_id, RECENT_POSTS_LIMIT)
        .await?;

    let stats = aggregation::dashboard_stats(&published, recent);

    Ok(HttpResponse::Ok().json(DashboardStatsResponse::from(stats)))
}

/// GET /api/posts/analytics
pub async fn analytics(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let published = state.posts.published_for_author(identity.user_id).await?;

    let summary = aggregation::analytics_summary(&published);

    Ok(HttpResponse::Ok().json(AnalyticsResponse::from(summary)))
}
