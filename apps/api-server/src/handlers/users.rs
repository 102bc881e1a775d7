//! User profile handlers.

use actix_web::{HttpResponse, web};

use blogcraft_core::error::DomainError;
use blogcraft_core::ports::ProfileChanges;
use blogcraft_shared::MessageBody;
use blogcraft_shared::dto::{UpdateProfileRequest, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// PUT /api/users/profile
pub async fn update_profile(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let changes = ProfileChanges {
        name: req.name,
        email: req.email,
        bio: req.bio,
        website: req.website,
        location: req.location,
        twitter: req.twitter,
        linkedin: req.linkedin,
        github: req.github,
    };

    let user = state
        .users
        .update_profile(identity.user_id, changes)
        .await?
        .ok_or_else(|| DomainError::not_found("User", identity.user_id))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// DELETE /api/users/account
pub async fn delete_account(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    state.users.delete_account(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(MessageBody::new("Account deleted successfully")))
}
