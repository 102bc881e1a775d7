use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - an author account with public profile fields.
///
/// `password_hash` is write-only from the API's point of view: it is set by
/// the registration system (out of scope here) and excluded from every
/// response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub website: String,
    pub location: String,
    pub twitter: String,
    pub linkedin: String,
    pub github: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
