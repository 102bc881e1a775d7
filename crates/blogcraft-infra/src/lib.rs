//! # BlogCraft Infrastructure
//!
//! Concrete implementations of the ports defined in `blogcraft-core`:
//! PostgreSQL repositories via SeaORM and the JWT token service.

pub mod auth;
pub mod database;

pub use auth::{JwtConfig, JwtTokenService};
pub use database::{DatabaseConfig, PostgresPostRepository, PostgresUserRepository};
