//! # BlogCraft Shared
//!
//! Wire types shared between the API server and its clients: request and
//! response DTOs (camelCase JSON) and the uniform `{ "message": ... }` body.

pub mod dto;
pub mod response;

pub use response::MessageBody;
