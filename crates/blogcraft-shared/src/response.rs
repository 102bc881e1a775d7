//! The uniform message body.

use serde::{Deserialize, Serialize};

/// `{ "message": string }` - the single body shape the public contract uses
/// for every error response and for delete confirmations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
