//! Error taxonomy for the coordination services.
//!
//! Every operation is in-memory, so the only failures are bad input and
//! ownership conflicts. Both are recoverable by the client.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncError {
    /// A required field was missing, empty or malformed
    #[error("{message}")]
    InvalidRequest { message: String },

    /// The hero is bound to another device
    #[error("Hero already taken")]
    Conflict { hero_id: String, owner: String },
}

impl SyncError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
