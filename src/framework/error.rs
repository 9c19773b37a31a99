//! # Synchronization Errors
//!
//! Every manager operation fails with a [`SyncError`]. The `Display` text of the first
//! three variants is exactly what lands in the view's single error slot, so the
//! transport, application and validation kinds all converge on one user-visible string.

use crate::framework::EntityId;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum SyncError {
    /// The request did not produce a successful HTTP status (or no reply at all).
    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    /// The server answered 2xx but its body did not carry `success: true`.
    #[error("{0}")]
    Application(String),

    /// A required field was missing or a numeric field did not parse. No request was sent.
    #[error("{0}")]
    Validation(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("No record with id {0}")]
    NotFound(EntityId),

    #[error("View closed")]
    ViewClosed,

    #[error("View dropped response channel")]
    ViewDropped,
}

impl SyncError {
    /// True for failures that reached (or tried to reach) the server.
    pub fn is_remote(&self) -> bool {
        matches!(self, SyncError::Transport { .. } | SyncError::Application(_))
    }
}
