//! Content Store Error Types
//!
//! Every failure of a content store call is reported as a [`StoreError`]. None
//! of them are retried by the core; they are surfaced to the caller with the
//! local editing state left intact.

use crate::models::{DocumentId, MalformedDocument};
use std::fmt;
use thiserror::Error;

/// The store call that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    Create,
    Update,
    Delete,
    List,
    Get,
}

impl StoreOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreOperation::Create => "create",
            StoreOperation::Update => "update",
            StoreOperation::Delete => "delete",
            StoreOperation::List => "list",
            StoreOperation::Get => "get",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn format_status(status: &Option<u16>) -> String {
    status
        .map(|status| format!(" (HTTP {})", status))
        .unwrap_or_default()
}

/// Content store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store answered with a failure
    #[error("Content store {operation} failed{}: {message}", format_status(.status))]
    Remote {
        operation: StoreOperation,
        status: Option<u16>,
        message: String,
    },

    /// No document with this identity
    #[error("Document not found: {id}")]
    NotFound { id: DocumentId },

    /// The store could not be reached
    #[error("Content store unreachable during {operation}: {message}")]
    Transport {
        operation: StoreOperation,
        message: String,
    },

    /// The store is switched off (in-memory failure injection)
    #[error("Content store unavailable during {operation}")]
    Unavailable { operation: StoreOperation },

    /// A request or response body could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The store returned a document that does not fit the block schema
    #[error("Malformed document from content store: {0}")]
    Malformed(#[from] MalformedDocument),

    /// The adapter could not be constructed
    #[error("Invalid content store configuration: {0}")]
    Configuration(String),
}

impl StoreError {
    /// Create a remote failure error
    pub fn remote(operation: StoreOperation, status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Remote {
            operation,
            status,
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(id: impl Into<DocumentId>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a transport error
    pub fn transport(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// HTTP status reported by the store, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message_includes_status() {
        let err = StoreError::remote(StoreOperation::Create, Some(422), "Title is required");
        assert_eq!(
            err.to_string(),
            "Content store create failed (HTTP 422): Title is required"
        );
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_remote_error_without_status() {
        let err = StoreError::remote(StoreOperation::Delete, None, "Server Error");
        assert_eq!(err.to_string(), "Content store delete failed: Server Error");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_malformed_converts_into_store_error() {
        let err: StoreError = MalformedDocument::MissingKind { index: 2 }.into();
        assert_eq!(
            err.to_string(),
            "Malformed document from content store: Block 2 has no kind"
        );
    }
}
