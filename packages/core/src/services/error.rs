//! Service Layer Error Types

use crate::db::StoreError;
use crate::models::ValidationError;
use thiserror::Error;

/// Document service errors
///
/// A save that fails for either reason leaves the editor untouched.
#[derive(Error, Debug)]
pub enum DocumentServiceError {
    /// The document was not fit to send
    #[error("Document validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// The content store refused or could not be reached
    #[error("Content store operation failed: {0}")]
    StoreFailed(#[from] StoreError),
}

impl DocumentServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationFailed(_))
    }

    /// Text to show the user, in the form the admin console uses
    ///
    /// Remote failures show only the backend's message.
    pub fn user_message(&self) -> String {
        match self {
            Self::StoreFailed(StoreError::Remote { message, .. }) => message.clone(),
            Self::ValidationFailed(err) => err.to_string(),
            Self::StoreFailed(err) => err.to_string(),
        }
    }
}
