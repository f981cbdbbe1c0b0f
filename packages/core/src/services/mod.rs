//! Business Services
//!
//! - `DocumentService` - editing sessions, saves and confirmed deletes on top
//!   of a content store
//!
//! Services coordinate between the editor and the store layer and own the
//! rules that span both, such as publish-time stamping.

pub mod document_service;
pub mod error;

pub use document_service::{
    ConfirmedDelete, DocumentService, PendingDelete, SaveOutcome, DELETE_PROMPT,
};
pub use error::DocumentServiceError;
