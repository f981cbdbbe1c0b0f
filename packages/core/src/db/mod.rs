//! Content Store Layer
//!
//! Persistence for content documents sits behind the [`ContentStore`] trait:
//!
//! - [`InMemoryContentStore`] - process-local, with failure injection for tests
//! - [`RestContentStore`] - the CMS backend's HTTP API
//! - [`record`] - the backend's legacy record shape and its conversion
//!
//! Store calls are never retried. Failures surface as [`StoreError`] and the
//! caller's editing state stays as it was.

mod content_store;
mod error;
mod memory_store;
pub mod record;
mod rest_store;

pub use content_store::ContentStore;
pub use error::{StoreError, StoreOperation};
pub use memory_store::InMemoryContentStore;
pub use rest_store::{RestContentStore, FALLBACK_ERROR_MESSAGE};
