//! Blog Studio Core - Structured Article Content
//!
//! This crate holds the content-block model behind the Blog Studio admin
//! console: articles are ordered sequences of typed blocks (headings,
//! paragraphs, bullet and numbered lists) that are edited one block at a time,
//! rendered read-only, and persisted to a content store.
//!
//! # Modules
//!
//! - [`models`] - `ContentDocument`, `ContentBlock` and checked JSON parsing
//! - [`operations`] - `BlockEditor`, the only mutation path for a document
//! - [`render`] - `BlockRenderer` with HTML and plain text renderers
//! - [`db`] - `ContentStore` with in-memory and REST backends
//! - [`services`] - `DocumentService` for save and delete flows
//! - [`config`] - `StoreConfig` for reaching the CMS backend

pub mod config;
pub mod db;
pub mod models;
pub mod operations;
pub mod render;
pub mod services;

// Re-export commonly used types
pub use config::{ConfigError, StoreConfig};
pub use db::{ContentStore, InMemoryContentStore, RestContentStore, StoreError};
pub use models::*;
pub use operations::{BlockEditor, EditorError};
pub use render::{BlockRenderer, HtmlRenderer, TextRenderer};
pub use services::*;
