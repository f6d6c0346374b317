//! Data models
//!
//! Shared between the catalog server and frontend (via API).

pub mod document;
pub mod product;

// Re-exports
pub use document::*;
pub use product::*;
