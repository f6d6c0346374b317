//! Shared types for the Gitshelf workspace
//!
//! Common types used by the catalog server and any future client crates:
//! catalog models, request/response payloads and the unified error type.

pub mod error;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody};
pub use models::{Catalog, CatalogDocument, Product};
pub use request::{RemoveProductRequest, ReplaceCatalogRequest};
pub use response::{CatalogResponse, MutationResponse};
