//! Catalog Document Model

use crate::models::product::Catalog;

/// A catalog paired with the version token (`sha`) the remote store assigned
/// to the exact bytes it was read from.
///
/// A document is immutable once read: editing means building a new catalog
/// and submitting it together with the token below. `sha` is `None` when the
/// remote blob does not exist yet (a missing file reads as an empty catalog).
///
/// The token is opaque everywhere above the store adapter; only the remote
/// store interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDocument {
    pub products: Catalog,
    pub sha: Option<String>,
}

impl CatalogDocument {
    /// The empty document a missing remote blob reads as.
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            sha: None,
        }
    }
}
