//! Document Store Adapter
//!
//! Treats a remote versioned-blob API as a JSON document store with
//! optimistic concurrency. The version token is opaque to everything above
//! this module; only the implementations and the remote store interpret it,
//! so swapping the backing store never touches the router.

use async_trait::async_trait;

use shared::{AppResult, Catalog, CatalogDocument};

mod github;

pub use github::GitHubStore;

/// Catalog-level operations against a single named remote blob.
///
/// Every call is a single attempt: no retry, no backoff. A token conflict
/// and a transient network failure both surface as errors for the router to
/// map into a response; retrying a conflicted write here would silently
/// clobber the concurrent edit that caused the mismatch.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the current document. A missing blob is an empty catalog with no
    /// token, not an error, so first-time setup needs no initialization step.
    async fn fetch_document(&self) -> AppResult<CatalogDocument>;

    /// Replace the whole catalog, presenting the token from the read the new
    /// content derives from (`None` only for the very first write). Returns
    /// the token the remote assigns to the new content.
    ///
    /// Removing a single entry is deliberately not a primitive here; callers
    /// compose it as read, filter, replace with the token from that read.
    async fn replace_document(&self, products: &Catalog, sha: Option<&str>) -> AppResult<String>;
}
