//! API Response types
//!
//! Wire shapes the catalog endpoint answers with. These are fixed by the
//! storefront and admin UI, so there is no generic envelope around them.

use serde::{Deserialize, Serialize};

use crate::models::Catalog;

/// GET /products response: the full catalog plus its version token.
///
/// `sha` is omitted when the remote blob does not exist yet; the storefront
/// renders the empty catalog and the first write creates the blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub products: Catalog,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// Mutation success response: the token the remote store assigned to the new
/// content. The caller must present it on its next write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    pub sha: String,
}
