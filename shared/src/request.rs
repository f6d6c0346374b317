//! Request types for the shared crate
//!
//! Payloads the admin UI submits to the catalog endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Catalog;

/// POST/PUT /products payload: wholesale catalog replacement.
///
/// `sha` is the version token from the caller's last read; `None` only when
/// the blob has never been written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceCatalogRequest {
    pub products: Catalog,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// DELETE /products payload: remove one product by id.
///
/// `product_id` may be any JSON value; it is compared against each record's
/// `id` field. The `sha` the caller sends is accepted for wire compatibility
/// but the server always writes with the token from its own fresh read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveProductRequest {
    #[serde(rename = "productId")]
    pub product_id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_replace_request_sha_optional() {
        let request: ReplaceCatalogRequest =
            serde_json::from_value(json!({"products": [{"id": "a"}]})).unwrap();
        assert_eq!(request.products.len(), 1);
        assert!(request.sha.is_none());
    }

    #[test]
    fn test_remove_request_wire_field_names() {
        let request: RemoveProductRequest =
            serde_json::from_value(json!({"productId": 7, "sha": "abc"})).unwrap();
        assert_eq!(request.product_id, json!(7));
        assert_eq!(request.sha.as_deref(), Some("abc"));
    }
}
