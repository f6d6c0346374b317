//! Product Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product entity
///
/// The catalog stores whatever shape the storefront publishes; the server
/// never validates it. Only the `id` field is interpreted, and only for
/// delete-by-id, so the record is a transparent wrapper over a JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(pub Value);

impl Product {
    /// The `id` field, if the record carries one.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }
}

impl From<Value> for Product {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The full ordered list of products, serialized as one JSON array.
pub type Catalog = Vec<Product>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_extraction() {
        let product = Product(json!({"id": "P-1", "name": "Mug", "price": 12.5}));
        assert_eq!(product.id(), Some(&json!("P-1")));

        // Records without an id stay opaque
        let bare = Product(json!({"name": "unlabeled"}));
        assert_eq!(bare.id(), None);
    }

    #[test]
    fn test_arbitrary_shapes_round_trip() {
        let raw = r#"[{"id":1,"nested":{"tags":["a","b"]}},{"id":"two"}]"#;
        let catalog: Catalog = serde_json::from_str(raw).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(serde_json::to_string(&catalog).unwrap(), raw);
    }

    #[test]
    fn test_numeric_and_string_ids_are_distinct() {
        let product = Product(json!({"id": 1}));
        assert_ne!(product.id(), Some(&json!("1")));
        assert_eq!(product.id(), Some(&json!(1)));
    }
}
