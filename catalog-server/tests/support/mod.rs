//! Test support
//!
//! An in-memory [`DocumentStore`] double that simulates the remote store's
//! version-token discipline (stale tokens are rejected, accepted writes get
//! a fresh token), records calls, and some request plumbing for driving the
//! full application in-process.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use sha2::{Digest, Sha256};
use tower::ServiceExt;

use catalog_server::routes::build_app;
use catalog_server::server::{Config, GitHubConfig, ServerState};
use catalog_server::store::DocumentStore;
use shared::{AppError, AppResult, Catalog, CatalogDocument};

pub const ADMIN_PASSWORD: &str = "s3cret";
pub const ALLOWED_ORIGIN: &str = "https://shop.example.com";

/// In-memory document store with token simulation and call recording.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    products: Catalog,
    sha: Option<String>,
    generation: u64,
    fetch_calls: usize,
    write_calls: usize,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn empty() -> Arc<Self> {
        Self::build(Vec::new(), None)
    }

    pub fn seeded(products: Catalog) -> Arc<Self> {
        let sha = token_for(&products, 0);
        Self::build(products, Some(sha))
    }

    fn build(products: Catalog, sha: Option<String>) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(Inner {
                products,
                sha,
                generation: 0,
                fetch_calls: 0,
                write_calls: 0,
                fail_writes: false,
            }),
        })
    }

    pub fn sha(&self) -> Option<String> {
        self.inner.lock().unwrap().sha.clone()
    }

    pub fn products(&self) -> Catalog {
        self.inner.lock().unwrap().products.clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.inner.lock().unwrap().fetch_calls
    }

    pub fn write_calls(&self) -> usize {
        self.inner.lock().unwrap().write_calls
    }

    /// Make every subsequent write fail, as a remote outage would.
    pub fn fail_writes(&self) {
        self.inner.lock().unwrap().fail_writes = true;
    }
}

/// Tokens change with every accepted write, like a fresh commit sha.
fn token_for(products: &Catalog, generation: u64) -> String {
    let text = serde_json::to_string(products).unwrap();
    let digest = Sha256::digest(format!("{generation}:{text}").as_bytes());
    hex::encode(&digest[..20])
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn fetch_document(&self) -> AppResult<CatalogDocument> {
        let mut inner = self.inner.lock().unwrap();
        inner.fetch_calls += 1;

        Ok(CatalogDocument {
            products: inner.products.clone(),
            sha: inner.sha.clone(),
        })
    }

    async fn replace_document(&self, products: &Catalog, sha: Option<&str>) -> AppResult<String> {
        let mut inner = self.inner.lock().unwrap();
        inner.write_calls += 1;

        if inner.fail_writes {
            return Err(AppError::internal("simulated remote outage"));
        }

        if inner.sha.as_deref() != sha {
            return Err(AppError::remote_rejected(format!(
                "products.json does not match {}",
                sha.unwrap_or("(missing sha)")
            )));
        }

        inner.generation += 1;
        let new_sha = token_for(products, inner.generation);
        inner.products = products.to_vec();
        inner.sha = Some(new_sha.clone());
        Ok(new_sha)
    }
}

pub fn test_config() -> Config {
    Config {
        http_port: 0,
        environment: "test".into(),
        log_level: "warn".into(),
        admin_password: ADMIN_PASSWORD.into(),
        allowed_origins: vec![ALLOWED_ORIGIN.into(), "http://localhost:5500".into()],
        github: GitHubConfig {
            api_url: "https://api.github.invalid".into(),
            token: "test-token".into(),
            owner: "acme".into(),
            repo: "storefront".into(),
            file_path: "products.json".into(),
        },
    }
}

/// The full application, wired to the given store double.
pub fn app(store: Arc<MemoryStore>) -> Router {
    let state = ServerState::with_store(test_config(), store);
    build_app(&state).with_state(state)
}

/// Drive one request through the router; collect status, headers and body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, http::HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (parts.status, parts.headers, value)
}

pub fn products_request(method: &str) -> http::request::Builder {
    Request::builder().method(method).uri("/products")
}

pub fn json_body(value: &Value) -> Body {
    Body::from(serde_json::to_vec(value).unwrap())
}
