//! GitHub Contents API document store
//!
//! The production [`DocumentStore`]: one JSON file in a repository, read and
//! replaced through the Contents API, with the blob `sha` as the version
//! token. The remote rejects any write whose `sha` is stale, which makes it
//! the lock-free arbiter between concurrent admin sessions.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{Client, StatusCode, header};
use serde::{Deserialize, Serialize};
use tracing::warn;

use shared::{AppError, AppResult, Catalog, CatalogDocument};

use super::DocumentStore;
use crate::server::GitHubConfig;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const COMMIT_MESSAGE: &str = "Update product catalog via API";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct GitHubStore {
    client: Client,
    url: String,
    token: String,
}

/// GET contents response (files under 1 MB carry content inline).
#[derive(Deserialize)]
struct BlobResponse {
    content: String,
    sha: String,
}

/// PUT contents request body.
#[derive(Serialize)]
struct WriteRequest<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Deserialize)]
struct WriteResponse {
    content: WrittenBlob,
}

#[derive(Deserialize)]
struct WrittenBlob {
    sha: String,
}

#[derive(Deserialize)]
struct RemoteError {
    message: String,
}

impl GitHubStore {
    pub fn new(config: &GitHubConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            url: config.contents_url(),
            token: config.token.clone(),
        }
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[async_trait]
impl DocumentStore for GitHubStore {
    async fn fetch_document(&self) -> AppResult<CatalogDocument> {
        let response = self
            .client
            .get(&self.url)
            .header(header::AUTHORIZATION, self.auth_header())
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await
            .map_err(|e| AppError::internal(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // A blob that does not exist yet reads as an empty catalog.
            // Anything other than 404 is logged so an outage stays visible
            // in the logs without changing the read contract.
            if status != StatusCode::NOT_FOUND {
                let body = response.text().await.unwrap_or_default();
                warn!(
                    status = %status.as_u16(),
                    body = %body,
                    "Blob read failed, serving empty catalog"
                );
            }
            return Ok(CatalogDocument::empty());
        }

        let blob: BlobResponse = response
            .json()
            .await
            .map_err(|e| AppError::internal(e.to_string()))?;

        let products = decode_catalog(&blob.content)?;

        Ok(CatalogDocument {
            products,
            sha: Some(blob.sha),
        })
    }

    async fn replace_document(&self, products: &Catalog, sha: Option<&str>) -> AppResult<String> {
        let body = WriteRequest {
            message: COMMIT_MESSAGE,
            content: encode_catalog(products)?,
            sha,
        };

        let response = self
            .client
            .put(&self.url)
            .header(header::AUTHORIZATION, self.auth_header())
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::internal(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<RemoteError>()
                .await
                .map(|e| e.message)
                .unwrap_or_else(|_| {
                    format!("Blob write failed with status {}", status.as_u16())
                });
            return Err(AppError::remote_rejected(message));
        }

        let written: WriteResponse = response
            .json()
            .await
            .map_err(|e| AppError::internal(e.to_string()))?;

        Ok(written.content.sha)
    }
}

/// Decode a Contents API payload: base64 wrapped at 60 columns, UTF-8 JSON
/// array inside.
fn decode_catalog(content: &str) -> AppResult<Catalog> {
    let compact: String = content.split_ascii_whitespace().collect();
    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| AppError::internal(format!("Invalid base64 payload: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| AppError::internal(format!("Blob is not UTF-8: {e}")))?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::internal(format!("Invalid catalog JSON: {e}")))
}

/// Pretty-printed JSON, then base64 for the remote's text-safe transport.
fn encode_catalog(products: &Catalog) -> AppResult<String> {
    let text =
        serde_json::to_string_pretty(products).map_err(|e| AppError::internal(e.to_string()))?;
    Ok(BASE64.encode(text.as_bytes()))
}
