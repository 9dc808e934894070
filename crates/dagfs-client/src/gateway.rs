//! HTTP gateway block transport.
//!
//! Wraps a `reqwest::Client` with a gateway base URL and per-request
//! timeout. Errors carry the endpoint, HTTP status, and a response body
//! excerpt so transport failures are diagnosable from the error alone.
//! Retries are NOT built in — the resolver layer has no retry policy by
//! design, and callers that want one wrap the client themselves.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use dagfs_dag::{BlockFetcher, BlockUploader, DagError, DagResult};
use dagfs_types::Multihash;

/// Configuration for the gateway block transport.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the gateway API (e.g. `https://ipfs.infura.io:5001`).
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for an IPFS-style block gateway.
///
/// `Send + Sync`; share via `Arc` across async tasks.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

/// Response body of `block/put`.
#[derive(Debug, Deserialize)]
struct BlockPutResponse {
    #[serde(rename = "Key")]
    key: String,
}

impl GatewayClient {
    /// Build a client from a configuration.
    pub fn new(config: GatewayConfig) -> DagResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DagError::Transport(format!("building http client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn check_status(url: &str, resp: reqwest::Response) -> DagResult<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let excerpt: String = body.chars().take(200).collect();
        Err(DagError::Transport(format!(
            "{url} returned {status}: {excerpt}"
        )))
    }
}

#[async_trait]
impl BlockFetcher for GatewayClient {
    async fn fetch_block(&self, id: &Multihash) -> DagResult<Vec<u8>> {
        let url = format!("{}/api/v0/block/get?arg={}", self.base_url, id);
        debug!(id = %id, "fetching block from gateway");
        let resp = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| DagError::Transport(format!("{url}: {e}")))?;
        let resp = Self::check_status(&url, resp).await?;
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| DagError::Transport(format!("{url}: reading body: {e}")))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl BlockUploader for GatewayClient {
    async fn upload_block(&self, encoded: &[u8]) -> DagResult<Multihash> {
        let url = format!("{}/api/v0/block/put", self.base_url);
        debug!(bytes = encoded.len(), "uploading block to gateway");
        let part = reqwest::multipart::Part::bytes(encoded.to_vec()).file_name("block");
        let form = reqwest::multipart::Form::new().part("data", part);
        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DagError::Transport(format!("{url}: {e}")))?;
        let resp = Self::check_status(&url, resp).await?;
        let body: BlockPutResponse = resp
            .json()
            .await
            .map_err(|e| DagError::Transport(format!("{url}: parsing response: {e}")))?;
        Ok(Multihash::from_base58(&body.key)?)
    }
}
