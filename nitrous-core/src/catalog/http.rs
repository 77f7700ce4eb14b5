//! HTTP backend for the Nitrous API
//!
//! Implements the NitrousApi trait with reqwest. Plain JSON over HTTPS.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::api::NitrousApi;
use super::RemoteResponse;
use crate::config::ApiConfig;
use crate::error::{CatalogError, TransportError};

/// reqwest-backed Nitrous API client
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    category: &'a str,
    module: &'a str,
    query: &'a str,
}

impl HttpApi {
    /// Create a new client from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nitrous/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.effective_timeout_seconds()))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for an API path
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<Value>, CatalogError> {
        let url = self.endpoint_url(path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| CatalogError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Nitrous API error: HTTP {} from {}", status, url);
            return Err(CatalogError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| CatalogError::Transport {
            url: url.clone(),
            message: format!("Failed to read response body: {e}"),
        })?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!("Response from {} is not JSON: {}", url, e);
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl NitrousApi for HttpApi {
    async fn categories(&self) -> Result<Value, CatalogError> {
        self.get_json("categories", &[])
            .await?
            .ok_or_else(|| CatalogError::Malformed {
                source_name: self.endpoint_url("categories"),
                reason: "response body is not JSON".to_string(),
            })
    }

    async fn modules_by_category(&self, category: &str) -> Result<Value, CatalogError> {
        Ok(self
            .get_json("modules", &[("category", category)])
            .await?
            .unwrap_or(Value::Null))
    }

    async fn modules(&self) -> Result<Value, CatalogError> {
        self.get_json("modules", &[])
            .await?
            .ok_or_else(|| CatalogError::Malformed {
                source_name: self.endpoint_url("modules"),
                reason: "response body is not JSON".to_string(),
            })
    }

    async fn query(
        &self,
        category: &str,
        module: &str,
        query: &str,
    ) -> Result<RemoteResponse, TransportError> {
        let url = self.endpoint_url("query");
        debug!("Submitting {}/{} query to {}", category, module, url);

        let response = self
            .client
            .post(&url)
            .json(&QueryRequest {
                category,
                module,
                query,
            })
            .send()
            .await
            .map_err(|e| TransportError::new(format!("Failed to send query to {url}: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(format!("Failed to read query response: {e}")))?;

        let data = serde_json::from_str(&body).unwrap_or(Value::String(body));

        Ok(RemoteResponse { status, data })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
