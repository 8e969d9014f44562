//! Thin GET client over the backend's REST surface.

use crate::error::{CheckError, Result};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Raw outcome of a single GET: the status code plus the undecoded body
/// text, so non-200 bodies can be reported without a JSON decode attempt.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    /// Decodes the body as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

pub struct SchemaApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl SchemaApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Base URL without a trailing slash, as shown in diagnostics.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub async fn schema_health(&self) -> Result<RawResponse> {
        self.get("api/schema/health", &[]).await
    }

    pub async fn default_schema(&self) -> Result<RawResponse> {
        self.get("api/schema/default", &[]).await
    }

    pub async fn load_schema(&self, path: &str) -> Result<RawResponse> {
        self.get("api/schema/load", &[("path", path)]).await
    }

    pub async fn xml_health(&self) -> Result<RawResponse> {
        self.get("api/xml/health", &[]).await
    }

    pub async fn list_documents(&self, page: u32, size: u32) -> Result<RawResponse> {
        self.get(
            "api/xml/documents",
            &[("page", &page.to_string()), ("size", &size.to_string())],
        )
        .await
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<RawResponse> {
        let url = format!("{}/{}", self.base_url(), path);
        debug!(%url, "GET");

        let mut request = self.client.get(url.as_str());
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                CheckError::Connect {
                    url: self.base_url().to_string(),
                    source: e,
                }
            } else {
                CheckError::Http(e)
            }
        })?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "response received");

        Ok(RawResponse { status, body })
    }
}
