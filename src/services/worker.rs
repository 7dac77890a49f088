//! Client for the external worker API (admin entries and reactions).
//!
//! ARCHITECTURE
//! ============
//! Route handlers depend on the [`WorkerApi`] trait, not on reqwest, so
//! tests can substitute an in-memory worker. [`WorkerClient`] is the HTTP
//! implementation: it forwards JSON bodies, returns the upstream status and
//! JSON body untouched, and only fails on transport errors or non-JSON
//! responses.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::config::WorkerConfig;
use crate::services::entries::EntryFilter;

pub const DEV_BYPASS_HEADER: &str = "x-dev-bypass";
pub const DEV_BYPASS_VALUE: &str = "local-development";

/// Errors talking to the worker.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("worker request failed: {0}")]
    Request(String),
    #[error("worker returned invalid json (status {status}): {message}")]
    InvalidJson { status: u16, message: String },
}

/// Status and JSON body returned by the worker.
#[derive(Debug, Clone, PartialEq)]
pub struct Upstream {
    pub status: u16,
    pub body: Value,
}

impl Upstream {
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Operations the site needs from the worker.
#[async_trait]
pub trait WorkerApi: Send + Sync {
    async fn list_entries(&self, filter: &EntryFilter) -> Result<Upstream, ProxyError>;
    async fn get_entry(&self, id: &str) -> Result<Upstream, ProxyError>;
    async fn create_entry(&self, body: &Value) -> Result<Upstream, ProxyError>;
    async fn update_entry(&self, id: &str, body: &Value) -> Result<Upstream, ProxyError>;
    async fn delete_entry(&self, id: &str) -> Result<Upstream, ProxyError>;
    async fn get_reactions(&self, entry_id: &str) -> Result<Upstream, ProxyError>;
    async fn post_reaction(&self, body: &Value) -> Result<Upstream, ProxyError>;
}

/// reqwest-backed [`WorkerApi`].
pub struct WorkerClient {
    http: reqwest::Client,
    base_url: String,
    dev_bypass: bool,
}

impl WorkerClient {
    /// # Errors
    ///
    /// Returns [`ProxyError::HttpClientBuild`] if the TLS backend cannot be initialized.
    pub fn new(config: &WorkerConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), dev_bypass: config.dev_bypass() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        if self.dev_bypass {
            builder.header(DEV_BYPASS_HEADER, DEV_BYPASS_VALUE)
        } else {
            builder
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<Upstream, ProxyError> {
        let response = builder.send().await.map_err(|e| ProxyError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ProxyError::Request(e.to_string()))?;
        let body = serde_json::from_str(&text).map_err(|e| ProxyError::InvalidJson { status, message: e.to_string() })?;

        tracing::debug!(status, "worker response");
        Ok(Upstream { status, body })
    }
}

#[async_trait]
impl WorkerApi for WorkerClient {
    async fn list_entries(&self, filter: &EntryFilter) -> Result<Upstream, ProxyError> {
        let builder = self.request(Method::GET, "/admin/entries").query(&filter.query_pairs());
        self.send(builder).await
    }

    async fn get_entry(&self, id: &str) -> Result<Upstream, ProxyError> {
        self.send(self.request(Method::GET, &format!("/admin/entries/{id}"))).await
    }

    async fn create_entry(&self, body: &Value) -> Result<Upstream, ProxyError> {
        self.send(self.request(Method::POST, "/admin/entries").json(body)).await
    }

    async fn update_entry(&self, id: &str, body: &Value) -> Result<Upstream, ProxyError> {
        self.send(self.request(Method::PUT, &format!("/admin/entries/{id}")).json(body))
            .await
    }

    async fn delete_entry(&self, id: &str) -> Result<Upstream, ProxyError> {
        self.send(self.request(Method::DELETE, &format!("/admin/entries/{id}"))).await
    }

    async fn get_reactions(&self, entry_id: &str) -> Result<Upstream, ProxyError> {
        self.send(self.request(Method::GET, &format!("/reactions/{entry_id}"))).await
    }

    async fn post_reaction(&self, body: &Value) -> Result<Upstream, ProxyError> {
        self.send(self.request(Method::POST, "/reactions").json(body)).await
    }
}

#[cfg(test)]
#[path = "worker_test.rs"]
mod tests;
