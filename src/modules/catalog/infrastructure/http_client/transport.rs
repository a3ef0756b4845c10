//! HTTP transport for GraphQL requests
//!
//! The transport only moves bytes: it reports the status and raw body of a
//! single POST and never retries. Classification and decoding happen in the
//! client so every transport behaves the same under throttling.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::shared::config::CatalogConfig;
use crate::shared::errors::{AppResult, CatalogError};

/// JSON body of a GraphQL POST
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

impl GraphqlRequest {
    pub fn new(query: &str, variables: Option<Value>) -> Self {
        Self {
            query: query.to_string(),
            variables,
        }
    }
}

/// Status and undecoded body of one HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok_json(body: &Value) -> Self {
        Self::new(StatusCode::OK, body.to_string())
    }
}

/// Sends one GraphQL request and returns whatever came back.
///
/// Errors are reserved for failures before any HTTP response exists and must
/// be [`CatalogError::Transport`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn send(&self, request: &GraphqlRequest) -> AppResult<RawResponse>;
}

/// Transport backed by a pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    endpoint: Url,
}

impl ReqwestTransport {
    pub fn new(endpoint: Url, timeout: Duration, user_agent: &str) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| CatalogError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &CatalogConfig) -> AppResult<Self> {
        Self::new(config.endpoint.clone(), config.timeout, &config.user_agent)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for ReqwestTransport {
    async fn send(&self, request: &GraphqlRequest) -> AppResult<RawResponse> {
        log::debug!("Catalog: POST {} ({} bytes of query)", self.endpoint, request.query.len());

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}
