//! Network transport for GraphQL requests.

use async_trait::async_trait;
use graphql_client::Response;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::link::OutgoingRequest;

/// Delivers a prepared request and returns the raw GraphQL response.
///
/// Implementations report transport-level failures only; GraphQL `errors`
/// inside a successful response are interpreted by the client.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Transport: Send + Sync {
    async fn send(&self, request: OutgoingRequest) -> ClientResult<Response<Value>>;
}

/// GraphQL-over-HTTP: `POST {query, variables, operationName}` as JSON.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Transport for HttpTransport {
    async fn send(&self, request: OutgoingRequest) -> ClientResult<Response<Value>> {
        let resp = self
            .http
            .post(&self.endpoint)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            // Servers commonly answer validation failures with 400 + a GraphQL error body.
            if let Ok(parsed) = serde_json::from_str::<Response<Value>>(&body) {
                if parsed.errors.as_ref().is_some_and(|errors| !errors.is_empty()) {
                    return Ok(parsed);
                }
            }
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
