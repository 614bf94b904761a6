//! GraphQL client: links, transport and cache behind `query` / `mutate`.

use std::sync::Arc;

use graphql_client::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cache::{CacheKey, FetchPolicy, InMemoryCache};
use crate::documents::Document;
use crate::error::{ClientError, ClientResult};
use crate::link::{OutgoingRequest, RequestLink};
use crate::transport::Transport;

/// Shared GraphQL client.
///
/// Cheap to clone; clones share the transport, links and cache.
#[derive(Clone)]
pub struct GraphQlClient {
    transport: Arc<dyn Transport>,
    links: Arc<Vec<Arc<dyn RequestLink>>>,
    cache: InMemoryCache,
}

pub struct GraphQlClientBuilder {
    transport: Arc<dyn Transport>,
    links: Vec<Arc<dyn RequestLink>>,
    cache: Option<InMemoryCache>,
}

impl GraphQlClientBuilder {
    /// Append a link; links run in the order they were added.
    pub fn link(mut self, link: impl RequestLink + 'static) -> Self {
        self.links.push(Arc::new(link));
        self
    }

    pub fn cache(mut self, cache: InMemoryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> GraphQlClient {
        GraphQlClient {
            transport: self.transport,
            links: Arc::new(self.links),
            cache: self.cache.unwrap_or_default(),
        }
    }
}

impl GraphQlClient {
    pub fn builder(transport: Arc<dyn Transport>) -> GraphQlClientBuilder {
        GraphQlClientBuilder {
            transport,
            links: Vec::new(),
            cache: None,
        }
    }

    pub fn cache(&self) -> &InMemoryCache {
        &self.cache
    }

    /// Run a query under `policy` and decode its `data` into `T`.
    pub async fn query<T>(&self, document: &Document, variables: Value, policy: FetchPolicy) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let key = CacheKey::new(document, &variables);

        if policy.reads_cache() {
            if let Some(data) = self.cache.read(&key) {
                tracing::debug!(operation = document.operation_name, "served from cache");
                return decode(data);
            }
        }

        tracing::debug!(operation = document.operation_name, ?policy, "sending query");
        let data = self.execute(document, variables).await?;
        let result = decode(data.clone())?;

        // Only data that decoded is cached; a bad payload must not shadow the network.
        if policy.writes_cache() {
            self.cache.write(key, data);
        }

        Ok(result)
    }

    /// Run a mutation, then let `update` fold the decoded result into the cache.
    ///
    /// The mutation's own result is never cached under the mutation's key.
    pub async fn mutate<T, F>(&self, document: &Document, variables: Value, update: F) -> ClientResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce(&InMemoryCache, &T) -> ClientResult<()>,
    {
        tracing::debug!(operation = document.operation_name, "sending mutation");
        let data = self.execute(document, variables).await?;
        let result = decode(data)?;
        update(&self.cache, &result)?;
        Ok(result)
    }

    async fn execute(&self, document: &Document, variables: Value) -> ClientResult<Value> {
        let mut request = OutgoingRequest::new(document, variables);
        for link in self.links.iter() {
            link.prepare(&mut request)?;
        }

        let response = self.transport.send(request).await?;
        into_data(response)
    }
}

impl std::fmt::Debug for GraphQlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQlClient")
            .field("links", &self.links.len())
            .field("cached_entries", &self.cache.len())
            .finish()
    }
}

/// Application errors win over data: a partial result is still a failure.
fn into_data(response: Response<Value>) -> ClientResult<Value> {
    if let Some(errors) = response.errors.as_deref() {
        if !errors.is_empty() {
            return Err(ClientError::from_graphql_errors(errors));
        }
    }
    match response.data {
        Some(Value::Null) | None => Err(ClientError::MissingData),
        Some(data) => Ok(data),
    }
}

fn decode<T: DeserializeOwned>(data: Value) -> ClientResult<T> {
    serde_json::from_value(data).map_err(|e| ClientError::Decode(e.to_string()))
}
