//! Outgoing requests and the links that rewrite them before transmission.

use std::sync::Arc;

use graphql_client::QueryBody;
use jobboard_auth::SessionProvider;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::documents::Document;
use crate::error::{ClientError, ClientResult};

/// A GraphQL request on its way to the transport.
#[derive(Debug)]
pub struct OutgoingRequest {
    pub body: QueryBody<Value>,
    pub headers: HeaderMap,
}

impl OutgoingRequest {
    pub fn new(document: &Document, variables: Value) -> Self {
        Self {
            body: QueryBody {
                variables,
                query: document.source,
                operation_name: document.operation_name,
            },
            headers: HeaderMap::new(),
        }
    }

    pub fn operation_name(&self) -> &'static str {
        self.body.operation_name
    }

    pub fn set_header(&mut self, name: HeaderName, value: &str) -> ClientResult<()> {
        let value = HeaderValue::from_str(value).map_err(|e| ClientError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.headers.insert(name, value);
        Ok(())
    }

    pub fn header(&self, name: &HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A step applied to every request right before it is sent.
pub trait RequestLink: Send + Sync {
    fn prepare(&self, request: &mut OutgoingRequest) -> ClientResult<()>;
}

/// Attaches `Authorization: Bearer <token>` while a valid session exists.
///
/// The session is asked on every request; logging in or out between two
/// requests changes the second one.
#[derive(Clone)]
pub struct AuthLink {
    session: Arc<dyn SessionProvider>,
}

impl AuthLink {
    pub fn new(session: Arc<dyn SessionProvider>) -> Self {
        Self { session }
    }
}

impl std::fmt::Debug for AuthLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthLink").finish_non_exhaustive()
    }
}

impl RequestLink for AuthLink {
    fn prepare(&self, request: &mut OutgoingRequest) -> ClientResult<()> {
        match self.session.access_token() {
            Some(token) => request.set_header(AUTHORIZATION, &format!("Bearer {token}")),
            None => {
                request.headers.remove(AUTHORIZATION);
                Ok(())
            }
        }
    }
}
