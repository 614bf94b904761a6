//! Scripted transport for unit tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use graphql_client::Response;
use parking_lot::Mutex;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::link::OutgoingRequest;
use crate::transport::Transport;

/// What the transport saw for one request.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SentRequest {
    pub operation: &'static str,
    pub variables: Value,
    pub authorization: Option<String>,
}

/// Replays queued responses in order; fails with a network error once drained.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<ClientResult<Response<Value>>>>,
    sent: Mutex<Vec<SentRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, body: Value) {
        let response = serde_json::from_value(body).expect("scripted response must be a GraphQL response");
        self.replies.lock().push_back(Ok(response));
    }

    pub fn fail(&self, err: ClientError) {
        self.replies.lock().push_back(Err(err));
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: OutgoingRequest) -> ClientResult<Response<Value>> {
        self.sent.lock().push(SentRequest {
            operation: request.operation_name(),
            variables: request.body.variables.clone(),
            authorization: request.header(&AUTHORIZATION).map(str::to_string),
        });

        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("network unavailable".into())))
    }
}
