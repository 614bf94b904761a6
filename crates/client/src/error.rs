//! Failures surfaced by the data-access layer.

use jobboard_core::DomainError;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Everything that can go wrong between issuing an operation and holding a
/// decoded value. Nothing here is retried or swallowed; callers decide.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status and no GraphQL errors.
    #[error("HTTP error ({status}): {body}")]
    Http { status: u16, body: String },

    /// The response carried GraphQL errors (with or without data).
    #[error("{}", .0.join("\n"))]
    GraphQl(Vec<String>),

    /// The response had neither errors nor a `data` object.
    #[error("response contained no data")]
    MissingData,

    /// The body or `data` did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// A link produced a header value that cannot be sent.
    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ClientError {
    pub fn from_graphql_errors(errors: &[graphql_client::Error]) -> Self {
        Self::GraphQl(errors.iter().map(|e| e.message.clone()).collect())
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::Domain(DomainError::not_found(entity, id))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::NotFound { .. }))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
