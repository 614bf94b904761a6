use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A bearer token held by the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// Opaque access token, sent as `Authorization: Bearer <token>`.
    pub access_token: String,

    /// Expiration timestamp, when the issuer provided one.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    pub fn expiring_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("access token is empty")]
    EmptyToken,

    #[error("access token has expired")]
    Expired,
}

/// Deterministically validate a session token against `now`.
pub fn validate_token(token: &SessionToken, now: DateTime<Utc>) -> Result<(), SessionError> {
    if token.access_token.trim().is_empty() {
        return Err(SessionError::EmptyToken);
    }
    if let Some(expires_at) = token.expires_at {
        if now >= expires_at {
            return Err(SessionError::Expired);
        }
    }
    Ok(())
}

/// Source of the current session, queried on every outgoing request.
///
/// Implementations must reflect logins and logouts that happen between
/// requests; callers never cache the answer.
pub trait SessionProvider: Send + Sync {
    /// The current token, if any (valid or not).
    fn current_token(&self) -> Option<SessionToken>;

    /// The bearer token to attach right now, or `None` when no valid session exists.
    fn access_token(&self) -> Option<String> {
        let token = self.current_token()?;
        match validate_token(&token, Utc::now()) {
            Ok(()) => Some(token.access_token),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring invalid session token");
                None
            }
        }
    }

    fn is_logged_in(&self) -> bool {
        self.access_token().is_some()
    }
}

impl<T> SessionProvider for Arc<T>
where
    T: SessionProvider + ?Sized,
{
    fn current_token(&self) -> Option<SessionToken> {
        (**self).current_token()
    }

    fn access_token(&self) -> Option<String> {
        (**self).access_token()
    }

    fn is_logged_in(&self) -> bool {
        (**self).is_logged_in()
    }
}

/// A session that is never logged in.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnonymousSession;

impl SessionProvider for AnonymousSession {
    fn current_token(&self) -> Option<SessionToken> {
        None
    }
}

/// In-memory session shared between the login flow and the request layer.
///
/// Clones share the same slot, so a `login` through one handle is visible to
/// the next request made through any other.
#[derive(Debug, Default, Clone)]
pub struct SharedSession {
    token: Arc<RwLock<Option<SessionToken>>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: SessionToken) -> Self {
        let session = Self::new();
        session.login(token);
        session
    }

    pub fn login(&self, token: SessionToken) {
        *self.token.write() = Some(token);
    }

    pub fn logout(&self) {
        self.token.write().take();
    }
}

impl SessionProvider for SharedSession {
    fn current_token(&self) -> Option<SessionToken> {
        self.token.read().clone()
    }
}
