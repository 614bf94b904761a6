//! `jobboard-auth` — the session capability consumed by the request layer.
//!
//! Token issuance lives on the server. This crate only answers "is there a
//! valid session right now, and what is its bearer token?".

pub mod session;

pub use session::{
    AnonymousSession, SessionError, SessionProvider, SessionToken, SharedSession, validate_token,
};
