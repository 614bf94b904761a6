//! `jobboard-client` — data-access layer for the job board.
//!
//! A small GraphQL client (links, HTTP transport, in-memory cache) and the
//! four operations the UI consumes through [`JobBoardApi`].

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod documents;
pub mod error;
pub mod link;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{JobBoard, JobBoardApi};
pub use cache::{FetchPolicy, InMemoryCache};
pub use client::{GraphQlClient, GraphQlClientBuilder};
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use documents::Document;
pub use error::{ClientError, ClientResult};
pub use link::{AuthLink, OutgoingRequest, RequestLink};
pub use transport::{HttpTransport, Transport};
