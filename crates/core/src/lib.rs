//! `jobboard-core` — job board domain primitives.
//!
//! These are the shapes transferred across the GraphQL boundary. The server is
//! the source of truth; nothing here carries behaviour beyond identity and
//! (de)serialization.

pub mod company;
pub mod entity;
pub mod error;
pub mod id;
pub mod job;

pub use company::{Company, CompanyJob, CompanyRef};
pub use entity::Entity;
pub use error::DomainError;
pub use id::{CompanyId, JobId};
pub use job::{CreateJobInput, Job, JobSummary};
