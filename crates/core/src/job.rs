//! Job postings.

use serde::{Deserialize, Serialize};

use crate::company::CompanyRef;
use crate::entity::Entity;
use crate::id::JobId;

/// A job as returned by the detail fragment (`JobDetail`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    /// Nullable on the server: jobs created without one come back as `null`.
    #[serde(default)]
    pub description: Option<String>,
    pub company: CompanyRef,
}

/// A job as listed by `JobsQuery` (no description).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: JobId,
    pub title: String,
    pub company: CompanyRef,
}

/// Payload of the `CreateJob` mutation (`CreateJobInput` on the server).
///
/// The posting company is derived server-side from the authenticated user, so
/// it is not part of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobInput {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateJobInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Entity for Job {
    type Id = JobId;

    fn id(&self) -> &JobId {
        &self.id
    }
}
