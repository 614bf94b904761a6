//! Companies and the lightweight references jobs carry to them.

use serde::{Deserialize, Serialize};

use crate::id::{CompanyId, JobId};

/// The `company { id name }` selection embedded in every job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: CompanyId,
    pub name: String,
}

/// A job listed under a company (`jobs { id title }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyJob {
    pub id: JobId,
    pub title: String,
}

/// A company as returned by `CompanyQuery`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub jobs: Vec<CompanyJob>,
}
