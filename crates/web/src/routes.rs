//! Paths shared with the client-side router.

use jobboard_core::{CompanyId, JobId};

/// Route of the job detail page; `jobId` is the path parameter it reads.
pub const JOB_DETAIL_ROUTE: &str = "/jobs/:jobId";

/// Name of the job id path parameter in [`JOB_DETAIL_ROUTE`].
pub const JOB_ID_PARAM: &str = "jobId";

pub fn job_path(id: &JobId) -> String {
    format!("/jobs/{id}")
}

pub fn company_path(id: &CompanyId) -> String {
    format!("/companies/{id}")
}
