//! The four job board operations.

use std::sync::Arc;

use async_trait::async_trait;
use jobboard_auth::SessionProvider;
use jobboard_core::{Company, CompanyId, CreateJobInput, Entity, Job, JobId, JobSummary};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::cache::{FetchPolicy, InMemoryCache};
use crate::client::GraphQlClient;
use crate::config::ClientConfig;
use crate::documents::{COMPANY_QUERY, CREATE_JOB_MUTATION, JOB_QUERY, JOBS_QUERY};
use crate::error::{ClientError, ClientResult};
use crate::link::AuthLink;
use crate::transport::HttpTransport;

/// Operations the UI needs from the job board backend.
///
/// Views take this as `Arc<dyn JobBoardApi>` so tests can substitute it.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait JobBoardApi: Send + Sync {
    /// Every job, always fetched from the server.
    async fn list_jobs(&self) -> ClientResult<Vec<JobSummary>>;

    /// One job with its description; may be answered from cache.
    async fn load_job(&self, id: &JobId) -> ClientResult<Job>;

    /// One company with its jobs, always fetched from the server.
    async fn load_company(&self, id: &CompanyId) -> ClientResult<Company>;

    /// Create a job and make it immediately loadable from cache.
    async fn create_job(&self, input: CreateJobInput) -> ClientResult<Job>;
}

#[derive(Debug, Deserialize)]
struct JobsData {
    jobs: Vec<JobSummary>,
}

/// `data` of `JobQuery`, and of `CreateJob` thanks to the `job:` alias.
#[derive(Debug, Serialize, Deserialize)]
struct JobData {
    job: Option<Job>,
}

#[derive(Debug, Deserialize)]
struct CompanyData {
    company: Option<Company>,
}

/// `JobBoardApi` backed by a `GraphQlClient`.
#[derive(Debug, Clone)]
pub struct JobBoard {
    client: GraphQlClient,
}

impl JobBoard {
    pub fn new(client: GraphQlClient) -> Self {
        Self { client }
    }

    /// HTTP transport to `config.endpoint`, an auth link over `session`, and a fresh cache.
    pub fn connect(config: &ClientConfig, session: Arc<dyn SessionProvider>) -> Self {
        tracing::info!(endpoint = %config.endpoint, "configuring job board client");
        let client = GraphQlClient::builder(Arc::new(HttpTransport::new(config.endpoint.clone())))
            .link(AuthLink::new(session))
            .cache(InMemoryCache::new())
            .build();
        Self::new(client)
    }

    pub fn client(&self) -> &GraphQlClient {
        &self.client
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl JobBoardApi for JobBoard {
    async fn list_jobs(&self) -> ClientResult<Vec<JobSummary>> {
        let data: JobsData = self
            .client
            .query(&JOBS_QUERY, json!({}), FetchPolicy::NoCache)
            .await?;
        Ok(data.jobs)
    }

    async fn load_job(&self, id: &JobId) -> ClientResult<Job> {
        let data: JobData = self
            .client
            .query(&JOB_QUERY, json!({ "id": id }), FetchPolicy::CacheFirst)
            .await?;
        data.job.ok_or_else(|| ClientError::not_found("job", id.as_str()))
    }

    async fn load_company(&self, id: &CompanyId) -> ClientResult<Company> {
        let data: CompanyData = self
            .client
            .query(&COMPANY_QUERY, json!({ "id": id }), FetchPolicy::NoCache)
            .await?;
        data.company
            .ok_or_else(|| ClientError::not_found("company", id.as_str()))
    }

    async fn create_job(&self, input: CreateJobInput) -> ClientResult<Job> {
        let data: JobData = self
            .client
            .mutate(&CREATE_JOB_MUTATION, json!({ "input": input }), |cache, data: &JobData| {
                match &data.job {
                    Some(job) => cache.write_query(&JOB_QUERY, &json!({ "id": job.id() }), data),
                    None => Ok(()),
                }
            })
            .await?;

        let job = data.job.ok_or(ClientError::MissingData)?;
        tracing::info!(job_id = %job.id, "job created");
        Ok(job)
    }
}
