//! Job detail view model.
//!
//! A `JobDetail` is bound to one job id for its whole life. Mounting issues a
//! single `load_job`; when it succeeds the view moves from `Loading` to
//! `Loaded` and stays there. A failed fetch leaves it `Loading`, which renders
//! nothing. Showing a different job means mounting a new `JobDetail`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use jobboard_client::JobBoardApi;
use jobboard_core::{Job, JobId};
use parking_lot::RwLock;

use crate::routes::company_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Loaded(Job),
}

/// A navigable link resolved by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// Everything the loaded page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetailMarkup {
    /// Primary heading.
    pub title: String,
    /// Secondary heading: the posting company.
    pub company_link: Link,
    /// Body text, shown as-is; empty when the job has none.
    pub description: String,
}

impl JobDetailMarkup {
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company_link: Link {
                href: company_path(&job.company.id),
                text: job.company.name.clone(),
            },
            description: job.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JobDetail {
    job_id: JobId,
    state: Arc<RwLock<DetailState>>,
    fetch_issued: Arc<AtomicBool>,
    active: Arc<AtomicBool>,
}

impl JobDetail {
    pub fn new(job_id: JobId) -> Self {
        Self {
            job_id,
            state: Arc::new(RwLock::new(DetailState::Loading)),
            fetch_issued: Arc::new(AtomicBool::new(false)),
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    pub fn state(&self) -> DetailState {
        self.state.read().clone()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Fetch the job once and store it.
    ///
    /// Later calls return immediately. If the view was unmounted while the
    /// fetch was in flight, the result is dropped.
    pub async fn mount(&self, api: &dyn JobBoardApi) {
        if self.fetch_issued.swap(true, Ordering::SeqCst) {
            return;
        }

        match api.load_job(&self.job_id).await {
            Ok(job) => {
                if !self.is_active() {
                    tracing::debug!(job_id = %self.job_id, "job arrived after unmount; dropped");
                    return;
                }
                *self.state.write() = DetailState::Loaded(job);
            }
            Err(err) => {
                tracing::warn!(job_id = %self.job_id, error = %err, "failed to load job");
            }
        }
    }

    /// Tear the view down; a pending fetch will no longer update it.
    pub fn unmount(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// `None` while loading.
    pub fn render(&self) -> Option<JobDetailMarkup> {
        match &*self.state.read() {
            DetailState::Loading => None,
            DetailState::Loaded(job) => Some(JobDetailMarkup::from_job(job)),
        }
    }
}
