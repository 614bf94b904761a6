//! `jobboard-web`
//!
//! **Responsibility:** the job detail page.
//!
//! - `view`: the detail state machine and what it renders, independent of any
//!   UI framework
//! - `routes`: paths shared with the router
//! - `frontend`: Leptos components (wasm32 only)
//!
//! The page talks to the backend only through `jobboard_client::JobBoardApi`.

pub mod frontend;
pub mod routes;
pub mod view;

use std::sync::Arc;

use jobboard_client::JobBoardApi;

/// The API handle shared with views (provided through context in the frontend).
pub type SharedApi = Arc<dyn JobBoardApi>;

pub use routes::{JOB_DETAIL_ROUTE, company_path, job_path};
pub use view::{DetailState, JobDetail, JobDetailMarkup, Link};
