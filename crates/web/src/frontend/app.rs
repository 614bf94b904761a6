//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use jobboard_core::JobId;

use crate::SharedApi;
use crate::routes::{JOB_DETAIL_ROUTE, JOB_ID_PARAM};
use crate::view::JobDetail;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path=JOB_DETAIL_ROUTE view=JobDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Job detail route.
///
/// The router keeps this component alive across `/jobs/1` -> `/jobs/2`, so the
/// inner view is rebuilt whenever the id changes: each id gets a fresh
/// `JobDetail` and the previous one is unmounted.
#[component]
fn JobDetailPage() -> impl IntoView {
    let api = expect_context::<SharedApi>();
    let params = use_params_map();
    let job_id = create_memo(move |_| {
        params.with(|p| p.get(JOB_ID_PARAM).cloned().unwrap_or_default())
    });

    move || {
        let job_id = JobId::new(job_id.get());
        view! { <JobDetailView job_id=job_id api=api.clone()/> }
    }
}

/// Renders one job: nothing until it has loaded.
#[component]
fn JobDetailView(job_id: JobId, api: SharedApi) -> impl IntoView {
    let detail = JobDetail::new(job_id);
    let (markup, set_markup) = create_signal(None);

    {
        let detail = detail.clone();
        spawn_local(async move {
            detail.mount(&*api).await;
            if detail.is_active() {
                set_markup.set(detail.render());
            }
        });
    }

    on_cleanup(move || detail.unmount());

    move || {
        markup.get().map(|m| {
            view! {
                <div>
                    <h1 class="title">{m.title}</h1>
                    <h2 class="subtitle">
                        <A href=m.company_link.href>{m.company_link.text}</A>
                    </h2>
                    <div class="box">{m.description}</div>
                </div>
            }
        })
    }
}
