//! Leptos frontend (wasm32 only).

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod session;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point, called automatically when the module loads.
///
/// Builds the one API client for the page and hands it to the component tree
/// through context.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    use std::sync::Arc;

    use jobboard_auth::SessionProvider;
    use jobboard_client::{ClientConfig, JobBoard};

    use crate::SharedApi;
    use app::App;

    console_error_panic_hook::set_once();

    let session: Arc<dyn SessionProvider> = Arc::new(session::BrowserSession);
    let api: SharedApi = Arc::new(JobBoard::connect(&ClientConfig::default(), session));

    leptos::mount_to_body(move || {
        leptos::provide_context(api);
        App()
    });
}
