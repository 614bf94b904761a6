//! Session backed by the browser's `localStorage`.

use jobboard_auth::{SessionProvider, SessionToken};

/// `localStorage` key the login page stores the access token under.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Reads the token from `localStorage` on every request, so logging in or out
/// in another part of the page takes effect immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSession;

impl SessionProvider for BrowserSession {
    fn current_token(&self) -> Option<SessionToken> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let token = storage.get_item(ACCESS_TOKEN_KEY).ok()??;
        Some(SessionToken::new(token))
    }
}
