//! CSRF token lookup in the browser cookie store.

use glade_page_core::{CSRF_COOKIE, cookie_value};
use wasm_bindgen::JsCast;

use crate::error::PageError;

/// Read the session's CSRF token from `document.cookie`.
///
/// Every state-changing POST carries this token; without it the server would
/// reject the request anyway, so callers bail before sending.
pub fn csrf_token() -> Result<String, PageError> {
    let cookies = gloo_utils::document()
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default();

    cookie_value(&cookies, CSRF_COOKIE).ok_or(PageError::MissingCsrf(CSRF_COOKIE))
}
