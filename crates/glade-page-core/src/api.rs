//! Wire types for the forum's action endpoints.
//!
//! Every endpoint replies with the same envelope: a top-level `code` (zero on
//! success) and a `ret` object whose shape depends on the call. Requests are
//! form-encoded POSTs carrying the CSRF token under the field name the server
//! framework expects.

use serde::Deserialize;

/// Cookie the server stores the per-session CSRF token in.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Form field state-changing requests carry the token under.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Markdown preview endpoint. Watch/like endpoints are per-subject and come
/// from the clicked anchor's href instead.
pub const RENDER_ENDPOINT: &str = "/action/render/";

/// Top-level status probe, parsable from any reply.
#[derive(Debug, Deserialize)]
pub struct Status {
    pub code: i64,
}

/// Full reply shape once `code` is known to be zero.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub ret: T,
}

/// `ret` of a watch toggle.
#[derive(Debug, Deserialize)]
pub struct Watching {
    pub watching: bool,
}

/// `ret` of a like toggle.
#[derive(Debug, Deserialize)]
pub struct Liked {
    pub ilike: bool,
}

/// `ret` of a markdown render. `rendered` is a server-produced HTML fragment
/// and is trusted as-is; the trust boundary is the server.
#[derive(Debug, Deserialize)]
pub struct Rendered {
    pub rendered: String,
}
