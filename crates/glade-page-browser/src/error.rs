//! Error types for the page scripts.

use thiserror::Error;

/// Errors a page handler can hit.
///
/// All of these end the same way: a `tracing::warn!` with the status/code and
/// the raw reply body, and no DOM change. Nothing retries and nothing is
/// shown to the user.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PageError {
    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the 2xx range.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The server answered 2xx but with a non-zero application code.
    #[error("server code {code}: {body}")]
    Api { code: i64, body: String },

    /// The reply body was not the expected envelope shape.
    #[error("malformed reply ({source}): {body}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },

    /// The CSRF cookie is not set; the request was not sent.
    #[error("csrf cookie {0:?} not set")]
    MissingCsrf(&'static str),

    /// A required element was missing or a DOM call failed.
    #[error("dom: {0}")]
    Dom(String),
}

impl PageError {
    /// Missing-element shorthand for selector lookups.
    pub fn missing(selector: &str) -> Self {
        PageError::Dom(format!("no element matches {selector:?}"))
    }
}
