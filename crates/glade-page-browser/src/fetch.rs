//! Form-encoded POSTs against the forum's action endpoints.
//!
//! All calls share one `reqwest::Client` (fetch-backed on wasm; same-origin
//! cookies ride along automatically). Replies are read as raw text first so
//! every error path can carry the full body, then decoded as the status
//! envelope.

use std::sync::LazyLock;

use glade_page_core::{Envelope, Status};
use serde::de::DeserializeOwned;

use crate::error::PageError;

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// POST a form and decode the `ret` payload of a status-zero envelope.
///
/// Non-2xx replies, non-zero application codes and unparsable bodies all
/// surface as errors carrying the raw body; the caller decides what (if
/// anything) to touch in the DOM, which for every current caller is nothing.
pub async fn post_form<T: DeserializeOwned>(
    url: &str,
    form: &[(&str, String)],
) -> Result<T, PageError> {
    let response = CLIENT.post(url).form(form).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;

    if !(200..300).contains(&status) {
        return Err(PageError::Http { status, body });
    }

    let probe: Status = serde_json::from_str(&body).map_err(|source| PageError::Decode {
        source,
        body: body.clone(),
    })?;
    if probe.code != 0 {
        return Err(PageError::Api {
            code: probe.code,
            body,
        });
    }

    let envelope: Envelope<T> =
        serde_json::from_str(&body).map_err(|source| PageError::Decode { source, body })?;
    Ok(envelope.ret)
}
