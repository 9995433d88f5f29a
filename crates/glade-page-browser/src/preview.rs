//! Server-side markdown preview.
//!
//! The markdown source goes to the render endpoint; the reply's HTML
//! fragment replaces the preview pane's contents wholesale, wrapped in a
//! markdown-styled `<article>`. The fragment is inserted verbatim; the
//! server is the trust boundary, matching how the forum renders the same
//! markdown on the topic pages themselves. On any failure the previous
//! preview stays in place.

use glade_page_core::{CSRF_FIELD, RENDER_ENDPOINT, Rendered};
use wasm_bindgen_futures::spawn_local;

use crate::csrf::csrf_token;
use crate::error::PageError;
use crate::fetch::post_form;

/// Selector of the pane the rendered fragment lands in.
pub const PREVIEW_PANEL_SELECTOR: &str = ".preview-panel";

/// Render markdown on the server and show the result in the preview pane.
pub async fn render_markdown(markdown: &str) -> Result<(), PageError> {
    let token = csrf_token()?;
    let form = [(CSRF_FIELD, token), ("md", markdown.to_string())];
    let rendered = post_form::<Rendered>(RENDER_ENDPOINT, &form).await?;
    show_preview(&rendered.rendered)
}

/// Replace the preview pane's contents with a rendered fragment.
pub fn show_preview(fragment: &str) -> Result<(), PageError> {
    let document = gloo_utils::document();
    let panel = document
        .query_selector(PREVIEW_PANEL_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| PageError::missing(PREVIEW_PANEL_SELECTOR))?;

    let article = document
        .create_element("article")
        .map_err(|_| PageError::Dom("could not create preview article".into()))?;
    article.set_class_name("markdown");
    article.set_inner_html(fragment);

    panel.set_inner_html("");
    panel
        .append_child(&article)
        .map_err(|_| PageError::Dom("could not attach preview article".into()))?;
    Ok(())
}

/// Fire-and-forget render, the shape tab wiring wants.
pub fn spawn_render(markdown: String) {
    spawn_local(async move {
        if let Err(err) = render_markdown(&markdown).await {
            tracing::warn!("markdown preview failed: {err}");
        }
    });
}
