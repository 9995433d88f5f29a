//! Whole-page bootstrap.
//!
//! Finds whatever topic-page controls the current document has and wires
//! them up. Pages differ (a node listing has a watch anchor but no editor,
//! a topic view has like/reply/editor), so every piece is optional and a
//! missing one just logs at debug.

use glade_page_core::ToggleKind;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, HtmlTextAreaElement};

use crate::editor::{EditorWiring, WRITE_TEXTAREA_SELECTOR, wire_editor};
use crate::error::PageError;
use crate::quote::wire_reply_link;
use crate::toggle::wire_toggle;

const REPLY_LINK_SELECTOR: &str = "a[data-user]";

/// A wired topic page. Owns every listener; drop to detach them all.
pub struct TopicPage {
    _listeners: Vec<EventListener>,
    _editor: Option<EditorWiring>,
}

/// Wire the toggles, reply links and editor present in `document`.
pub fn wire_topic_page(document: &Document) -> Result<TopicPage, PageError> {
    let mut listeners = Vec::new();

    for kind in [ToggleKind::Watch, ToggleKind::Like] {
        match document.get_element_by_id(kind.icon_id()) {
            Some(anchor) => listeners.push(wire_toggle(anchor, kind)),
            None => tracing::debug!("page has no {} anchor", kind.icon_id()),
        }
    }

    let textarea = document
        .query_selector(WRITE_TEXTAREA_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok());

    if let Some(ref textarea) = textarea {
        if let Ok(links) = document.query_selector_all(REPLY_LINK_SELECTOR) {
            for i in 0..links.length() {
                let Some(node) = links.item(i) else {
                    continue;
                };
                let Ok(link) = node.dyn_into::<web_sys::Element>() else {
                    continue;
                };
                listeners.push(wire_reply_link(link, textarea.clone()));
            }
        }
    }

    let editor = match wire_editor(document) {
        Ok(wiring) => Some(wiring),
        Err(err) => {
            tracing::debug!("page has no editor: {err}");
            None
        }
    };

    Ok(TopicPage {
        _listeners: listeners,
        _editor: editor,
    })
}

/// Entry point called from the page once the script loads.
///
/// Installs the panic hook and tracing subscriber, wires the page and leaks
/// the listener handles, which live as long as the page does.
#[wasm_bindgen]
pub fn boot() {
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    match wire_topic_page(&gloo_utils::document()) {
        Ok(page) => std::mem::forget(page),
        Err(err) => tracing::warn!("page wiring failed: {err}"),
    }
}
