//! Reply-quote mention links.

use glade_page_core::append_mention;
use gloo_events::EventListener;
use web_sys::{Element, HtmlTextAreaElement};

/// Attach a click handler that quotes the link's user into the reply box.
///
/// The destination textarea is bound here by the registering code instead of
/// being looked up per click, so the handler has no hidden coupling to page
/// structure. Pure text manipulation, no network call.
pub fn wire_reply_link(link: Element, textarea: HtmlTextAreaElement) -> EventListener {
    let target = link.clone();
    EventListener::new(&target, "click", move |event| {
        event.prevent_default();

        let Some(user) = link.get_attribute("data-user") else {
            tracing::warn!("reply link has no data-user");
            return;
        };

        textarea.set_value(&append_mention(&textarea.value(), &user));
        let _ = textarea.focus();
    })
}
