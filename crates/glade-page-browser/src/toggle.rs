//! Watch/like toggle anchors.
//!
//! One routine serves both toggles; `ToggleKind` carries the names that
//! differ. The anchor element doubles as the icon: it holds the endpoint in
//! its href, the mirrored flag in a data attribute and the visual state in
//! its class. The server owns the boolean: the icon is only rewritten from
//! the reply, never before it. Two rapid clicks race two requests and the
//! last reply to arrive wins; that race is accepted, not guarded.

use glade_page_core::{CSRF_FIELD, Liked, ToggleKind, Watching, icon_class};
use gloo_events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::csrf::csrf_token;
use crate::error::PageError;
use crate::fetch::post_form;

/// View over a toggle icon element. The only writer of that DOM region.
#[derive(Clone)]
pub struct ToggleIcon {
    kind: ToggleKind,
    element: Element,
}

impl ToggleIcon {
    pub fn new(kind: ToggleKind, element: Element) -> Self {
        Self { kind, element }
    }

    /// Current flag as mirrored in the data attribute.
    pub fn flag(&self) -> bool {
        self.element.get_attribute(self.kind.flag_attr()).as_deref() == Some("true")
    }

    /// Mirror a server-confirmed flag into the attribute and class.
    pub fn apply(&self, flag: bool) {
        let _ = self
            .element
            .set_attribute(self.kind.flag_attr(), if flag { "true" } else { "false" });
        self.element.set_class_name(icon_class(flag));
    }
}

/// Attach a click handler to a toggle anchor.
///
/// The handler suppresses navigation, posts the current flag to the anchor's
/// href and rewrites the icon from the reply. Failures are logged with their
/// status and raw body; the icon keeps its pre-click state.
pub fn wire_toggle(anchor: Element, kind: ToggleKind) -> EventListener {
    let target = anchor.clone();
    EventListener::new(&target, "click", move |event| {
        event.prevent_default();

        let Some(href) = anchor.get_attribute("href") else {
            tracing::warn!("{} anchor has no href", kind.field());
            return;
        };
        let icon = ToggleIcon::new(kind, anchor.clone());

        spawn_local(async move {
            match post_toggle(&href, kind, icon.flag()).await {
                Ok(flag) => icon.apply(flag),
                Err(err) => tracing::warn!("{} toggle failed: {err}", kind.field()),
            }
        });
    })
}

/// POST one toggle and extract the server's authoritative flag.
async fn post_toggle(url: &str, kind: ToggleKind, current: bool) -> Result<bool, PageError> {
    let token = csrf_token()?;
    let form = [
        (CSRF_FIELD, token),
        (kind.field(), current.to_string()),
    ];
    match kind {
        ToggleKind::Watch => Ok(post_form::<Watching>(url, &form).await?.watching),
        ToggleKind::Like => Ok(post_form::<Liked>(url, &form).await?.ilike),
    }
}
