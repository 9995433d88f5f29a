//! Tabbed markdown editor wiring.
//!
//! Registers the four listeners the editor needs (toolbar menu clicks,
//! focus/blur of the write textarea, and the tab-shown notification) and
//! routes them through the core pane state machine. The tab widget announces
//! pane changes with a `shown.bs.tab` event on the tab anchor; the anchor's
//! `aria-controls` names the pane that just appeared.

use std::cell::RefCell;
use std::rc::Rc;

use glade_page_core::{EditorState, PaneEffects, PaneEvent, editor_class};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlTextAreaElement};

use crate::error::PageError;
use crate::preview::spawn_render;

/// Write-pane textarea holding the markdown source.
pub const WRITE_TEXTAREA_SELECTOR: &str = "#write > textarea";
/// Container whose class mirrors the editor's active state.
pub const EDITOR_CONTAINER_SELECTOR: &str = "div.md-editor";

const MENU_BUTTON_SELECTOR: &str = r#"button[data-toggle="menu"]"#;
const TAB_ANCHOR_SELECTOR: &str = r#"a[data-toggle="tab"]"#;
const TAB_SHOWN_EVENT: &str = "shown.bs.tab";

/// A wired editor instance. Dropping it detaches every listener.
pub struct EditorWiring {
    state: Rc<RefCell<EditorState>>,
    _listeners: Vec<EventListener>,
}

impl EditorWiring {
    /// Shared pane state, mainly for inspection.
    pub fn state(&self) -> Rc<RefCell<EditorState>> {
        Rc::clone(&self.state)
    }
}

/// Wire the tabbed editor found in `document`.
///
/// Fails only when the write textarea or the editor container is missing;
/// a page without menu buttons or tab anchors just gets fewer listeners.
pub fn wire_editor(document: &Document) -> Result<EditorWiring, PageError> {
    let textarea = document
        .query_selector(WRITE_TEXTAREA_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| PageError::missing(WRITE_TEXTAREA_SELECTOR))?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| PageError::Dom("write pane element is not a textarea".into()))?;

    let container = document
        .query_selector(EDITOR_CONTAINER_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| PageError::missing(EDITOR_CONTAINER_SELECTOR))?;

    let state = Rc::new(RefCell::new(EditorState::new()));
    let mut listeners = Vec::new();

    // 1. Toolbar menu controls. The state machine treats these as an explicit
    //    no-op; the textarea and action name are read so the extension point
    //    has its inputs in hand.
    for button in elements_matching(document, MENU_BUTTON_SELECTOR) {
        let state = Rc::clone(&state);
        let container = container.clone();
        let textarea = textarea.clone();
        let button_el = button.clone();
        listeners.push(EventListener::new(&button, "click", move |_event| {
            let action = button_el.get_attribute("aria-controls").unwrap_or_default();
            let effects = state.borrow_mut().handle(PaneEvent::MenuAction { action: &action });
            apply_effects(&container, &textarea, effects);
        }));
    }

    // 2. + 3. Focus and blur of the write textarea drive the active styling.
    {
        let state = Rc::clone(&state);
        let container = container.clone();
        let inner = textarea.clone();
        listeners.push(EventListener::new(&textarea, "focus", move |_event| {
            let effects = state.borrow_mut().handle(PaneEvent::Focus);
            apply_effects(&container, &inner, effects);
        }));
    }
    {
        let state = Rc::clone(&state);
        let container = container.clone();
        let inner = textarea.clone();
        listeners.push(EventListener::new(&textarea, "blur", move |_event| {
            let effects = state.borrow_mut().handle(PaneEvent::Blur);
            apply_effects(&container, &inner, effects);
        }));
    }

    // 4. Tab-shown: entering any non-write pane re-renders the full text.
    for anchor in elements_matching(document, TAB_ANCHOR_SELECTOR) {
        let state = Rc::clone(&state);
        let container = container.clone();
        let textarea = textarea.clone();
        let anchor_el = anchor.clone();
        listeners.push(EventListener::new(&anchor, TAB_SHOWN_EVENT, move |_event| {
            let target = anchor_el.get_attribute("aria-controls").unwrap_or_default();
            let effects = state.borrow_mut().handle(PaneEvent::TabShown { target: &target });
            apply_effects(&container, &textarea, effects);
        }));
    }

    Ok(EditorWiring {
        state,
        _listeners: listeners,
    })
}

fn apply_effects(container: &Element, textarea: &HtmlTextAreaElement, effects: PaneEffects) {
    if let Some(active) = effects.editor_active {
        container.set_class_name(editor_class(active));
    }
    if effects.render_preview {
        spawn_render(textarea.value());
    }
}

/// Collect the elements matching a selector. Single querySelectorAll instead
/// of per-element queries.
fn elements_matching(document: &Document, selector: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    let Ok(node_list) = document.query_selector_all(selector) else {
        return elements;
    };
    for i in 0..node_list.length() {
        let Some(node) = node_list.item(i) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            elements.push(element);
        }
    }
    elements
}
