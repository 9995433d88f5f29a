//! WASM browser tests for glade-page-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use glade_page_browser::editor::wire_editor;
use glade_page_browser::preview::{PREVIEW_PANEL_SELECTOR, show_preview};
use glade_page_browser::quote::wire_reply_link;
use glade_page_browser::toggle::{ToggleIcon, wire_toggle};
use glade_page_browser::{Pane, ToggleKind};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlTextAreaElement};

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Reset the test page to a fixture.
fn set_body(html: &str) -> Document {
    let doc = document();
    doc.body().unwrap().set_inner_html(html);
    doc
}

fn dispatch(element: &Element, event_name: &str) {
    let event = web_sys::Event::new(event_name).unwrap();
    element.dispatch_event(&event).unwrap();
}

fn click(element: &Element) {
    let event = web_sys::MouseEvent::new("click").unwrap();
    element.dispatch_event(&event).unwrap();
}

/// Let continuations spawned by a handler run to their next await point.
async fn settle() {
    for _ in 0..10 {
        let _ = JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL)).await;
    }
}

// === ToggleIcon tests ===

#[wasm_bindgen_test]
fn icon_apply_active() {
    let doc = set_body(r#"<a id="watch" href="/action/watch-node/1/" data-watch="false"></a>"#);
    let anchor = doc.get_element_by_id("watch").unwrap();

    let icon = ToggleIcon::new(ToggleKind::Watch, anchor.clone());
    icon.apply(true);

    assert_eq!(anchor.get_attribute("data-watch").as_deref(), Some("true"));
    assert_eq!(anchor.class_name(), "glade-link active");
}

#[wasm_bindgen_test]
fn icon_apply_plain() {
    let doc = set_body(r#"<a id="like" href="/action/like-topic/1/" data-like="true"></a>"#);
    let anchor = doc.get_element_by_id("like").unwrap();

    let icon = ToggleIcon::new(ToggleKind::Like, anchor.clone());
    icon.apply(false);

    assert_eq!(anchor.get_attribute("data-like").as_deref(), Some("false"));
    assert_eq!(anchor.class_name(), "glade-link");
}

#[wasm_bindgen_test]
fn icon_flag_reads_attribute() {
    let doc = set_body(r#"<a id="watch" data-watch="true"></a><a id="like"></a>"#);

    let watch = ToggleIcon::new(ToggleKind::Watch, doc.get_element_by_id("watch").unwrap());
    assert!(watch.flag());

    // Missing attribute reads as false.
    let like = ToggleIcon::new(ToggleKind::Like, doc.get_element_by_id("like").unwrap());
    assert!(!like.flag());
}

#[wasm_bindgen_test]
async fn failed_toggle_leaves_icon_unchanged() {
    // The test page carries no CSRF cookie, so the click's POST fails before
    // anything is sent. The icon must keep its pre-click attribute and class;
    // only a status-zero reply may rewrite it.
    let doc = set_body(
        r#"<a id="watch" href="/action/watch-node/1/" data-watch="false" class="glade-link"></a>"#,
    );
    let anchor = doc.get_element_by_id("watch").unwrap();
    let _listener = wire_toggle(anchor.clone(), ToggleKind::Watch);

    click(&anchor);
    settle().await;

    assert_eq!(anchor.get_attribute("data-watch").as_deref(), Some("false"));
    assert_eq!(anchor.class_name(), "glade-link");
}

// === Preview pane tests ===

#[wasm_bindgen_test]
fn preview_replaces_pane_with_one_markdown_article() {
    let doc = set_body(r#"<div class="preview-panel"><p>stale</p></div>"#);

    show_preview("<p>x</p>").unwrap();

    let panel = doc.query_selector(PREVIEW_PANEL_SELECTOR).unwrap().unwrap();
    assert_eq!(panel.child_element_count(), 1);
    let article = panel.first_element_child().unwrap();
    assert_eq!(article.tag_name(), "ARTICLE");
    assert_eq!(article.class_name(), "markdown");
    assert_eq!(article.inner_html(), "<p>x</p>");
}

#[wasm_bindgen_test]
fn preview_rerender_still_leaves_one_child() {
    let doc = set_body(r#"<div class="preview-panel"></div>"#);

    show_preview("<p>first</p>").unwrap();
    show_preview("<p>second</p>").unwrap();

    let panel = doc.query_selector(PREVIEW_PANEL_SELECTOR).unwrap().unwrap();
    assert_eq!(panel.child_element_count(), 1);
    assert_eq!(panel.first_element_child().unwrap().inner_html(), "<p>second</p>");
}

#[wasm_bindgen_test]
fn preview_errors_without_panel() {
    set_body("<div></div>");
    assert!(show_preview("<p>x</p>").is_err());
}

// === Reply-quote tests ===

#[wasm_bindgen_test]
fn reply_quote_on_empty_textarea() {
    let doc = set_body(r##"<a id="reply" data-user="bob" href="#">bob</a><textarea id="box"></textarea>"##);
    let link = doc.get_element_by_id("reply").unwrap();
    let textarea: HtmlTextAreaElement = doc
        .get_element_by_id("box")
        .unwrap()
        .dyn_into()
        .unwrap();

    let _listener = wire_reply_link(link.clone(), textarea.clone());
    click(&link);

    assert_eq!(textarea.value(), "@bob ");
}

#[wasm_bindgen_test]
fn reply_quote_appends_after_existing_content() {
    let doc = set_body(r##"<a id="reply" data-user="bob" href="#">bob</a><textarea id="box"></textarea>"##);
    let link = doc.get_element_by_id("reply").unwrap();
    let textarea: HtmlTextAreaElement = doc
        .get_element_by_id("box")
        .unwrap()
        .dyn_into()
        .unwrap();
    textarea.set_value("hi");

    let _listener = wire_reply_link(link.clone(), textarea.clone());
    click(&link);

    assert_eq!(textarea.value(), "hi\n@bob ");
}

// === Editor wiring tests ===

const EDITOR_FIXTURE: &str = r##"
    <a id="write-tab" data-toggle="tab" aria-controls="write" href="#write">Write</a>
    <a id="preview-tab" data-toggle="tab" aria-controls="preview" href="#preview">Preview</a>
    <div class="md-editor">
        <div id="write"><textarea></textarea></div>
        <div class="preview-panel"></div>
    </div>
    <button id="menu" data-toggle="menu" aria-controls="attach"></button>
"##;

#[wasm_bindgen_test]
fn editor_focus_blur_toggles_active_class() {
    let doc = set_body(EDITOR_FIXTURE);
    let wiring = wire_editor(&doc).unwrap();

    let textarea = doc.query_selector("#write > textarea").unwrap().unwrap();
    let container = doc.query_selector("div.md-editor").unwrap().unwrap();

    dispatch(&textarea, "focus");
    assert_eq!(container.class_name(), "md-editor active");

    dispatch(&textarea, "blur");
    assert_eq!(container.class_name(), "md-editor");

    drop(wiring);
}

#[wasm_bindgen_test]
fn editor_tab_shown_switches_panes() {
    let doc = set_body(EDITOR_FIXTURE);
    let wiring = wire_editor(&doc).unwrap();

    let container = doc.query_selector("div.md-editor").unwrap().unwrap();
    let preview_tab = doc.get_element_by_id("preview-tab").unwrap();
    let write_tab = doc.get_element_by_id("write-tab").unwrap();

    // Entering the preview pane deactivates the editor. (The render POST the
    // transition fires has no CSRF cookie here, so it aborts before sending.)
    dispatch(&preview_tab, "shown.bs.tab");
    assert_eq!(container.class_name(), "md-editor");
    assert_eq!(wiring.state().borrow().pane(), Pane::Preview);

    dispatch(&write_tab, "shown.bs.tab");
    assert_eq!(container.class_name(), "md-editor active");
    assert_eq!(wiring.state().borrow().pane(), Pane::Write);
}

#[wasm_bindgen_test]
fn editor_menu_button_is_a_no_op() {
    let doc = set_body(EDITOR_FIXTURE);
    let wiring = wire_editor(&doc).unwrap();

    let container = doc.query_selector("div.md-editor").unwrap().unwrap();
    let before = container.class_name();

    click(&doc.get_element_by_id("menu").unwrap());

    assert_eq!(container.class_name(), before);
    assert_eq!(wiring.state().borrow().pane(), Pane::Write);
}

#[wasm_bindgen_test]
fn editor_wiring_requires_textarea() {
    let doc = set_body(r#"<div class="md-editor"></div>"#);
    assert!(wire_editor(&doc).is_err());
}
