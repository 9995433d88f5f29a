//! Browser DOM layer for the Glade topic-page scripts.
//!
//! Wires the topic page's controls to the forum's action endpoints: the
//! watch/like toggle anchors, the reply-quote links and the write/preview
//! tabbed markdown editor. Each handler reads minimal context from the
//! triggering element, issues at most one POST and mutates at most one DOM
//! region, always mirroring the server's reply rather than guessing ahead
//! of it. Failures are logged and leave the page untouched.
//!
//! This crate assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `csrf`: CSRF token lookup in the browser cookie store
//! - `fetch`: form-encoded POSTs and envelope decoding
//! - `toggle`: watch/like anchors and their icon view state
//! - `preview`: server-side markdown preview pane
//! - `editor`: tabbed-editor event wiring
//! - `quote`: reply-quote mention links
//! - `page`: whole-page bootstrap
//!
//! # Re-exports
//!
//! This crate re-exports `glade-page-core` for convenience, so consumers
//! only need to depend on `glade-page-browser`.

// Re-export core crate
pub use glade_page_core;
pub use glade_page_core::*;

pub mod csrf;
pub mod editor;
pub mod error;
pub mod fetch;
pub mod page;
pub mod preview;
pub mod quote;
pub mod toggle;

pub use error::PageError;
pub use page::{TopicPage, boot, wire_topic_page};
