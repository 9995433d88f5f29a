//! Shared logic for the Glade topic-page scripts.
//!
//! Everything in this crate is framework-agnostic: cookie parsing, the wire
//! types the forum endpoints speak, the watch/like toggle mapping, the
//! write/preview pane state machine and the reply-mention text rule. The DOM
//! side lives in `glade-page-browser`, which drives these pieces from real
//! browser events.
//!
//! No browser APIs are used here, so the whole crate tests natively.

pub mod api;
pub mod cookie;
pub mod editor;
pub mod quote;
pub mod toggle;

pub use api::{CSRF_COOKIE, CSRF_FIELD, Envelope, Liked, RENDER_ENDPOINT, Rendered, Status, Watching};
pub use cookie::cookie_value;
pub use editor::{EditorState, Pane, PaneEffects, PaneEvent, editor_class};
pub use quote::append_mention;
pub use toggle::{ToggleKind, icon_class};
