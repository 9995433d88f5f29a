//! Watch/like toggle parameters.
//!
//! Both toggles follow the same pattern: read the current flag off the icon,
//! POST it, mirror the server's authoritative answer back into the icon's
//! data attribute and class. The server owns the boolean; the DOM only ever
//! reflects the last reply, never an optimistic guess. This module carries
//! the per-kind names so one routine in the browser layer can serve both.

/// Which boolean preference a toggle anchor drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleKind {
    Watch,
    Like,
}

impl ToggleKind {
    /// Form field the current flag is posted under.
    pub fn field(self) -> &'static str {
        match self {
            ToggleKind::Watch => "watch",
            ToggleKind::Like => "like",
        }
    }

    /// Data attribute on the icon holding the mirrored flag.
    pub fn flag_attr(self) -> &'static str {
        match self {
            ToggleKind::Watch => "data-watch",
            ToggleKind::Like => "data-like",
        }
    }

    /// Element id of the icon anchor on the topic page.
    pub fn icon_id(self) -> &'static str {
        match self {
            ToggleKind::Watch => "watch",
            ToggleKind::Like => "like",
        }
    }
}

/// Class value for a toggle icon given the server-confirmed flag.
pub fn icon_class(active: bool) -> &'static str {
    if active {
        "glade-link active"
    } else {
        "glade-link"
    }
}
