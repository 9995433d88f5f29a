//! Write/preview pane state machine for the tabbed markdown editor.
//!
//! The editor has exactly two panes. Entering the preview pane always
//! re-renders the full current text; nothing caches a previous render.
//! Focus and blur of the write textarea drive the container's "active"
//! styling independently of the pane.

/// Which pane of the tabbed editor is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Write,
    Preview,
}

/// A DOM event relevant to the editor, stripped to what the machine needs.
#[derive(Debug, PartialEq, Eq)]
pub enum PaneEvent<'a> {
    /// The write textarea gained focus.
    Focus,
    /// The write textarea lost focus.
    Blur,
    /// A tab finished showing; `target` is the tab's `aria-controls` name.
    TabShown { target: &'a str },
    /// A toolbar menu control was activated. Kept as an explicit no-op
    /// extension point; the action name is observed but nothing reacts yet.
    MenuAction { action: &'a str },
}

/// What the browser layer must do after an event.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PaneEffects {
    /// Set the editor container's "active" styling to this value.
    pub editor_active: Option<bool>,
    /// Submit the textarea's full current text for a fresh render.
    pub render_preview: bool,
}

/// Per-editor state. Starts in the write pane.
#[derive(Debug)]
pub struct EditorState {
    pane: Pane,
}

impl EditorState {
    pub fn new() -> Self {
        Self { pane: Pane::Write }
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    /// Apply one event, returning the effects to perform.
    pub fn handle(&mut self, event: PaneEvent<'_>) -> PaneEffects {
        tracing::debug!(?event, pane = ?self.pane, "editor event");
        match event {
            PaneEvent::Focus => PaneEffects {
                editor_active: Some(true),
                render_preview: false,
            },
            PaneEvent::Blur => PaneEffects {
                editor_active: Some(false),
                render_preview: false,
            },
            PaneEvent::TabShown { target: "write" } => {
                self.pane = Pane::Write;
                PaneEffects {
                    editor_active: Some(true),
                    render_preview: false,
                }
            }
            PaneEvent::TabShown { .. } => {
                self.pane = Pane::Preview;
                PaneEffects {
                    editor_active: Some(false),
                    render_preview: true,
                }
            }
            PaneEvent::MenuAction { .. } => PaneEffects::default(),
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Class value for the editor container given its active state.
pub fn editor_class(active: bool) -> &'static str {
    if active {
        "md-editor active"
    } else {
        "md-editor"
    }
}
