//! Keyboard shortcuts for designer state.

use super::DesignerState;

/// Keys the designer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Delete,
    Escape,
}

/// Modifier keys held with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    /// Cmd on macOS
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn ctrl_shift() -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::NONE
        }
    }

    /// Ctrl or Cmd.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// What a shortcut did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Undo,
    Redo,
    DeleteSelection,
    ClearSelection,
    /// Nothing was selected; the host should close the designer page.
    RequestClose,
}

impl KeyAction {
    /// Map a key press to an action, ignoring current state.
    pub fn for_key(key: Key, modifiers: KeyModifiers) -> Option<Self> {
        match key {
            Key::Char(c) if modifiers.command() && !modifiers.alt => {
                match (c.to_ascii_lowercase(), modifiers.shift) {
                    ('z', false) => Some(Self::Undo),
                    ('z', true) | ('y', false) => Some(Self::Redo),
                    _ => None,
                }
            }
            Key::Delete if !modifiers.command() => Some(Self::DeleteSelection),
            Key::Escape => Some(Self::ClearSelection),
            _ => None,
        }
    }
}

impl DesignerState {
    /// Handle a key press and return the action taken, if any.
    ///
    /// Escape clears the selection, or requests closing the page when
    /// nothing is selected. Shortcuts are ignored during a pointer gesture.
    pub fn handle_key(&mut self, key: Key, modifiers: KeyModifiers) -> Option<KeyAction> {
        if self.is_dragging() {
            return None;
        }
        let action = match KeyAction::for_key(key, modifiers)? {
            KeyAction::Undo => self.undo().then_some(KeyAction::Undo),
            KeyAction::Redo => self.redo().then_some(KeyAction::Redo),
            KeyAction::DeleteSelection => self
                .delete_selected()
                .then_some(KeyAction::DeleteSelection),
            KeyAction::ClearSelection | KeyAction::RequestClose => {
                if self.selected.take().is_some() {
                    Some(KeyAction::ClearSelection)
                } else {
                    self.close_requested = true;
                    Some(KeyAction::RequestClose)
                }
            }
        };
        if let Some(action) = action {
            tracing::debug!(?action, "shortcut");
        }
        action
    }
}
