/// Key events the session understands. Hosts map their native key and
/// focus events onto these; keys with editor semantics of their own
/// (arrows, shortcuts) stay host business and at most trigger a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A printable character.
    Char(char),
    Backspace,
    Enter,
    /// The field lost focus or the host switched fields.
    FocusLost,
    /// Toggle between transliteration and passthrough typing.
    ToggleTranslit,
}

/// Text mutation the host must apply: delete before the cursor, then
/// insert at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    None,
    Insert(String),
    /// Delete this many units before the cursor.
    Delete(usize),
    /// Delete, then insert, as one edit.
    Replace(usize, String),
}

impl EditAction {
    /// Normalizing constructor: drops empty halves.
    pub fn replace(delete: usize, insert: String) -> Self {
        match (delete, insert.is_empty()) {
            (0, true) => EditAction::None,
            (0, false) => EditAction::Insert(insert),
            (_, true) => EditAction::Delete(delete),
            (_, false) => EditAction::Replace(delete, insert),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, EditAction::None)
    }
}

/// Response from `handle_key`, returned to the embedding host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// Whether the session handled the event. Unconsumed events should
    /// also get the host's default behavior after the edit is applied.
    pub consumed: bool,
    pub edit: EditAction,
}

impl KeyResponse {
    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            edit: EditAction::None,
        }
    }

    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            edit: EditAction::None,
        }
    }

    pub(crate) fn with_edit(mut self, edit: EditAction) -> Self {
        self.edit = edit;
        self
    }
}
