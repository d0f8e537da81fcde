//! Host text-surface contract and a reference in-memory implementation.

use super::types::EditAction;

/// Editing operations an input field must provide. Counts and offsets are
/// in Unicode scalar values; hosts with UTF-16 fields convert here.
pub trait TextSurface {
    /// Delete up to `count` units before the cursor.
    fn delete_before_cursor(&mut self, count: usize);
    /// Insert text at the cursor.
    fn insert_text(&mut self, text: &str);
    /// Move the cursor by a signed unit offset, clamped to the field.
    fn move_cursor(&mut self, delta: i32);
    /// Empty the whole field.
    fn clear_all(&mut self);
}

/// Apply one edit to a surface.
pub fn apply_edit<S: TextSurface + ?Sized>(surface: &mut S, edit: &EditAction) {
    match edit {
        EditAction::None => {}
        EditAction::Insert(text) => surface.insert_text(text),
        EditAction::Delete(count) => surface.delete_before_cursor(*count),
        EditAction::Replace(count, text) => {
            surface.delete_before_cursor(*count);
            surface.insert_text(text);
        }
    }
}

/// In-memory field: text plus a cursor. Used by the tests and the
/// simulator, and a starting point for simple hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSurface {
    chars: Vec<char>,
    cursor: usize,
}

impl StringSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl TextSurface for StringSurface {
    fn delete_before_cursor(&mut self, count: usize) {
        let n = count.min(self.cursor);
        self.chars.drain(self.cursor - n..self.cursor);
        self.cursor -= n;
    }

    fn insert_text(&mut self, text: &str) {
        for c in text.chars() {
            self.chars.insert(self.cursor, c);
            self.cursor += 1;
        }
    }

    fn move_cursor(&mut self, delta: i32) {
        let pos = self.cursor as i64 + i64::from(delta);
        self.cursor = pos.clamp(0, self.chars.len() as i64) as usize;
    }

    fn clear_all(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }
}
