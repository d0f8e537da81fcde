use tracing::debug;

use akura_core::singlish::convert;

use super::types::{EditAction, KeyResponse};
use super::TranslitSession;

impl TranslitSession {
    /// Append one Latin letter and re-render the whole buffer.
    pub(super) fn push_letter(&mut self, c: char) -> KeyResponse {
        if self.buffer.chars().count() >= self.max_buffer_len {
            // Rendered text stays in the field; this letter starts a
            // fresh run.
            self.flush();
        }
        self.buffer.push(c);
        self.replace_with_conversion()
    }

    /// Remove the most recent input unit.
    pub(super) fn pop_letter(&mut self) -> KeyResponse {
        if self.buffer.pop().is_none() {
            // Nothing composed here: forward one raw deletion, e.g. for
            // text that predates the session.
            return KeyResponse::consumed().with_edit(EditAction::Delete(1));
        }
        if self.buffer.is_empty() {
            let emitted = std::mem::take(&mut self.emitted);
            return KeyResponse::consumed().with_edit(EditAction::replace(emitted, String::new()));
        }
        self.replace_with_conversion()
    }

    /// Abandon the buffer without touching host text. Whatever was last
    /// rendered stays in the field as ordinary committed text.
    pub fn flush(&mut self) -> KeyResponse {
        self.buffer.clear();
        self.emitted = 0;
        KeyResponse::consumed()
    }

    fn replace_with_conversion(&mut self) -> KeyResponse {
        let output = convert(&self.buffer);
        let delete = self.emitted;
        self.emitted = output.chars().count();
        debug!(buffer = %self.buffer, %output, delete, "reconvert");
        KeyResponse::consumed().with_edit(EditAction::replace(delete, output))
    }
}
