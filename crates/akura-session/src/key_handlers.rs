use tracing::debug_span;

use super::types::{EditAction, KeyEvent, KeyResponse};
use super::TranslitSession;

impl TranslitSession {
    /// Route one key event through the composing state machine.
    ///
    /// The caller applies the returned [`EditAction`](super::EditAction)
    /// to its text field. A response with `consumed == false` means the
    /// host should also process the event itself (Enter keeps its
    /// newline, focus changes proceed as usual).
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();
        match event {
            KeyEvent::Char(c) if self.accepts(c) => self.push_letter(c),
            KeyEvent::Char(c) => {
                self.flush();
                KeyResponse::consumed().with_edit(EditAction::Insert(c.to_string()))
            }
            KeyEvent::Backspace => self.pop_letter(),
            KeyEvent::Enter | KeyEvent::FocusLost => {
                self.flush();
                KeyResponse::not_consumed()
            }
            KeyEvent::ToggleTranslit => {
                self.set_translit_enabled(!self.translit_enabled());
                KeyResponse::consumed()
            }
        }
    }

    /// Only ASCII letters feed the composing buffer, and only while
    /// transliteration is on. Everything else commits verbatim.
    fn accepts(&self, c: char) -> bool {
        self.translit_enabled() && c.is_ascii_alphabetic()
    }
}
