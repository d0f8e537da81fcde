use tracing::debug_span;

use super::surface::{apply_edit, TextSurface};
use super::types::KeyEvent;
use super::TranslitSession;

/// Editing commands arriving from outside the key path, e.g. a companion
/// app driving the field remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type a string as if entered key by key.
    TypeText(String),
    /// Press backspace this many times.
    Backspace { count: u32 },
    CursorLeft,
    CursorRight,
    /// Wipe the field and the session state.
    ClearAll,
}

/// Run one command against a session and its surface, applying every
/// resulting edit.
pub fn dispatch<S: TextSurface + ?Sized>(
    session: &mut TranslitSession,
    surface: &mut S,
    command: Command,
) {
    let _span = debug_span!("dispatch", ?command).entered();
    match command {
        Command::TypeText(text) => {
            if session.translit_enabled() {
                for c in text.chars() {
                    let response = session.handle_key(KeyEvent::Char(c));
                    apply_edit(surface, &response.edit);
                }
            } else {
                session.flush();
                surface.insert_text(&text);
            }
        }
        Command::Backspace { count } => {
            for _ in 0..count {
                let response = session.handle_key(KeyEvent::Backspace);
                apply_edit(surface, &response.edit);
            }
        }
        Command::CursorLeft => {
            session.flush();
            surface.move_cursor(-1);
        }
        Command::CursorRight => {
            session.flush();
            surface.move_cursor(1);
        }
        Command::ClearAll => {
            session.flush();
            surface.clear_all();
        }
    }
}
