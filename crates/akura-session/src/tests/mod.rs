mod basic;

use super::surface::{apply_edit, StringSurface, TextSurface};
use super::types::{EditAction, KeyEvent, KeyResponse};
use super::TranslitSession;

// Helper: type a string one key at a time, applying every edit to the
// surface like a host would
pub(super) fn type_string(
    session: &mut TranslitSession,
    surface: &mut StringSurface,
    s: &str,
) -> Vec<KeyResponse> {
    let mut responses = Vec::new();
    for ch in s.chars() {
        let resp = session.handle_key(KeyEvent::Char(ch));
        apply_edit(surface, &resp.edit);
        responses.push(resp);
    }
    responses
}

pub(super) fn press_backspace(
    session: &mut TranslitSession,
    surface: &mut StringSurface,
) -> KeyResponse {
    let resp = session.handle_key(KeyEvent::Backspace);
    apply_edit(surface, &resp.edit);
    resp
}
