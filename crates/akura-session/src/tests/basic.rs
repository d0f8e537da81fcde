use super::*;

// --- Live typing ---

#[test]
fn test_first_letter_inserts() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    let resp = session.handle_key(KeyEvent::Char('k'));
    assert!(resp.consumed);
    assert_eq!(resp.edit, EditAction::Insert("ක්".to_string()));
    apply_edit(&mut surface, &resp.edit);

    assert!(session.is_composing());
    assert_eq!(session.buffer(), "k");
    assert_eq!(session.emitted_len(), 2);
    assert_eq!(surface.text(), "ක්");
}

#[test]
fn test_second_letter_replaces() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "k");
    let resp = session.handle_key(KeyEvent::Char('a'));
    // The whole rendering is replaced, not appended to
    assert_eq!(resp.edit, EditAction::Replace(2, "ක".to_string()));
    apply_edit(&mut surface, &resp.edit);

    assert_eq!(surface.text(), "ක");
    assert_eq!(session.emitted_len(), 1);
}

#[test]
fn test_word_matches_whole_conversion() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "oyaata");
    assert_eq!(surface.text(), "ඔයාට");
    assert_eq!(session.buffer(), "oyaata");
    assert_eq!(session.emitted_len(), 4);
}

#[test]
fn test_aspiration_upgrade_rewrites_cluster() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "k");
    assert_eq!(surface.text(), "ක්");

    // "kh" reinterprets the k as the aspirated consonant
    type_string(&mut session, &mut surface, "h");
    assert_eq!(surface.text(), "ඛ්");
    type_string(&mut session, &mut surface, "a");
    assert_eq!(surface.text(), "ඛ");
    assert_eq!(session.buffer(), "kha");
}

// --- Backspace ---

#[test]
fn test_backspace_reconverts_shorter_buffer() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "ka");
    let resp = press_backspace(&mut session, &mut surface);
    assert!(resp.consumed);
    assert_eq!(resp.edit, EditAction::Replace(1, "ක්".to_string()));
    assert_eq!(surface.text(), "ක්");
    assert_eq!(session.buffer(), "k");
}

#[test]
fn test_backspace_emptying_buffer_deletes_emitted() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "k");
    let resp = press_backspace(&mut session, &mut surface);
    // "ක්" is two scalar values; both must go
    assert_eq!(resp.edit, EditAction::Delete(2));
    assert!(surface.is_empty());
    assert!(!session.is_composing());
    assert_eq!(session.emitted_len(), 0);
}

#[test]
fn test_backspace_idle_forwards_raw_delete() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();
    surface.insert_text("අ");

    let resp = press_backspace(&mut session, &mut surface);
    assert!(resp.consumed);
    assert_eq!(resp.edit, EditAction::Delete(1));
    assert!(surface.is_empty());
}

#[test]
fn test_word_backspaces_to_empty() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "amma");
    assert_eq!(surface.text(), "අම්ම");

    for _ in 0.."amma".len() {
        press_backspace(&mut session, &mut surface);
    }
    assert!(surface.is_empty());
    assert!(!session.is_composing());
    assert_eq!(session.emitted_len(), 0);
}

// --- Committing keys ---

#[test]
fn test_space_commits_and_inserts() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "ka");
    let resp = session.handle_key(KeyEvent::Char(' '));
    assert!(resp.consumed);
    assert_eq!(resp.edit, EditAction::Insert(" ".to_string()));
    apply_edit(&mut surface, &resp.edit);

    assert!(!session.is_composing());
    assert_eq!(surface.text(), "ක ");

    // Committed text is out of reach of the next word's edits
    type_string(&mut session, &mut surface, "ki");
    assert_eq!(surface.text(), "ක කි");
}

#[test]
fn test_digit_commits() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "k");
    let resp = session.handle_key(KeyEvent::Char('1'));
    apply_edit(&mut surface, &resp.edit);
    assert_eq!(surface.text(), "ක්1");
    assert!(!session.is_composing());
}

#[test]
fn test_non_ascii_char_commits_verbatim() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    let resp = session.handle_key(KeyEvent::Char('é'));
    assert_eq!(resp.edit, EditAction::Insert("é".to_string()));
    apply_edit(&mut surface, &resp.edit);
    assert_eq!(surface.text(), "é");
    assert!(!session.is_composing());
}

// --- Enter and focus ---

#[test]
fn test_enter_flushes_without_consuming() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "ka");
    let resp = session.handle_key(KeyEvent::Enter);
    assert!(!resp.consumed); // host still gets its newline
    assert!(resp.edit.is_none());
    assert!(!session.is_composing());
    assert_eq!(surface.text(), "ක");
}

#[test]
fn test_focus_lost_flushes() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "kohoma");
    let resp = session.handle_key(KeyEvent::FocusLost);
    assert!(!resp.consumed);
    assert!(!session.is_composing());
    assert_eq!(surface.text(), "කොහොම");

    // Typing in the refocused field starts a fresh run
    type_string(&mut session, &mut surface, "dha");
    assert_eq!(surface.text(), "කොහොමද");
}

// --- Toggle ---

#[test]
fn test_toggle_switches_to_passthrough() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "ka");
    let resp = session.handle_key(KeyEvent::ToggleTranslit);
    assert!(resp.consumed);
    assert!(!session.translit_enabled());
    assert!(!session.is_composing());

    type_string(&mut session, &mut surface, "ok");
    assert_eq!(surface.text(), "කok");

    session.handle_key(KeyEvent::ToggleTranslit);
    assert!(session.translit_enabled());
    type_string(&mut session, &mut surface, "ka");
    assert_eq!(surface.text(), "කokක");
}

#[test]
fn test_set_enabled_same_value_keeps_buffer() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "ka");
    session.set_translit_enabled(true);
    assert!(session.is_composing());
    assert_eq!(session.buffer(), "ka");
}

// --- Buffer cap ---

#[test]
fn test_buffer_cap_flushes_then_continues() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    let cap = akura_core::settings::settings().session.max_buffer_len;
    type_string(&mut session, &mut surface, &"a".repeat(cap));
    assert_eq!(session.buffer().len(), cap);

    // One more letter flushes the full run and starts over
    let resp = session.handle_key(KeyEvent::Char('a'));
    assert_eq!(resp.edit, EditAction::Insert("අ".to_string()));
    apply_edit(&mut surface, &resp.edit);
    assert_eq!(session.buffer(), "a");
    assert_eq!(surface.text(), format!("{}අ", "ආ".repeat(cap / 2)));

    // Backspace only reaches the new run; the flushed text is committed
    press_backspace(&mut session, &mut surface);
    assert_eq!(surface.text(), "ආ".repeat(cap / 2));
    let resp = press_backspace(&mut session, &mut surface);
    assert_eq!(resp.edit, EditAction::Delete(1));
    assert_eq!(surface.text(), "ආ".repeat(cap / 2 - 1));
}

// --- Ligatures in live typing ---

#[test]
fn test_yansaya_forms_and_extends() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "ky");
    assert_eq!(surface.text(), "ක්\u{200D}ය");

    type_string(&mut session, &mut surface, "a");
    assert_eq!(surface.text(), "ක්\u{200D}යඅ");
}

#[test]
fn test_rakaransaya_takes_vowel() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    type_string(&mut session, &mut surface, "kra");
    assert_eq!(surface.text(), "ක්\u{200D}ර");

    type_string(&mut session, &mut surface, "ma");
    assert_eq!(surface.text(), "ක්\u{200D}රම");
}
