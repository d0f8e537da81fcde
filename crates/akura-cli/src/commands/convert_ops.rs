use std::io::{self, BufRead};
use std::process;

use unicode_width::UnicodeWidthStr;

use akura_core::singlish::{convert, tokenize};
use akura_session::{apply_edit, EditAction, KeyEvent, StringSurface, TranslitSession};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn convert_cmd(text: &[String]) {
    if text.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = die!(line, "Error reading stdin: {}");
            println!("{}", convert(&line));
        }
    } else {
        println!("{}", convert(&text.join(" ")));
    }
}

/// Replay the input key by key and show the edit each keystroke produces.
pub fn trace_cmd(text: &str, tokens: bool) {
    if tokens {
        for token in tokenize(text) {
            println!("{token:?}");
        }
        println!("output: {}", convert(text));
        return;
    }

    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    println!("{:<5} {:<24} field", "key", "edit");
    for c in text.chars() {
        let resp = session.handle_key(KeyEvent::Char(c));
        apply_edit(&mut surface, &resp.edit);
        println!("{:<5} {} {}", c, pad_label(format_edit(&resp.edit), 24), surface.text());
    }
}

fn format_edit(edit: &EditAction) -> String {
    match edit {
        EditAction::None => "(none)".to_string(),
        EditAction::Insert(text) => format!("+\"{text}\""),
        EditAction::Delete(count) => format!("-{count}"),
        EditAction::Replace(count, text) => format!("-{count} +\"{text}\""),
    }
}

// format! padding counts chars, which misaligns columns holding Sinhala
// clusters; pad by display width instead.
fn pad_label(label: String, pad_width: usize) -> String {
    let display_width = UnicodeWidthStr::width(label.as_str());
    if display_width < pad_width {
        format!("{}{}", label, " ".repeat(pad_width - display_width))
    } else {
        label
    }
}
