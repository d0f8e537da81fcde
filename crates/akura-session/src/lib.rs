//! Stateful transliteration session for live Singlish typing.
//!
//! `TranslitSession` owns the Latin buffer and a count of the output it has
//! already emitted, and processes each key event into a pure-data response
//! that the embedding host applies to its text field. Hosts never see the
//! conversion pipeline directly; they only delete and insert what the
//! responses tell them to.

mod commands;
mod composing;
mod key_handlers;
mod repeat;
mod surface;
mod types;

#[cfg(test)]
mod tests;

use akura_core::settings;

pub use commands::{dispatch, Command};
pub use repeat::RepeatScheduler;
pub use surface::{apply_edit, StringSurface, TextSurface};
pub use types::{EditAction, KeyEvent, KeyResponse};

/// Stateful session encapsulating the live-typing buffer protocol.
///
/// One session per input field. All output accounting is in Unicode scalar
/// values; hosts with UTF-16 fields convert at the [`TextSurface`] boundary.
pub struct TranslitSession {
    /// Latin letters typed since the last flush.
    buffer: String,
    /// Output units currently in the host field for this buffer.
    emitted: usize,
    /// When false, letters pass through verbatim like any other key.
    translit_enabled: bool,
    max_buffer_len: usize,
}

impl TranslitSession {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            emitted: 0,
            translit_enabled: true,
            max_buffer_len: settings::settings().session.max_buffer_len,
        }
    }

    pub fn translit_enabled(&self) -> bool {
        self.translit_enabled
    }

    /// Enable or disable transliteration. Any change flushes the buffer.
    pub fn set_translit_enabled(&mut self, enabled: bool) {
        if enabled != self.translit_enabled {
            self.flush();
            self.translit_enabled = enabled;
        }
    }

    pub fn is_composing(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// The live Latin buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Output units the session believes are in the host field.
    pub fn emitted_len(&self) -> usize {
        self.emitted
    }
}

impl Default for TranslitSession {
    fn default() -> Self {
        Self::new()
    }
}
