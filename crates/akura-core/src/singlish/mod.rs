//! Singlish-to-Sinhala transliteration engine.
//!
//! A greedy longest-match tokenizer turns romanized keystrokes into tagged
//! tokens (consonants, vowel signs, ligature clusters), and a render fold
//! assembles the tokens into Sinhala text with correct al-lakuna handling.

mod convert;
mod table;

pub use convert::{convert, render, tokenize, LigatureKind, Token};
pub use table::{Category, ConsonantMatch, Entry, GlyphTable, Tier};
