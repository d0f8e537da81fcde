use tracing::debug_span;

use crate::unicode::{ends_with_al_lakuna, is_latin_vowel, AL_LAKUNA, RAKARANSAYA, YANSAYA};

use super::table::{ConsonantMatch, GlyphTable, SPECIAL_MAX_LEN, SPECIAL_MIN_LEN};

/// One recognized unit of Singlish input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Consonant rendered with the al-lakuna after it.
    ConsonantWithMarker(&'static str),
    /// Consonant whose spelling already carries its vowel sound.
    ConsonantBare(&'static str),
    /// Dependent vowel sign; replaces a trailing al-lakuna.
    VowelAttach(&'static str),
    /// Independent vowel letter.
    StandaloneVowel(&'static str),
    /// Sign appended after a syllable as-is.
    BareMarker(&'static str),
    /// Conjunct cluster that replaces a trailing al-lakuna.
    Ligature(LigatureKind),
    /// Input character with no table entry, passed through.
    Verbatim(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LigatureKind {
    Yansaya,
    Rakaransaya,
}

impl LigatureKind {
    fn cluster(self) -> &'static str {
        match self {
            LigatureKind::Yansaya => YANSAYA,
            LigatureKind::Rakaransaya => RAKARANSAYA,
        }
    }
}

/// Convert a whole Singlish buffer to Sinhala text.
///
/// Total and deterministic: every input produces a value, and unmapped
/// characters pass through unchanged.
pub fn convert(input: &str) -> String {
    let _span = debug_span!("convert", len = input.len()).entered();
    render(&tokenize(input))
}

/// Split Singlish input into tagged tokens, longest spelling first.
///
/// Two state flags steer the probes: whether the previous token was a
/// consonant (vowels attach instead of standing alone), and whether the
/// output currently ends with the al-lakuna (ligatures may replace it).
pub fn tokenize(input: &str) -> Vec<Token> {
    let table = GlyphTable::global();
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut pos = 0;
    let mut last_was_consonant = false;
    let mut pending_marker = false;

    while pos < chars.len() {
        let remaining = chars.len() - pos;
        let mut matched = false;

        // Irregular spellings, longest first.
        let max_special = remaining.min(SPECIAL_MAX_LEN);
        if max_special >= SPECIAL_MIN_LEN {
            for len in (SPECIAL_MIN_LEN..=max_special).rev() {
                let sub: String = chars[pos..pos + len].iter().collect();
                if let Some(m) = table.special(&sub) {
                    pending_marker = push_consonant(&mut tokens, m);
                    last_was_consonant = true;
                    pos += len;
                    matched = true;
                    break;
                }
            }
        }
        if matched {
            continue;
        }

        // Triple then double tier: consonant, else a vowel in the form the
        // context allows.
        for len in [3usize, 2] {
            if remaining < len {
                continue;
            }
            let sub: String = chars[pos..pos + len].iter().collect();
            if let Some(m) = table.consonant(&sub) {
                pending_marker = push_consonant(&mut tokens, m);
                last_was_consonant = true;
                pos += len;
                matched = true;
                break;
            }
            if last_was_consonant {
                if let Some(sign) = table.vowel_modifier(&sub) {
                    tokens.push(Token::VowelAttach(sign));
                    last_was_consonant = false;
                    pending_marker = false;
                    pos += len;
                    matched = true;
                    break;
                }
            } else if let Some(glyph) = table.standalone_vowel(&sub) {
                tokens.push(Token::StandaloneVowel(glyph));
                pos += len;
                matched = true;
                break;
            }
        }
        if matched {
            continue;
        }

        // Single characters.
        let c = chars[pos];
        let sub = c.to_string();
        pos += 1;

        if let Some(glyph) = table.bare_marker(&sub) {
            tokens.push(Token::BareMarker(glyph));
            last_was_consonant = false;
            pending_marker = false;
            continue;
        }

        // Ligatures preempt the plain consonant when a marked consonant
        // precedes. Rakaransaya also needs a vowel letter coming up;
        // a trailing "r" stays an ordinary consonant.
        if last_was_consonant && pending_marker {
            if matches!(c, 'y' | 'Y') {
                tokens.push(Token::Ligature(LigatureKind::Yansaya));
                last_was_consonant = false;
                pending_marker = false;
                continue;
            }
            if matches!(c, 'r' | 'R') && chars.get(pos).copied().is_some_and(is_latin_vowel) {
                tokens.push(Token::Ligature(LigatureKind::Rakaransaya));
                // The cluster keeps the syllable open for its vowel sign.
                pending_marker = false;
                continue;
            }
        }

        if let Some(m) = table.consonant(&sub) {
            pending_marker = push_consonant(&mut tokens, m);
            last_was_consonant = true;
            continue;
        }
        if last_was_consonant {
            if let Some(sign) = table.vowel_modifier(&sub) {
                tokens.push(Token::VowelAttach(sign));
                last_was_consonant = false;
                pending_marker = false;
                continue;
            }
        } else if let Some(glyph) = table.standalone_vowel(&sub) {
            tokens.push(Token::StandaloneVowel(glyph));
            continue;
        }

        tokens.push(Token::Verbatim(c));
        last_was_consonant = false;
        pending_marker = false;
    }

    tokens
}

fn push_consonant(tokens: &mut Vec<Token>, m: ConsonantMatch) -> bool {
    if m.suppresses_inherent_vowel {
        tokens.push(Token::ConsonantWithMarker(m.glyph));
        true
    } else {
        tokens.push(Token::ConsonantBare(m.glyph));
        false
    }
}

/// Fold a token stream into Sinhala text.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::ConsonantWithMarker(glyph) => {
                out.push_str(glyph);
                out.push(AL_LAKUNA);
            }
            Token::ConsonantBare(glyph)
            | Token::StandaloneVowel(glyph)
            | Token::BareMarker(glyph) => out.push_str(glyph),
            Token::VowelAttach(sign) => {
                if ends_with_al_lakuna(&out) {
                    out.pop();
                }
                out.push_str(sign);
            }
            Token::Ligature(kind) => {
                if ends_with_al_lakuna(&out) {
                    out.pop();
                }
                out.push_str(kind.cluster());
            }
            Token::Verbatim(c) => out.push(*c),
        }
    }
    out
}
