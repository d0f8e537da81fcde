//! Character-level constants and classification for Sinhala text.

/// U+0DCA SINHALA SIGN AL-LAKUNA: the mark that suppresses a consonant's
/// inherent vowel. Plain consonants are rendered with it until a vowel
/// sign replaces it.
pub const AL_LAKUNA: char = '\u{0DCA}';

/// U+200D ZERO WIDTH JOINER, the glue inside conjunct clusters.
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// The yansaya cluster (al-lakuna + ZWJ + yayanna ය), the joined "ya"
/// that replaces a trailing al-lakuna.
pub const YANSAYA: &str = "\u{0DCA}\u{200D}\u{0DBA}";

/// The rakaransaya cluster (al-lakuna + ZWJ + rayanna ර), the joined "ra"
/// that replaces a trailing al-lakuna.
pub const RAKARANSAYA: &str = "\u{0DCA}\u{200D}\u{0DBB}";

/// Check the full Sinhala block (U+0D80..U+0DFF). The block has unassigned
/// codepoints, but transliteration output only ever contains assigned ones,
/// so the block-level check is preferred over an exact enumeration.
pub fn is_sinhala(c: char) -> bool {
    ('\u{0D80}'..='\u{0DFF}').contains(&c)
}

/// Latin vowel letters, either case. This is the lookahead class that
/// decides whether an `r` after a marked consonant forms rakaransaya.
pub fn is_latin_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U'
    )
}

pub fn ends_with_al_lakuna(s: &str) -> bool {
    s.ends_with(AL_LAKUNA)
}
