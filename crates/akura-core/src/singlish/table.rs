//! Transliteration records: Latin spellings to Sinhala output.
//!
//! All rules live in one ordered record list, grouped by probe tier and
//! category, indexed into hash maps on first use. Patterns are
//! case-sensitive throughout ("t" is ට while "T" is ඨ, "h" is හ while
//! "H" is the visargaya ඃ).

use std::collections::HashMap;
use std::sync::OnceLock;

/// Pattern length class. The engine probes longer tiers first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Irregular spellings of 3 to 5 letters, probed longest-first.
    Special,
    /// Exactly three letters.
    Triple,
    /// Exactly two letters.
    Double,
    /// One letter.
    Single,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Special => "special",
            Tier::Triple => "triple",
            Tier::Double => "double",
            Tier::Single => "single",
        }
    }
}

/// What a matched pattern contributes to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A consonant letter; may need the al-lakuna after it.
    Consonant,
    /// An independent vowel letter, valid at the start of a syllable run.
    StandaloneVowel,
    /// A dependent vowel sign that attaches to the preceding consonant.
    VowelModifier,
    /// A sign that follows a syllable as-is (anusvaraya, visargaya).
    BareMarker,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Consonant => "consonant",
            Category::StandaloneVowel => "standalone-vowel",
            Category::VowelModifier => "vowel-modifier",
            Category::BareMarker => "bare-marker",
        }
    }
}

/// One transliteration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub pattern: &'static str,
    pub tier: Tier,
    pub category: Category,
    pub glyph: &'static str,
}

/// A consonant hit with its derived rendering flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsonantMatch {
    pub glyph: &'static str,
    /// True when the spelling does not already carry the default "a"
    /// sound, so the glyph takes an explicit al-lakuna after it.
    pub suppresses_inherent_vowel: bool,
}

/// Shortest and longest spellings the special tier is probed at.
pub const SPECIAL_MIN_LEN: usize = 3;
pub const SPECIAL_MAX_LEN: usize = 5;

/// Spellings that skip the marker even though they do not end in `a`:
/// their glyphs already carry a vowel sign or stand complete as written.
const SELF_VOWELED: &[&str] = &["Lu", "zn", "zb"];

pub(crate) fn suppresses_inherent_vowel(pattern: &str) -> bool {
    !pattern.ends_with('a') && !SELF_VOWELED.contains(&pattern)
}

const SPECIAL_CONSONANTS: &[(&str, &str)] = &[
    ("zdha", "ඳ"),
    ("zja", "ඦ"),
    ("zda", "ඬ"),
    ("zga", "ඟ"),
    ("zdh", "ඳ"),
    ("zqa", "ඳ"),
    ("zka", "ඤ"),
    ("zha", "ඥ"),
    ("ksha", "ක්ෂ"),
    ("ksh", "ක්ෂ"),
    ("thth", "ත්ථ"),
    ("nDh", "ඳ"),
    ("ngh", "ඟ"),
];

const TRIPLE_CONSONANTS: &[(&str, &str)] = &[
    ("Sha", "ෂ"),
    ("Cha", "ඡ"),
    ("Tha", "ථ"),
    ("Dha", "ධ"),
    ("kha", "ඛ"),
    ("gha", "ඝ"),
    ("pha", "ඵ"),
    ("bha", "භ"),
    ("sha", "ශ"),
    ("ruu", "ඎ"),
];

const DOUBLE_CONSONANTS: &[(&str, &str)] = &[
    ("kh", "ඛ"),
    ("gh", "ඝ"),
    ("ch", "ච"),
    ("Ch", "ඡ"),
    ("jh", "ඣ"),
    ("Ja", "ඣ"),
    ("th", "ත"),
    ("Th", "ථ"),
    ("dh", "ද"),
    ("Dh", "ධ"),
    ("ph", "ඵ"),
    ("bh", "භ"),
    ("sh", "ශ"),
    ("Sh", "ෂ"),
    ("Ta", "ඨ"),
    ("Da", "ඪ"),
    ("Na", "ණ"),
    ("La", "ළ"),
    ("Lu", "ළු"),
    ("Ba", "ඹ"),
    ("zb", "ඹ"),
    ("zn", "ං"),
];

const SINGLE_CONSONANTS: &[(&str, &str)] = &[
    ("k", "ක"),
    ("K", "ඛ"),
    ("g", "ග"),
    ("G", "ඝ"),
    ("c", "ච"),
    ("C", "ඡ"),
    ("j", "ජ"),
    ("J", "ඣ"),
    ("t", "ට"),
    ("T", "ඨ"),
    ("d", "ඩ"),
    ("D", "ඪ"),
    ("n", "න"),
    ("N", "ණ"),
    ("p", "ප"),
    ("P", "ඵ"),
    ("b", "බ"),
    ("B", "භ"),
    ("m", "ම"),
    ("M", "ම"),
    ("y", "ය"),
    ("Y", "ය"),
    ("r", "ර"),
    ("R", "ර"),
    ("l", "ල"),
    ("L", "ළ"),
    ("w", "ව"),
    ("W", "ව"),
    ("v", "ව"),
    ("V", "ව"),
    ("s", "ස"),
    ("S", "ෂ"),
    ("h", "හ"),
    ("f", "ෆ"),
    ("F", "ෆ"),
    ("z", "ඤ"),
    ("Z", "ඥ"),
    ("q", "ක"),
    ("Q", "ඛ"),
];

const BARE_MARKERS: &[(&str, &str)] = &[
    ("x", "ං"),
    ("X", "ඞ"),
    ("H", "ඃ"),
];

// Standalone vowels and modifiers share their spellings; which one fires
// depends on whether a consonant precedes. The tier follows the length.
const STANDALONE_VOWELS: &[(&str, &str)] = &[
    ("ruu", "ඎ"),
    ("aa", "ආ"),
    ("Aa", "ඈ"),
    ("AA", "ඈ"),
    ("ae", "ඇ"),
    ("Ae", "ඈ"),
    ("ii", "ඊ"),
    ("II", "ඊ"),
    ("uu", "ඌ"),
    ("UU", "ඌ"),
    ("ee", "ඒ"),
    ("ei", "ඒ"),
    ("oo", "ඕ"),
    ("oe", "ඕ"),
    ("au", "ඖ"),
    ("Au", "ඖ"),
    ("ai", "ඓ"),
    ("Ai", "ඓ"),
    ("ru", "ඍ"),
    ("Ru", "ඍ"),
    ("a", "අ"),
    ("A", "ඇ"),
    ("i", "ඉ"),
    ("I", "ඊ"),
    ("u", "උ"),
    ("U", "ඌ"),
    ("e", "එ"),
    ("E", "ඓ"),
    ("o", "ඔ"),
    ("O", "ඕ"),
];

// The sign for "a" is empty: the inherent vowel is written by removing
// the al-lakuna alone.
const VOWEL_MODIFIERS: &[(&str, &str)] = &[
    ("ruu", "ෲ"),
    ("aa", "ා"),
    ("Aa", "ෑ"),
    ("AA", "ෑ"),
    ("ae", "ැ"),
    ("Ae", "ෑ"),
    ("ii", "ී"),
    ("II", "ී"),
    ("uu", "ූ"),
    ("UU", "ූ"),
    ("ee", "ේ"),
    ("ei", "ේ"),
    ("oo", "ෝ"),
    ("oe", "ෝ"),
    ("au", "ෞ"),
    ("Au", "ෞ"),
    ("ai", "ෛ"),
    ("Ai", "ෛ"),
    ("ru", "ෘ"),
    ("Ru", "ෘ"),
    ("a", ""),
    ("A", "ැ"),
    ("i", "ි"),
    ("I", "ී"),
    ("u", "ු"),
    ("U", "ූ"),
    ("e", "ෙ"),
    ("E", "ෛ"),
    ("o", "ො"),
    ("O", "ෝ"),
];

/// Indexed view over the record list.
pub struct GlyphTable {
    records: Vec<Entry>,
    special: HashMap<&'static str, usize>,
    consonants: HashMap<&'static str, usize>,
    standalone_vowels: HashMap<&'static str, usize>,
    vowel_modifiers: HashMap<&'static str, usize>,
    bare_markers: HashMap<&'static str, usize>,
}

impl GlyphTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static GlyphTable {
        static INSTANCE: OnceLock<GlyphTable> = OnceLock::new();
        INSTANCE.get_or_init(GlyphTable::build)
    }

    fn build() -> GlyphTable {
        let mut records = Vec::new();
        let mut push = |group: &'static [(&'static str, &'static str)],
                        tier: Option<Tier>,
                        category: Category| {
            for &(pattern, glyph) in group {
                records.push(Entry {
                    pattern,
                    // Vowel groups span all lengths; their tier follows it.
                    tier: tier.unwrap_or_else(|| vowel_tier(pattern)),
                    category,
                    glyph,
                });
            }
        };

        push(SPECIAL_CONSONANTS, Some(Tier::Special), Category::Consonant);
        push(TRIPLE_CONSONANTS, Some(Tier::Triple), Category::Consonant);
        push(DOUBLE_CONSONANTS, Some(Tier::Double), Category::Consonant);
        push(SINGLE_CONSONANTS, Some(Tier::Single), Category::Consonant);
        push(STANDALONE_VOWELS, None, Category::StandaloneVowel);
        push(VOWEL_MODIFIERS, None, Category::VowelModifier);
        push(BARE_MARKERS, Some(Tier::Single), Category::BareMarker);

        let mut special = HashMap::new();
        let mut consonants = HashMap::new();
        let mut standalone_vowels = HashMap::new();
        let mut vowel_modifiers = HashMap::new();
        let mut bare_markers = HashMap::new();
        for (i, e) in records.iter().enumerate() {
            let index = match (e.category, e.tier) {
                (Category::Consonant, Tier::Special) => &mut special,
                (Category::Consonant, _) => &mut consonants,
                (Category::StandaloneVowel, _) => &mut standalone_vowels,
                (Category::VowelModifier, _) => &mut vowel_modifiers,
                (Category::BareMarker, _) => &mut bare_markers,
            };
            index.insert(e.pattern, i);
        }

        GlyphTable {
            records,
            special,
            consonants,
            standalone_vowels,
            vowel_modifiers,
            bare_markers,
        }
    }

    fn consonant_at(&self, i: usize) -> ConsonantMatch {
        let e = &self.records[i];
        ConsonantMatch {
            glyph: e.glyph,
            suppresses_inherent_vowel: suppresses_inherent_vowel(e.pattern),
        }
    }

    /// Irregular consonant spellings (3 to 5 letters).
    pub fn special(&self, pattern: &str) -> Option<ConsonantMatch> {
        self.special.get(pattern).map(|&i| self.consonant_at(i))
    }

    /// Regular consonants; the pattern length selects the tier.
    pub fn consonant(&self, pattern: &str) -> Option<ConsonantMatch> {
        self.consonants.get(pattern).map(|&i| self.consonant_at(i))
    }

    /// Dependent vowel signs.
    pub fn vowel_modifier(&self, pattern: &str) -> Option<&'static str> {
        self.vowel_modifiers.get(pattern).map(|&i| self.records[i].glyph)
    }

    /// Independent vowel letters.
    pub fn standalone_vowel(&self, pattern: &str) -> Option<&'static str> {
        self.standalone_vowels.get(pattern).map(|&i| self.records[i].glyph)
    }

    /// Signs that follow a syllable without consuming the marker.
    pub fn bare_marker(&self, pattern: &str) -> Option<&'static str> {
        self.bare_markers.get(pattern).map(|&i| self.records[i].glyph)
    }

    /// Every record, in probe order.
    pub fn records(&self) -> &[Entry] {
        &self.records
    }
}

// Patterns are ASCII, so byte length equals letter count.
fn vowel_tier(pattern: &str) -> Tier {
    match pattern.len() {
        3 => Tier::Triple,
        2 => Tier::Double,
        _ => Tier::Single,
    }
}
