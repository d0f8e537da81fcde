use akura_core::singlish::{Category, GlyphTable, Tier};

/// Print every table record in the order the tokenizer probes them. The
/// marker column shows which consonants take the explicit al-lakuna.
pub fn dump_cmd() {
    let table = GlyphTable::global();
    println!(
        "{:<8} {:<8} {:<17} {:<7} glyph",
        "pattern", "tier", "category", "marker"
    );
    for entry in table.records() {
        let marker = match entry.category {
            Category::Consonant => {
                let hit = match entry.tier {
                    Tier::Special => table.special(entry.pattern),
                    _ => table.consonant(entry.pattern),
                };
                if hit.is_some_and(|m| m.suppresses_inherent_vowel) {
                    "hal"
                } else {
                    "-"
                }
            }
            _ => "",
        };
        println!(
            "{:<8} {:<8} {:<17} {:<7} {}",
            entry.pattern,
            entry.tier.label(),
            entry.category.label(),
            marker,
            entry.glyph,
        );
    }
}

pub fn stats_cmd() {
    let table = GlyphTable::global();
    let records = table.records();

    let tiers = [Tier::Special, Tier::Triple, Tier::Double, Tier::Single];
    let categories = [
        Category::Consonant,
        Category::StandaloneVowel,
        Category::VowelModifier,
        Category::BareMarker,
    ];

    println!("=== Records by tier ===");
    for tier in tiers {
        let count = records.iter().filter(|e| e.tier == tier).count();
        println!("  {:<17} {:>3}", tier.label(), count);
    }

    println!();
    println!("=== Records by category ===");
    for category in categories {
        let count = records.iter().filter(|e| e.category == category).count();
        println!("  {:<17} {:>3}", category.label(), count);
    }

    println!();
    println!("  {:<17} {:>3}", "total", records.len());
}
