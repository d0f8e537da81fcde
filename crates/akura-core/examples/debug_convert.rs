use akura_core::singlish::{convert, tokenize, GlyphTable};

fn main() {
    let table = GlyphTable::global();

    let input = "oyaata kohomadha";

    // Table lookups for key patterns
    println!("=== Table lookups ===");
    for key in &["k", "kh", "ksha", "a", "aa", "x", "dh", "oya"] {
        let hits: Vec<String> = table
            .records()
            .iter()
            .filter(|e| e.pattern == *key)
            .map(|e| format!("{:?}({}, {})", e.glyph, e.tier.label(), e.category.label()))
            .collect();
        if hits.is_empty() {
            println!("  {key} -> NOT FOUND");
        } else {
            println!("  {key} -> {}", hits.join(", "));
        }
    }

    // Token stream
    println!("\n=== Tokens for {input:?} ===");
    let tokens = tokenize(input);
    println!("  {} tokens", tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        println!("  [{i:3}] {token:?}");
    }

    // Rendered output
    println!("\n=== Output ===");
    println!("  {}", convert(input));
}
