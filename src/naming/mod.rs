//! Identifier normalization
//!
//! Turns raw JSON keys into valid Go identifiers: case-transition and
//! delimiter segmentation, Latin transliteration of non-Latin scripts,
//! digit spelling, initialism canonicalization, and run-wide collision
//! suffixes. One [`NameTable`] covers one generation run; a raw key formats
//! identically everywhere it recurs, and no two distinct raw keys ever share
//! a formatted identifier.

mod initialisms;

use initialisms::canonical_initialism;
use std::collections::HashMap;

/// Identifier used when a raw key loses every character
const FALLBACK_IDENT: &str = "Field";

/// English words for chunk-leading digits
const DIGIT_WORDS: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// Run-scoped naming state.
///
/// Never shared across generation runs; each run owns its own table.
#[derive(Debug, Default)]
pub struct NameTable {
    /// raw key -> formatted identifier
    idents: HashMap<String, String>,
    /// formatted identifier -> next collision suffix to try
    taken: HashMap<String, usize>,
}

impl NameTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a raw key, memoized for the lifetime of the table
    pub fn format(&mut self, raw: &str) -> String {
        if let Some(ident) = self.idents.get(raw) {
            return ident.clone();
        }
        let base = format_base(raw);
        let ident = self.reserve(base);
        self.idents.insert(raw.to_string(), ident.clone());
        ident
    }

    /// Reserve a unique spelling of `base`, suffixing on collision
    fn reserve(&mut self, base: String) -> String {
        if !self.taken.contains_key(&base) {
            self.taken.insert(base.clone(), 0);
            return base;
        }
        let mut suffix = self.taken[&base];
        let candidate = loop {
            suffix += 1;
            let candidate = format!("{base}{suffix}");
            if !self.taken.contains_key(&candidate) {
                break candidate;
            }
        };
        self.taken.insert(base, suffix);
        self.taken.insert(candidate.clone(), 0);
        candidate
    }
}

/// Format a raw key without collision handling
fn format_base(raw: &str) -> String {
    let segmented = split_case_transitions(raw);
    let mut result = String::new();
    for chunk in segmented.split(|c: char| !c.is_alphanumeric()) {
        result.push_str(&format_chunk(chunk));
    }
    if result.is_empty() {
        return FALLBACK_IDENT.to_string();
    }
    canonical_initialism(&result).unwrap_or(result)
}

/// Format one chunk: keep letters and digits (transliterating non-ASCII),
/// upper-case the first kept character, spell a leading digit.
fn format_chunk(chunk: &str) -> String {
    let mut span = String::new();
    for c in chunk.chars() {
        if c.is_ascii_alphanumeric() {
            span.push(c);
        } else if c.is_alphanumeric() {
            // Latin phonetic approximation of non-Latin scripts
            span.extend(
                deunicode::deunicode_char(c)
                    .unwrap_or("")
                    .chars()
                    .filter(char::is_ascii_alphanumeric),
            );
        }
    }
    if span.is_empty() {
        return span;
    }
    let mut chars = span.chars();
    let first = chars.next().map(|c| c.to_ascii_uppercase());
    let mut formatted = String::new();
    match first {
        Some(d @ '0'..='9') => {
            formatted.push_str(DIGIT_WORDS[d as usize - '0' as usize]);
        }
        Some(c) => formatted.push(c),
        None => {}
    }
    formatted.extend(chars);
    canonical_initialism(&formatted).unwrap_or(formatted)
}

/// Insert a segment boundary before an upper-case letter that is followed by
/// a lower-case letter, lowering that letter ("userName" -> "user_name").
fn split_case_transitions(key: &str) -> String {
    let runes: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    for (i, &c) in runes.iter().enumerate() {
        if c.is_uppercase() && i > 0 && runes.get(i + 1).is_some_and(|n| n.is_lowercase()) {
            out.push('_');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests;
