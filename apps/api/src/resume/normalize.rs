//! Text normalization shared by skill recognition and document cleanup.

/// Lower-cases, replaces every non-alphanumeric character with a space and
/// collapses whitespace runs. `"Node.js / React"` becomes `"node js react"`.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A text prepared once for repeated phrase lookups.
pub struct NormalizedText {
    /// Normalized text padded with one space on each side.
    padded: String,
    /// Lower-cased original, for terms whose symbols carry meaning (`c++`, `c#`).
    raw_lower: String,
}

impl NormalizedText {
    pub fn new(text: &str) -> Self {
        NormalizedText {
            padded: format!(" {} ", normalize(text)),
            raw_lower: text.to_lowercase(),
        }
    }

    /// Whole-word phrase match of an already normalized phrase.
    pub fn contains_phrase(&self, normalized_phrase: &str) -> bool {
        !normalized_phrase.is_empty() && self.padded.contains(&format!(" {normalized_phrase} "))
    }

    /// Matches `term` as written, bounded by non-alphanumeric characters.
    ///
    /// Used for terms that normalization would destroy, e.g. `c++` → `c`.
    pub fn contains_literal(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        if term.is_empty() {
            return false;
        }
        self.raw_lower.match_indices(&term).any(|(start, _)| {
            let before = self.raw_lower[..start].chars().next_back();
            let after = self.raw_lower[start + term.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
    }
}

/// Tidies text pulled out of a PDF or DOCX: folds ligatures and typographic
/// punctuation to ASCII, collapses whitespace within each line and drops
/// blank lines. Line structure is kept for section detection.
pub fn clean_document_text(text: &str) -> String {
    text.lines()
        .map(|line| {
            fold_typography(line)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn fold_typography(line: &str) -> String {
    line.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2013}', '\u{2014}'], "-")
        .replace('\u{2022}', " ")
        .replace('\u{2026}', "...")
        .replace('\u{00A0}', " ")
}
