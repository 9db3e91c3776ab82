use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One run of a text block.
pub struct TextRun {
    /// Run text, verbatim from the source string.
    pub text: String,
    /// Whether this run carries accent emphasis styling.
    pub emphasized: bool,
}

/// Split free text into ordered runs at case-insensitive word-boundary
/// matches of the given accent words.
///
/// Matched runs are flagged emphasized; unmatched spans (including
/// separators) are copied verbatim. The concatenation of all run texts
/// equals the input exactly: no loss, no overlap, no duplication.
pub fn highlight_accent_words(text: &str, accents: &[String]) -> Vec<TextRun> {
    if text.is_empty() {
        return Vec::new();
    }

    let accents_lower: Vec<String> = accents
        .iter()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();

    if accents_lower.is_empty() {
        return vec![TextRun {
            text: text.to_string(),
            emphasized: false,
        }];
    }

    let mut runs = Vec::new();
    let mut cursor = 0usize;
    for (start, end) in word_ranges(text) {
        let word = &text[start..end];
        if !accents_lower.iter().any(|a| word.to_lowercase() == *a) {
            continue;
        }
        if start > cursor {
            runs.push(TextRun {
                text: text[cursor..start].to_string(),
                emphasized: false,
            });
        }
        runs.push(TextRun {
            text: word.to_string(),
            emphasized: true,
        });
        cursor = end;
    }
    if cursor < text.len() {
        runs.push(TextRun {
            text: text[cursor..].to_string(),
            emphasized: false,
        });
    }
    runs
}

/// Byte ranges of maximal alphanumeric word segments, in order.
fn word_ranges(text: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start: Option<usize> = None;
    for (idx, ch) in text.char_indices() {
        if ch.is_alphanumeric() {
            if start.is_none() {
                start = Some(idx);
            }
        } else if let Some(s) = start.take() {
            ranges.push((s, idx));
        }
    }
    if let Some(s) = start {
        ranges.push((s, text.len()));
    }
    ranges
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
