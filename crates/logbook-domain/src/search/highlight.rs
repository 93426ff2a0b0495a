use serde::Serialize;

/// A run of text that either matched the search query or did not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSegment {
    pub text: String,
    pub matched: bool,
}

impl HighlightSegment {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// Split `text` into segments marking every case-insensitive occurrence of `query`.
///
/// The query is matched literally. An empty query or text yields the text as a
/// single unmatched segment (or nothing for empty text).
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSegment> {
    if text.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return vec![HighlightSegment::new(text, false)];
    }

    // Lower-casing may change byte lengths, so remember where each lowered
    // byte came from in the original text.
    let mut lowered = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (idx, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            let before = lowered.len();
            lowered.push(lower);
            origin.extend(std::iter::repeat(idx).take(lowered.len() - before));
        }
    }
    let to_original = |lowered_idx: usize| origin.get(lowered_idx).copied().unwrap_or(text.len());

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, matched) in lowered.match_indices(&needle) {
        let begin = to_original(start);
        let end = to_original(start + matched.len());
        if begin < cursor || begin == end {
            continue;
        }
        if begin > cursor {
            segments.push(HighlightSegment::new(&text[cursor..begin], false));
        }
        segments.push(HighlightSegment::new(&text[begin..end], true));
        cursor = end;
    }
    if cursor < text.len() {
        segments.push(HighlightSegment::new(&text[cursor..], false));
    }
    segments
}
