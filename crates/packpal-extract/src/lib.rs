//! Chat list extractor for PackPal.
//!
//! Assistant replies mix prose, headers, and list lines. The extractor
//! keeps only lines carrying a bullet or numbered-list marker, cleans each
//! one into a bare item candidate, and refuses to produce anything at all
//! unless the reply contains enough list lines to plausibly be a packing
//! list. The resulting batch feeds the merge engine unchanged.

use std::collections::HashSet;

use packpal_merge::normalization_key;

/// Minimum qualifying lines before a reply counts as a list.
///
/// A product heuristic, not a correctness requirement: one or two bullets
/// inside prose are usually an aside, not a packing list.
pub const DEFAULT_MIN_LIST_LINES: usize = 3;

/// Extracts item candidates from freeform assistant text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListExtractor {
    min_lines: usize,
}

impl ListExtractor {
    /// Create an extractor with a custom minimum-lines threshold.
    pub fn new(min_lines: usize) -> Self {
        Self { min_lines }
    }

    /// The configured minimum-lines threshold.
    pub fn min_lines(&self) -> usize {
        self.min_lines
    }

    /// Extract a candidate batch from assistant text.
    ///
    /// Lines starting with `- `, `* `, `• `, or `N.`/`N)` qualify; prose
    /// and headers are discarded. Each candidate is stripped of leading
    /// quotes and dash variants, cut at the first em/en-dash annotation
    /// ("Jacket — for evenings" keeps only "Jacket"), and stripped of
    /// trailing punctuation. Fewer than `min_lines` qualifying lines
    /// yields an empty batch; otherwise internal duplicates (by
    /// normalization key) are dropped with order preserved.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let candidates: Vec<String> = text
            .lines()
            .filter_map(list_item_body)
            .map(clean_candidate)
            .filter(|c| !c.is_empty())
            .collect();

        if candidates.len() < self.min_lines {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        candidates
            .into_iter()
            .filter(|c| seen.insert(normalization_key(c)))
            .collect()
    }
}

impl Default for ListExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LIST_LINES)
    }
}

/// The body of a list line, or `None` for prose/headers.
fn list_item_body(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    for marker in ["- ", "* ", "• "] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return Some(rest);
        }
    }
    // Numbered markers: digits, then '.' or ')', then whitespace.
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &trimmed[digits..];
        if let Some(body) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            if body.starts_with(char::is_whitespace) {
                return Some(body);
            }
        }
    }
    None
}

/// Clean a list-line body into a bare candidate.
fn clean_candidate(body: &str) -> String {
    let s = body.trim_start_matches(|c: char| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '“' | '”' | '‘' | '’' | '`' | '-' | '–' | '—')
    });
    // Keep only the text before a long-dash annotation.
    let s = match s.find(['—', '–']) {
        Some(idx) => &s[..idx],
        None => s,
    };
    s.trim_end_matches(|c: char| {
        c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '"' | '\'' | '“' | '”' | '‘' | '’' | '`')
    })
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_bullets_is_not_a_list() {
        let text = "Sure! You could bring:\n- Sunscreen\n- Towel";
        assert!(ListExtractor::default().extract(text).is_empty());
    }

    #[test]
    fn three_bullets_is_a_list() {
        let text = "Here's a packing list:\n- Sunscreen\n- Towel\n- Sunglasses\nHave fun!";
        let batch = ListExtractor::default().extract(text);
        assert_eq!(batch, vec!["Sunscreen", "Towel", "Sunglasses"]);
    }

    #[test]
    fn prose_and_headers_are_discarded() {
        let text = "Packing list\n\n- Tent\nRemember the weather!\n- Stove\n- Mug";
        let batch = ListExtractor::default().extract(text);
        assert_eq!(batch, vec!["Tent", "Stove", "Mug"]);
    }

    #[test]
    fn all_marker_styles_qualify() {
        let text = "- dash\n* star\n• dot\n1. one\n2) two";
        let batch = ListExtractor::default().extract(text);
        assert_eq!(batch, vec!["dash", "star", "dot", "one", "two"]);
    }

    #[test]
    fn numbered_marker_needs_following_space() {
        // "3.5kg" is a quantity, not a list marker.
        let text = "3.5kg weight\n1. first\n2. second\n3. third";
        let batch = ListExtractor::default().extract(text);
        assert_eq!(batch, vec!["first", "second", "third"]);
    }

    #[test]
    fn indented_bullets_qualify() {
        let text = "  - Tent\n  - Stove\n  - Mug";
        let batch = ListExtractor::default().extract(text);
        assert_eq!(batch, vec!["Tent", "Stove", "Mug"]);
    }

    #[test]
    fn dash_annotation_is_cut() {
        let text = "- Jacket — for evenings\n- Sandals – for the beach\n- Hat";
        let batch = ListExtractor::default().extract(text);
        assert_eq!(batch, vec!["Jacket", "Sandals", "Hat"]);
    }

    #[test]
    fn quotes_and_leading_dashes_are_stripped() {
        let text = "- \"Sunscreen\"\n- – Towel\n- 'Hat'";
        let batch = ListExtractor::default().extract(text);
        assert_eq!(batch, vec!["Sunscreen", "Towel", "Hat"]);
    }

    #[test]
    fn trailing_punctuation_is_stripped() {
        let text = "- Sunscreen.\n- Towel,\n- Hat!";
        let batch = ListExtractor::default().extract(text);
        assert_eq!(batch, vec!["Sunscreen", "Towel", "Hat"]);
    }

    #[test]
    fn internal_duplicates_are_dropped_in_order() {
        let text = "- Towel\n- Sunscreen\n- towel.\n- Hat";
        let batch = ListExtractor::default().extract(text);
        assert_eq!(batch, vec!["Towel", "Sunscreen", "Hat"]);
    }

    #[test]
    fn empty_bullet_bodies_do_not_qualify() {
        let text = "- \n- Tent\n- Stove";
        assert!(ListExtractor::default().extract(text).is_empty());
    }

    #[test]
    fn threshold_is_configurable() {
        let text = "- Tent\n- Stove";
        assert_eq!(
            ListExtractor::new(2).extract(text),
            vec!["Tent", "Stove"]
        );
        assert!(ListExtractor::new(3).extract(text).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_batch() {
        assert!(ListExtractor::default().extract("").is_empty());
    }
}
