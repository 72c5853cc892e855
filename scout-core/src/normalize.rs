//! Turning raw completion text into response shapes.

use serde::Serialize;

/// Sentinel returned when the model suggests no products.
pub const NO_SUGGESTIONS: &str = "No suggestions generated.";

/// Sentinel returned when the model lists no tools.
pub const NO_TOOLS: &str = "No tools generated.";

/// Sentinel returned when a web search yields no candidates.
pub const NO_RESULTS: &str = "No results found";

const BULLETS: &[char] = &['-', '•', '*'];

/// An ordered list that is never empty on the wire.
///
/// When nothing usable was produced, `items` holds a single sentinel and
/// `empty` is set, so a real item that happens to share the sentinel's text
/// is still distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedList {
    pub items: Vec<String>,
    pub empty: bool,
}

impl NormalizedList {
    pub fn found(items: Vec<String>) -> Self {
        Self {
            items,
            empty: false,
        }
    }

    pub fn sentinel(sentinel: &str) -> Self {
        Self {
            items: vec![sentinel.to_string()],
            empty: true,
        }
    }

    /// Use `items` if there are any, otherwise fall back to the sentinel.
    pub fn or_sentinel(items: Vec<String>, sentinel: &str) -> Self {
        if items.is_empty() {
            Self::sentinel(sentinel)
        } else {
            Self::found(items)
        }
    }
}

/// Strip whitespace and any leading bullet markers from a single line.
///
/// A trailing run of `*` is dropped too, so Markdown bold (`**Jenkins**`)
/// does not leave half its markers behind.
pub fn clean_line(line: &str) -> &str {
    line.trim()
        .trim_start_matches(|c: char| BULLETS.contains(&c) || c.is_whitespace())
        .trim_end_matches('*')
        .trim_end()
}

/// Split completion text into one entry per non-blank line.
pub fn normalize_list(raw: &str, sentinel: &str) -> NormalizedList {
    let items = raw
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    NormalizedList::or_sentinel(items, sentinel)
}

/// Report bodies are handed back exactly as the model wrote them.
pub fn passthrough(raw: String) -> String {
    raw
}
