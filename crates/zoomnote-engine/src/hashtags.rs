//! Literal hashtag extraction.
//!
//! Matches `#` followed by one or more Unicode word characters. Tags are
//! returned without the leading `#`, deduplicated by exact text, in order of
//! first appearance.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("hashtag pattern is valid"));

/// Extracts hashtags from `text`.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    HASHTAG
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|tag| seen.insert(*tag))
        .map(str::to_string)
        .collect()
}
