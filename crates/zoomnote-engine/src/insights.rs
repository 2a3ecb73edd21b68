//! Local results for the features a remote language model can also provide.
//!
//! These are the offline answers the enhancer falls back to. Each one is
//! built only from the heuristic components of this crate.

use std::collections::HashSet;
use zoomnote_core::{KeywordList, StorySummary, TagList, TitleSuggestion};

use crate::beats::segment_beats;
use crate::hashtags::extract_hashtags;
use crate::keywords::extract_keywords;
use crate::language::classify;
use crate::lexicon::is_stopword;
use crate::params::{LINE_PLACEHOLDER, MAX_KEYWORDS_LIMIT, MAX_TAGS, TITLE_MAX_CHARS, UNTITLED};
use crate::summary;
use crate::text::truncate_to_fit;

/// Suggests a title: the Line summary cut to [`TITLE_MAX_CHARS`].
pub fn suggest_title(text: &str) -> TitleSuggestion {
    let title = if text.trim().is_empty() {
        UNTITLED.to_string()
    } else {
        truncate_to_fit(&summary::line(text), TITLE_MAX_CHARS)
    };
    TitleSuggestion { title }
}

/// Builds a logline (the Line summary) and the beat list.
pub fn summarize_story(text: &str) -> StorySummary {
    if text.trim().is_empty() {
        return StorySummary {
            logline: LINE_PLACEHOLDER.to_string(),
            beats: Vec::new(),
        };
    }

    StorySummary {
        logline: summary::line(text),
        beats: segment_beats(text).into_iter().map(String::from).collect(),
    }
}

/// Suggests up to [`MAX_TAGS`] lowercase, `#`-prefixed tags.
///
/// Literal hashtags come first, then keywords fill the remaining slots.
/// Hashtags that are stopwords for the note's script are dropped.
pub fn suggest_tags(text: &str) -> TagList {
    let script = classify(text);
    let mut seen = HashSet::new();
    let tags = extract_hashtags(text)
        .into_iter()
        .chain(extract_keywords(text, MAX_KEYWORDS_LIMIT))
        .map(|tag| tag.to_lowercase())
        .filter(|tag| !is_stopword(tag, script))
        .filter(|tag| seen.insert(tag.clone()))
        .take(MAX_TAGS)
        .map(|tag| format!("#{tag}"))
        .collect();
    TagList { tags }
}

/// Wraps [`extract_keywords`] as a feature payload.
pub fn keyword_list(text: &str, max_keywords: usize) -> KeywordList {
    KeywordList {
        keywords: extract_keywords(text, max_keywords),
    }
}
