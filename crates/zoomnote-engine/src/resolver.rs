//! Zoom-level resolution.
//!
//! [`resolve`] is the public entry point that orchestrates the classifier,
//! splitter, scorers and keyword extractor for one requested level.
//! It never fails: blank input yields a level-specific placeholder.

use zoomnote_core::{Beat, ScriptClass, ZoomLevel};

use crate::beats::segment_beats;
use crate::hashtags::extract_hashtags;
use crate::keywords::extract_keywords_for;
use crate::language::classify;
use crate::params::{
    BRIEF_PLACEHOLDER, KEYWORD_SEPARATOR, KEYWORDS_PLACEHOLDER, LINE_PLACEHOLDER,
};
use crate::sentence::split_sentences;
use crate::summary;

/// Returns the placeholder shown for blank input at `level`.
///
/// Full has no placeholder: it always echoes the body verbatim, blank or not.
pub fn placeholder(level: ZoomLevel) -> Option<&'static str> {
    match level {
        ZoomLevel::Keywords => Some(KEYWORDS_PLACEHOLDER),
        ZoomLevel::Line => Some(LINE_PLACEHOLDER),
        ZoomLevel::Brief => Some(BRIEF_PLACEHOLDER),
        ZoomLevel::Full => None,
    }
}

/// Produces the view of `text` at `level`.
///
/// - Keywords: up to `max_keywords` keywords joined with `" • "`
/// - Line: the single best sentence, at most 120 characters plus ellipsis
/// - Brief: up to three sentences in score order
/// - Full: `text` unchanged
pub fn resolve(text: &str, level: ZoomLevel, max_keywords: usize) -> String {
    if level == ZoomLevel::Full {
        return text.to_string();
    }

    if text.trim().is_empty() {
        return placeholder(level).unwrap_or_default().to_string();
    }

    match level {
        ZoomLevel::Keywords => {
            let keywords = extract_keywords_for(text, classify(text), max_keywords);
            if keywords.is_empty() {
                KEYWORDS_PLACEHOLDER.to_string()
            } else {
                keywords.join(KEYWORD_SEPARATOR)
            }
        }
        ZoomLevel::Line => summary::line(text),
        ZoomLevel::Brief => summary::brief(text),
        ZoomLevel::Full => text.to_string(),
    }
}

/// Every engine output for one text snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Detected script class.
    pub script: ScriptClass,
    /// Number of sentences found by the splitter.
    pub sentence_count: usize,
    /// Ranked keywords.
    pub keywords: Vec<String>,
    /// Literal hashtags, without `#`.
    pub hashtags: Vec<String>,
    /// Ordered beats.
    pub beats: Vec<Beat>,
    /// Output of [`resolve`] for each level, in ascending order.
    pub views: Vec<(ZoomLevel, String)>,
}

impl Analysis {
    /// Returns the view for a level.
    pub fn view(&self, level: ZoomLevel) -> &str {
        self.views
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default()
    }
}

/// Runs every component over `text`.
pub fn analyze(text: &str, max_keywords: usize) -> Analysis {
    let script = classify(text);

    Analysis {
        script,
        sentence_count: split_sentences(text).len(),
        keywords: extract_keywords_for(text, script, max_keywords),
        hashtags: extract_hashtags(text),
        beats: segment_beats(text),
        views: ZoomLevel::ALL
            .iter()
            .map(|&level| (level, resolve(text, level, max_keywords)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DEFAULT_MAX_KEYWORDS, ELLIPSIS, LINE_MAX_CHARS};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const MARIA: &str = "Maria storms into the room. She slams the door and breaks down in tears. After a long silence, she decides to call her mother.";

    const WORDS: &[&str] = &[
        "scene", "the", "conflict", "She", "decides", "갈등", "door", "\n", "\n\n", "---", ".",
        "!", "?", "#subtext", "tension", "room", "and", "realizes", "   ", "。", "12",
    ];

    fn random_text(rng: &mut StdRng) -> String {
        let len = rng.gen_range(0..80);
        (0..len)
            .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True when the words of `beats`, taken in order, appear in order among
    /// the words of `source`. The last word of a truncated beat may be cut.
    fn beats_follow_source(beats: &[Beat], source: &str) -> bool {
        let mut remaining = source.split_whitespace();
        beats.iter().all(|beat| {
            let truncated = beat.as_str().ends_with(ELLIPSIS);
            let words: Vec<&str> = beat
                .as_str()
                .trim_end_matches(ELLIPSIS)
                .split_whitespace()
                .collect();
            words.iter().enumerate().all(|(i, word)| {
                let may_be_cut = truncated && i + 1 == words.len();
                remaining.any(|src| src == *word || (may_be_cut && src.starts_with(word)))
            })
        })
    }

    #[test]
    fn multi_line_and_truncated_beats_keep_source_order() {
        let long = "the scene keeps building ".repeat(10);
        let text = format!(
            "Zebra crossing at dawn,\nnobody around at all.\n---\n{long}\n---\nMidnight: the clock\nfinally stops."
        );
        let beats = segment_beats(&text);
        assert_eq!(beats.len(), 3);
        assert_eq!(beats[0].as_str(), "Zebra crossing at dawn, nobody around at all.");
        assert!(beats[1].as_str().ends_with(ELLIPSIS));
        assert!(beats_follow_source(&beats, &text));

        let reversed: Vec<Beat> = beats.iter().rev().cloned().collect();
        assert!(!beats_follow_source(&reversed, &text));
    }

    #[test]
    fn full_is_verbatim() {
        for text in [MARIA, "", "   ", "\n\n# not a summary\n", "갈등이 깊어진다."] {
            assert_eq!(resolve(text, ZoomLevel::Full, 5), text);
        }
    }

    #[test]
    fn blank_input_yields_placeholders() {
        for text in ["", "   ", "\n\t\n"] {
            assert_eq!(resolve(text, ZoomLevel::Keywords, 5), KEYWORDS_PLACEHOLDER);
            assert_eq!(resolve(text, ZoomLevel::Line, 5), LINE_PLACEHOLDER);
            assert_eq!(resolve(text, ZoomLevel::Brief, 5), BRIEF_PLACEHOLDER);
            assert_eq!(resolve(text, ZoomLevel::Full, 5), text);
        }
    }

    #[test]
    fn maria_views() {
        assert_eq!(
            resolve(MARIA, ZoomLevel::Keywords, 3),
            "maria • storms • slams"
        );
        assert_eq!(
            resolve(MARIA, ZoomLevel::Line, 5),
            "After a long silence, she decides to call her mother."
        );
        assert_eq!(
            resolve(MARIA, ZoomLevel::Brief, 5),
            "Maria storms into the room. After a long silence, she decides to call her mother. She slams the door and breaks down in tears."
        );
    }

    #[test]
    fn keywords_without_qualifying_tokens_use_placeholder() {
        assert_eq!(resolve("the and 42", ZoomLevel::Keywords, 5), KEYWORDS_PLACEHOLDER);
    }

    #[test]
    fn randomized_properties() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let text = random_text(&mut rng);
            for level in ZoomLevel::ALL {
                let first = resolve(&text, level, DEFAULT_MAX_KEYWORDS);
                let second = resolve(&text, level, DEFAULT_MAX_KEYWORDS);
                assert_eq!(first, second, "non-deterministic output for {level}");
            }

            assert_eq!(resolve(&text, ZoomLevel::Full, 3), text);

            let line = resolve(&text, ZoomLevel::Line, 3);
            assert!(line.trim_end_matches(ELLIPSIS).chars().count() <= LINE_MAX_CHARS);

            let beats = segment_beats(&text);
            assert!(beats_follow_source(&beats, &text), "beats out of order: {text:?}");

            let keywords = extract_keywords_for(&text, classify(&text), 4);
            assert!(keywords.len() <= 4);
            let mut unique = keywords.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), keywords.len());
        }
    }

    #[test]
    fn analyze_collects_everything() {
        let text = "Rehearsal notes #subtext #timing\n\n\nThe scene needs more tension before the exit.\n---\nShe finally realizes what he meant.";
        let analysis = analyze(text, 5);
        assert_eq!(analysis.script, ScriptClass::Other);
        assert_eq!(analysis.hashtags, vec!["subtext", "timing"]);
        assert_eq!(analysis.beats.len(), 3);
        assert_eq!(analysis.views.len(), 4);
        assert_eq!(analysis.view(ZoomLevel::Full), text);
        assert_eq!(analysis.view(ZoomLevel::Line), resolve(text, ZoomLevel::Line, 5));
        assert!(analysis.keywords.contains(&"subtext".to_string()));
    }

    #[test]
    fn korean_text_uses_korean_tables() {
        let text = "두 인물의 갈등이 깊어진다. 그리고 그녀는 마침내 떠나기로 결심한다.";
        let analysis = analyze(text, 5);
        assert_eq!(analysis.script, ScriptClass::Korean);
        assert!(!analysis.keywords.iter().any(|k| k == "그리고"));
        // Two domain terms in the first sentence outweigh the single
        // turning-point verb in the second.
        assert_eq!(analysis.view(ZoomLevel::Line), "두 인물의 갈등이 깊어진다.");
    }
}
