//! Tokenization and keyword scoring.
//!
//! This module turns free text into ranked topic keywords:
//! - Tokenization on Unicode word boundaries, further split on any
//!   non-alphanumeric character
//! - Lowercasing for Latin-script text (Korean has no case)
//! - Length window, numeric and stopword filters
//! - Term frequency scoring with fixed-weight boosts for domain terms,
//!   long tokens and repeated tokens
//!
//! Ranking is deterministic: equal scores keep first-occurrence order.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;
use zoomnote_core::ScriptClass;

use crate::language::classify;
use crate::lexicon::{is_domain_term, is_stopword};
use crate::params::{
    DOMAIN_TERM_BOOST, LONG_TOKEN_BOOST, LONG_TOKEN_CHARS, MAX_KEYWORDS_LIMIT, MAX_TOKEN_CHARS,
    MIN_TOKEN_CHARS, REPEATED_TOKEN_BOOST, REPEATED_TOKEN_COUNT, VERY_LONG_TOKEN_BOOST,
    VERY_LONG_TOKEN_CHARS,
};

/// Tokenizes text into normalized tokens that qualify for scoring.
///
/// Processing steps:
/// 1. Lowercase when `script` is [`ScriptClass::Other`]
/// 2. Split on Unicode word boundaries
/// 3. Split each word again on non-alphanumeric characters
/// 4. Keep tokens of 2-15 characters that are not purely numeric
/// 5. Remove stopwords for `script`
pub fn tokenize(text: &str, script: ScriptClass) -> Vec<String> {
    let normalized: Cow<'_, str> = match script {
        ScriptClass::Other => Cow::Owned(text.to_lowercase()),
        ScriptClass::Korean => Cow::Borrowed(text),
    };

    normalized
        .unicode_words()
        .flat_map(|word| word.split(|c: char| !c.is_alphanumeric()))
        .filter(|token| qualifies(token, script))
        .map(str::to_string)
        .collect()
}

/// Returns true if a raw token passes the length, numeric and stopword filters.
fn qualifies(token: &str, script: ScriptClass) -> bool {
    let len = token.chars().count();
    (MIN_TOKEN_CHARS..=MAX_TOKEN_CHARS).contains(&len)
        && !token.chars().all(char::is_numeric)
        && !is_stopword(token, script)
}

/// A distinct token with its frequency statistics and score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTerm {
    /// The normalized token.
    pub term: String,
    /// Occurrences within the analyzed text.
    pub count: usize,
    /// Index of the first occurrence in the token stream.
    pub first_index: usize,
    /// Final score after boosts.
    pub score: f64,
}

/// Computes the score of a term.
///
/// Base score is `count / total`; the domain, length and repetition boosts
/// multiply it.
pub fn term_score(term: &str, count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let len = term.chars().count();
    let mut score = count as f64 / total as f64;

    if is_domain_term(term) {
        score *= DOMAIN_TERM_BOOST;
    }
    if len >= LONG_TOKEN_CHARS {
        score *= LONG_TOKEN_BOOST;
    }
    if len >= VERY_LONG_TOKEN_CHARS {
        score *= VERY_LONG_TOKEN_BOOST;
    }
    if count >= REPEATED_TOKEN_COUNT {
        score *= REPEATED_TOKEN_BOOST;
    }

    score
}

/// Scores every distinct token and ranks them.
///
/// The result is sorted by descending score; ties keep the order in which
/// the terms first appear.
pub fn rank_terms(tokens: &[String]) -> Vec<ScoredTerm> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut terms: Vec<ScoredTerm> = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match positions.get(token.as_str()) {
            Some(&slot) => terms[slot].count += 1,
            None => {
                positions.insert(token.as_str(), terms.len());
                terms.push(ScoredTerm {
                    term: token.clone(),
                    count: 1,
                    first_index: index,
                    score: 0.0,
                });
            }
        }
    }

    let total = tokens.len();
    for term in &mut terms {
        term.score = term_score(&term.term, term.count, total);
    }

    terms.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.first_index.cmp(&b.first_index))
    });
    terms
}

/// Extracts up to `max_keywords` keywords from `text`.
///
/// The script class is detected from the text. Requests above
/// [`MAX_KEYWORDS_LIMIT`] are capped. Returns an empty list when no token
/// qualifies.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    extract_keywords_for(text, classify(text), max_keywords)
}

/// Extracts keywords using an already-detected script class.
pub fn extract_keywords_for(text: &str, script: ScriptClass, max_keywords: usize) -> Vec<String> {
    let limit = max_keywords.min(MAX_KEYWORDS_LIMIT);
    if limit == 0 {
        return Vec::new();
    }

    let tokens = tokenize(text, script);
    if tokens.is_empty() {
        tracing::debug!("no qualifying tokens for keyword extraction");
        return Vec::new();
    }

    rank_terms(&tokens)
        .into_iter()
        .take(limit)
        .map(|scored| scored.term)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::stopwords;

    const MARIA: &str = "Maria storms into the room. She slams the door and breaks down in tears. After a long silence, she decides to call her mother.";

    #[test]
    fn tokenize_lowercases_and_filters() {
        let tokens = tokenize("Hello, World! This is a test.", ScriptClass::Other);
        assert_eq!(tokens, vec!["hello", "world", "test"]);
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokenize("", ScriptClass::Other).is_empty());
        assert!(tokenize("... ??? !!!", ScriptClass::Other).is_empty());
    }

    #[test]
    fn tokenize_drops_numbers_and_out_of_window_lengths() {
        let tokens = tokenize(
            "2024 1999 x scene supercalifragilistic act2",
            ScriptClass::Other,
        );
        assert_eq!(tokens, vec!["scene", "act2"]);
    }

    #[test]
    fn tokenize_splits_contractions() {
        let tokens = tokenize("She didn't answer", ScriptClass::Other);
        assert_eq!(tokens, vec!["answer"]);
    }

    #[test]
    fn tokenize_keeps_case_for_korean() {
        let tokens = tokenize("Hamlet 갈등 그리고 무대", ScriptClass::Korean);
        assert_eq!(tokens, vec!["Hamlet", "갈등", "무대"]);
    }

    #[test]
    fn term_score_boosts() {
        // Base only.
        assert!((term_score("door", 1, 4) - 0.25).abs() < 1e-9);
        // Long token.
        assert!((term_score("storms", 1, 4) - 0.25 * 1.2).abs() < 1e-9);
        // Very long token stacks with long token.
        assert!((term_score("doorframe", 1, 4) - 0.25 * 1.2 * 1.3).abs() < 1e-9);
        // Domain term, long, very long and repeated.
        assert!((term_score("conflict", 3, 8) - 0.375 * 2.0 * 1.2 * 1.3 * 1.5).abs() < 1e-9);
        assert_eq!(term_score("door", 1, 0), 0.0);
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let keywords = extract_keywords(MARIA, 5);
        assert_eq!(keywords, vec!["maria", "storms", "slams", "breaks", "tears"]);
    }

    #[test]
    fn domain_and_repetition_outrank_frequency() {
        let keywords = extract_keywords(
            "conflict conflict conflict tension tension doorway doorway doorway",
            5,
        );
        assert_eq!(keywords, vec!["conflict", "doorway", "tension"]);
    }

    #[test]
    fn korean_keywords() {
        let keywords = extract_keywords("갈등 갈등 갈등 그리고 무대 무대", 5);
        assert_eq!(keywords, vec!["갈등", "무대"]);
    }

    #[test]
    fn respects_requested_max_and_limit() {
        assert_eq!(extract_keywords(MARIA, 2).len(), 2);
        assert_eq!(extract_keywords(MARIA, 0).len(), 0);
        assert_eq!(extract_keywords(MARIA, 50).len(), MAX_KEYWORDS_LIMIT);
    }

    #[test]
    fn keywords_are_unique_and_not_stopwords() {
        let text = "The scene and the scene and the SCENE: the rehearsal of the rehearsal.";
        let keywords = extract_keywords(text, 6);
        let stop = stopwords(ScriptClass::Other);
        for keyword in &keywords {
            assert!(!stop.contains(keyword.as_str()));
        }
        let mut deduped = keywords.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), keywords.len());
        assert_eq!(keywords, vec!["scene", "rehearsal"]);
    }

    #[test]
    fn no_qualifying_tokens_is_empty() {
        assert!(extract_keywords("the and of 12 34", 5).is_empty());
        assert!(extract_keywords("", 5).is_empty());
    }

    #[test]
    fn rank_terms_counts_occurrences() {
        let tokens: Vec<String> = vec!["cat".into(), "dog".into(), "cat".into()];
        let ranked = rank_terms(&tokens);
        assert_eq!(ranked[0].term, "cat");
        assert_eq!(ranked[0].count, 2);
        assert_eq!(ranked[0].first_index, 0);
        assert_eq!(ranked[1].term, "dog");
        assert_eq!(ranked[1].first_index, 1);
    }
}
