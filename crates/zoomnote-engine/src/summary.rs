//! Sentence scoring for the Line and Brief zoom levels.
//!
//! Both levels select verbatim sentences produced by
//! [`split_sentences`](crate::sentence::split_sentences); neither rewrites
//! the text. Ties always go to the sentence that appears first.
//!
//! ## Line
//!
//! | signal | bonus |
//! |--------|-------|
//! | first sentence | [`LINE_FIRST_SENTENCE_BONUS`] |
//! | 30-100 characters | [`LINE_READABLE_BONUS`] |
//! | each domain term | [`LINE_DOMAIN_TERM_BONUS`] |
//! | each turning-point verb | [`LINE_ACTION_VERB_BONUS`] |
//!
//! The winner is cut to [`LINE_MAX_CHARS`] at a word boundary.
//!
//! ## Brief
//!
//! | signal | bonus |
//! |--------|-------|
//! | first sentence | [`BRIEF_FIRST_SENTENCE_BONUS`] |
//! | last sentence | [`BRIEF_LAST_SENTENCE_BONUS`] |
//! | 5-20 words | [`BRIEF_WORD_BAND_BONUS`] |
//! | each domain term | [`BRIEF_DOMAIN_TERM_BONUS`] |
//!
//! The top [`BRIEF_SENTENCES`] are joined in score order, not reading order.

use std::cmp::Ordering;

use crate::lexicon::{count_action_verbs, count_domain_terms};
use crate::params::{
    BRIEF_DOMAIN_TERM_BONUS, BRIEF_FIRST_SENTENCE_BONUS, BRIEF_LAST_SENTENCE_BONUS,
    BRIEF_MAX_WORDS, BRIEF_MIN_WORDS, BRIEF_SENTENCES, BRIEF_SEPARATOR, BRIEF_WORD_BAND_BONUS,
    LINE_ACTION_VERB_BONUS, LINE_DOMAIN_TERM_BONUS, LINE_FIRST_SENTENCE_BONUS, LINE_MAX_CHARS,
    LINE_READABLE_BONUS, LINE_READABLE_MAX_CHARS, LINE_READABLE_MIN_CHARS,
};
use crate::sentence::{split_sentences, word_count};
use crate::text::truncate_at_word;

/// A sentence paired with its score for one Line or Brief computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence<'a> {
    /// The sentence text as produced by the splitter.
    pub text: &'a str,
    /// Position in the sentence list.
    pub index: usize,
    /// Heuristic score.
    pub score: f64,
}

/// Scores a sentence for the Line level.
pub fn line_score(sentence: &str, index: usize) -> f64 {
    let mut score = 0.0;

    if index == 0 {
        score += LINE_FIRST_SENTENCE_BONUS;
    }

    let len = sentence.chars().count();
    if (LINE_READABLE_MIN_CHARS..=LINE_READABLE_MAX_CHARS).contains(&len) {
        score += LINE_READABLE_BONUS;
    }

    score += count_domain_terms(sentence) as f64 * LINE_DOMAIN_TERM_BONUS;
    score += count_action_verbs(sentence) as f64 * LINE_ACTION_VERB_BONUS;
    score
}

/// Scores a sentence for the Brief level.
pub fn brief_score(sentence: &str, index: usize, total: usize) -> f64 {
    let mut score = 0.0;

    if index == 0 {
        score += BRIEF_FIRST_SENTENCE_BONUS;
    }
    if index + 1 == total {
        score += BRIEF_LAST_SENTENCE_BONUS;
    }

    let words = word_count(sentence);
    if (BRIEF_MIN_WORDS..=BRIEF_MAX_WORDS).contains(&words) {
        score += BRIEF_WORD_BAND_BONUS;
    }

    score += count_domain_terms(sentence) as f64 * BRIEF_DOMAIN_TERM_BONUS;
    score
}

/// Scores every sentence and sorts by descending score, earliest first on ties.
pub fn rank_sentences<'a>(
    sentences: &'a [String],
    score: impl Fn(&str, usize) -> f64,
) -> Vec<ScoredSentence<'a>> {
    let mut scored: Vec<ScoredSentence<'a>> = sentences
        .iter()
        .enumerate()
        .map(|(index, text)| ScoredSentence {
            text: text.as_str(),
            index,
            score: score(text.as_str(), index),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    scored
}

/// Picks the best single sentence, or `None` when there are no sentences.
///
/// The result is not truncated.
pub fn best_line_sentence(sentences: &[String]) -> Option<&str> {
    rank_sentences(sentences, line_score)
        .first()
        .map(|scored| scored.text)
}

/// Computes the Line level for non-blank text.
///
/// When the splitter finds no sentence, the trimmed text is the only
/// candidate. The result is at most [`LINE_MAX_CHARS`] characters plus the
/// ellipsis.
pub fn line(text: &str) -> String {
    let sentences = split_sentences(text);
    let chosen = best_line_sentence(&sentences).unwrap_or_else(|| text.trim());
    truncate_at_word(chosen, LINE_MAX_CHARS)
}

/// Selects the Brief sentences in score order.
pub fn brief_sentences(sentences: &[String]) -> Vec<&str> {
    let total = sentences.len();
    rank_sentences(sentences, |sentence, index| brief_score(sentence, index, total))
        .into_iter()
        .take(BRIEF_SENTENCES)
        .map(|scored| scored.text)
        .collect()
}

/// Computes the Brief level for non-blank text.
///
/// When the splitter finds no sentence, the trimmed text is returned as is.
pub fn brief(text: &str) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return text.trim().to_string();
    }
    brief_sentences(&sentences).join(BRIEF_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ELLIPSIS;

    const MARIA: &str = "Maria storms into the room. She slams the door and breaks down in tears. After a long silence, she decides to call her mother.";

    #[test]
    fn line_scores_for_maria() {
        let sentences = split_sentences(MARIA);
        // First sentence: positional bonus only (27 chars is below the band).
        assert_eq!(line_score(&sentences[0], 0), 2.0);
        // Second: readable band only.
        assert_eq!(line_score(&sentences[1], 1), 1.0);
        // Third: readable band plus "decides".
        assert_eq!(line_score(&sentences[2], 2), 4.0);
    }

    #[test]
    fn line_picks_turning_point_over_first_sentence() {
        assert_eq!(line(MARIA), "After a long silence, she decides to call her mother.");
    }

    #[test]
    fn line_ties_go_to_earliest() {
        let text = "The first quiet moment happens here. The second quiet moment happens here.";
        // Both sentences are in the readable band; the first also gets the
        // positional bonus.
        assert_eq!(line(text), "The first quiet moment happens here.");

        let sentences = vec![
            "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzz middle one".to_string(),
            "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzz middle two".to_string(),
        ];
        let ranked = rank_sentences(&sentences, |_, _| 1.0);
        assert_eq!(ranked[0].index, 0);
        assert_eq!(ranked[1].index, 1);
    }

    #[test]
    fn line_truncates_long_sentences() {
        let long = format!("{} ends here.", "word ".repeat(40));
        let out = line(&long);
        assert!(out.ends_with(ELLIPSIS));
        let body: String = out.trim_end_matches(ELLIPSIS).to_string();
        assert!(body.chars().count() <= LINE_MAX_CHARS);
        assert!(long.starts_with(&body));
    }

    #[test]
    fn line_without_sentences_uses_trimmed_text() {
        assert_eq!(line("  Hi there  "), "Hi there");
    }

    #[test]
    fn brief_scores_for_maria() {
        let sentences = split_sentences(MARIA);
        assert_eq!(brief_score(&sentences[0], 0, 3), 3.0);
        assert_eq!(brief_score(&sentences[1], 1, 3), 1.0);
        assert_eq!(brief_score(&sentences[2], 2, 3), 2.5);
    }

    #[test]
    fn brief_joins_in_score_order() {
        assert_eq!(
            brief(MARIA),
            "Maria storms into the room. After a long silence, she decides to call her mother. She slams the door and breaks down in tears."
        );
    }

    #[test]
    fn brief_takes_at_most_three() {
        let text = "First sentence is right here. Second sentence sits here. Third sentence is also here. Fourth sentence comes last.";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 4);
        assert_eq!(brief_sentences(&sentences).len(), 3);
    }

    #[test]
    fn brief_domain_terms_raise_middle_sentences() {
        let text = "It begins with a plain opening line. Middle filler sentence number one goes here. The scene turns on conflict, subtext and tension between them. Middle filler sentence number two goes here. It ends with a plain closing line.";
        let sentences = split_sentences(text);
        let picked = brief_sentences(&sentences);
        assert_eq!(
            picked,
            vec![
                "The scene turns on conflict, subtext and tension between them.",
                "It begins with a plain opening line.",
                "It ends with a plain closing line.",
            ]
        );
    }

    #[test]
    fn brief_without_sentences_uses_trimmed_text() {
        assert_eq!(brief(" ok then "), "ok then");
    }
}
