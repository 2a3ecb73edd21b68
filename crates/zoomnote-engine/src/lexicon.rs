//! Fixed word tables: stopwords, the domain lexicon and turning-point verbs.
//!
//! The stopword tables are closed sets of function words, one per script
//! class. The domain lexicon and the action-verb list are bilingual; Hangul
//! entries are stems that match inside inflected words.

use std::collections::HashSet;
use std::sync::LazyLock;
use zoomnote_core::ScriptClass;

use crate::language::contains_hangul;

/// Common English function words filtered from keyword analysis.
const LATIN_STOPWORDS: &[&str] = &[
    "a",
    "about",
    "above",
    "after",
    "again",
    "against",
    "all",
    "also",
    "am",
    "an",
    "and",
    "any",
    "are",
    "as",
    "at",
    "be",
    "because",
    "been",
    "before",
    "being",
    "below",
    "between",
    "both",
    "but",
    "by",
    "can",
    "could",
    "did",
    "didn",
    "do",
    "does",
    "doesn",
    "doing",
    "don",
    "down",
    "during",
    "each",
    "even",
    "few",
    "for",
    "from",
    "further",
    "get",
    "got",
    "had",
    "has",
    "have",
    "having",
    "he",
    "her",
    "here",
    "hers",
    "herself",
    "him",
    "himself",
    "his",
    "how",
    "i",
    "if",
    "in",
    "into",
    "is",
    "isn",
    "it",
    "its",
    "itself",
    "just",
    "like",
    "ll",
    "me",
    "more",
    "most",
    "much",
    "my",
    "myself",
    "no",
    "nor",
    "not",
    "now",
    "of",
    "off",
    "on",
    "once",
    "one",
    "only",
    "or",
    "other",
    "our",
    "ours",
    "ourselves",
    "out",
    "over",
    "own",
    "re",
    "really",
    "same",
    "she",
    "should",
    "so",
    "some",
    "still",
    "such",
    "than",
    "that",
    "the",
    "their",
    "theirs",
    "them",
    "themselves",
    "then",
    "there",
    "these",
    "they",
    "this",
    "those",
    "through",
    "to",
    "too",
    "under",
    "until",
    "up",
    "ve",
    "very",
    "was",
    "wasn",
    "we",
    "were",
    "what",
    "when",
    "where",
    "which",
    "while",
    "who",
    "whom",
    "why",
    "will",
    "with",
    "won",
    "would",
    "wouldn",
    "you",
    "your",
    "yours",
    "yourself",
    "yourselves",
];

/// Korean particles, conjunctions and other function words.
const KOREAN_STOPWORDS: &[&str] = &[
    "그",
    "이",
    "저",
    "것",
    "수",
    "등",
    "및",
    "더",
    "또",
    "또는",
    "그리고",
    "하지만",
    "그러나",
    "그래서",
    "그런데",
    "그러면",
    "이런",
    "저런",
    "그런",
    "이것",
    "저것",
    "그것",
    "있다",
    "없다",
    "하다",
    "되다",
    "이다",
    "있는",
    "없는",
    "하는",
    "되는",
    "했다",
    "한다",
    "나는",
    "너는",
    "우리",
    "그는",
    "그녀",
    "에서",
    "에게",
    "으로",
    "부터",
    "까지",
    "처럼",
    "보다",
    "정말",
    "너무",
    "아주",
    "매우",
    "조금",
    "다시",
    "이제",
    "지금",
    "오늘",
    "그냥",
    "같은",
    "같이",
    "때문에",
];

/// Craft and creative-writing terms that boost relevance.
const DOMAIN_TERMS: &[&str] = &[
    // English
    "action",
    "antagonist",
    "backstory",
    "blocking",
    "character",
    "characters",
    "circumstances",
    "climax",
    "conflict",
    "desire",
    "dialogue",
    "emotion",
    "emotions",
    "fear",
    "improvisation",
    "intention",
    "memory",
    "monologue",
    "motivation",
    "objective",
    "obstacle",
    "protagonist",
    "rehearsal",
    "relationship",
    "rhythm",
    "scene",
    "stakes",
    "subtext",
    "tactic",
    "tempo",
    "tension",
    "theme",
    "timing",
    // Korean
    "감정",
    "인물",
    "캐릭터",
    "갈등",
    "동기",
    "목표",
    "장애물",
    "서브텍스트",
    "장면",
    "긴장",
    "관계",
    "절정",
    "독백",
    "대사",
    "리허설",
    "즉흥",
    "기억",
    "욕망",
    "두려움",
    "주제",
    "호흡",
];

/// Turning-point verbs that mark a sentence as pivotal.
const ACTION_VERBS: &[&str] = &[
    // English
    "decide",
    "decides",
    "decided",
    "realize",
    "realizes",
    "realized",
    "discover",
    "discovers",
    "discovered",
    "confess",
    "confesses",
    "confessed",
    "choose",
    "chooses",
    "chose",
    "refuse",
    "refuses",
    "refused",
    "reveal",
    "reveals",
    "revealed",
    "confront",
    "confronts",
    "confronted",
    "admit",
    "admits",
    "admitted",
    "betray",
    "betrays",
    "betrayed",
    // Korean stems
    "결심",
    "깨닫",
    "결정",
    "발견",
    "고백",
    "선택",
    "거절",
    "폭로",
    "맞서",
    "인정",
    "배신",
];

static LATIN_STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LATIN_STOPWORDS.iter().copied().collect());

static KOREAN_STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KOREAN_STOPWORDS.iter().copied().collect());

static DOMAIN_TERM_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DOMAIN_TERMS.iter().copied().collect());

/// Returns the stopword table for a script class.
pub fn stopwords(script: ScriptClass) -> &'static HashSet<&'static str> {
    if script.is_korean() {
        &KOREAN_STOPWORD_SET
    } else {
        &LATIN_STOPWORD_SET
    }
}

/// Returns true if `token` is in the stopword table for `script`.
pub fn is_stopword(token: &str, script: ScriptClass) -> bool {
    stopwords(script).contains(token)
}

/// Returns true if `token` exactly matches a domain-lexicon entry.
pub fn is_domain_term(token: &str) -> bool {
    DOMAIN_TERM_SET.contains(token)
}

/// Counts distinct domain-lexicon entries found in a sentence.
pub fn count_domain_terms(sentence: &str) -> usize {
    count_term_matches(sentence, DOMAIN_TERMS)
}

/// Counts distinct turning-point verbs found in a sentence.
pub fn count_action_verbs(sentence: &str) -> usize {
    count_term_matches(sentence, ACTION_VERBS)
}

/// Counts entries of `terms` that occur in `sentence`.
///
/// Latin-script entries must equal a lowercased word of the sentence. Hangul
/// entries match as substrings, since Korean attaches particles and endings
/// directly to the stem.
fn count_term_matches(sentence: &str, terms: &[&str]) -> usize {
    let lowered = sentence.to_lowercase();
    let words: HashSet<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    terms
        .iter()
        .filter(|term| {
            if contains_hangul(term) {
                lowered.contains(*term)
            } else {
                words.contains(*term)
            }
        })
        .count()
}
