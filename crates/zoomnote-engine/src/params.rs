//! Fixed scoring and segmentation parameters.
//!
//! Every threshold and weight used by the engine lives here so tests can
//! assert exact behavior. Lengths are measured in characters, not bytes.

// ----------------------------------------------------------------------------
// Sentence splitting
// ----------------------------------------------------------------------------

/// A sentence buffer shorter than this (before the terminal mark) is treated
/// as an abbreviation and does not split.
pub const ABBREVIATION_MAX_CHARS: usize = 5;

/// Minimum length of an emitted sentence. Shorter fragments are dropped.
pub const MIN_SENTENCE_CHARS: usize = 10;

/// Terminal punctuation marks, ASCII and full-width.
pub const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '。', '！', '？'];

// ----------------------------------------------------------------------------
// Tokenizer and keyword scorer
// ----------------------------------------------------------------------------

/// Minimum token length kept by the tokenizer.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Maximum token length kept by the tokenizer.
pub const MAX_TOKEN_CHARS: usize = 15;

/// Keywords returned when the caller does not ask for a specific count.
pub const DEFAULT_MAX_KEYWORDS: usize = 5;

/// Upper bound on requested keyword counts.
pub const MAX_KEYWORDS_LIMIT: usize = 6;

/// Multiplier for tokens that exactly match a domain-lexicon entry.
pub const DOMAIN_TERM_BOOST: f64 = 2.0;

/// Tokens at least this long get [`LONG_TOKEN_BOOST`].
pub const LONG_TOKEN_CHARS: usize = 5;
pub const LONG_TOKEN_BOOST: f64 = 1.2;

/// Tokens at least this long additionally get [`VERY_LONG_TOKEN_BOOST`].
pub const VERY_LONG_TOKEN_CHARS: usize = 8;
pub const VERY_LONG_TOKEN_BOOST: f64 = 1.3;

/// Tokens occurring at least this often get [`REPEATED_TOKEN_BOOST`].
pub const REPEATED_TOKEN_COUNT: usize = 3;
pub const REPEATED_TOKEN_BOOST: f64 = 1.5;

// ----------------------------------------------------------------------------
// Line level
// ----------------------------------------------------------------------------

pub const LINE_FIRST_SENTENCE_BONUS: f64 = 2.0;

/// Sentences within this character band are considered readable.
pub const LINE_READABLE_MIN_CHARS: usize = 30;
pub const LINE_READABLE_MAX_CHARS: usize = 100;
pub const LINE_READABLE_BONUS: f64 = 1.0;

/// Added once per distinct domain term in the sentence.
pub const LINE_DOMAIN_TERM_BONUS: f64 = 1.5;

/// Added once per distinct turning-point verb in the sentence.
pub const LINE_ACTION_VERB_BONUS: f64 = 3.0;

/// Line output is cut at a word boundary at or before this length.
pub const LINE_MAX_CHARS: usize = 120;

// ----------------------------------------------------------------------------
// Brief level
// ----------------------------------------------------------------------------

pub const BRIEF_FIRST_SENTENCE_BONUS: f64 = 2.0;
pub const BRIEF_LAST_SENTENCE_BONUS: f64 = 1.5;

/// Sentences with a word count in this band get [`BRIEF_WORD_BAND_BONUS`].
pub const BRIEF_MIN_WORDS: usize = 5;
pub const BRIEF_MAX_WORDS: usize = 20;
pub const BRIEF_WORD_BAND_BONUS: f64 = 1.0;

/// Added once per distinct domain term in the sentence.
pub const BRIEF_DOMAIN_TERM_BONUS: f64 = 1.0;

/// Number of sentences in a brief.
pub const BRIEF_SENTENCES: usize = 3;

// ----------------------------------------------------------------------------
// Beat segmenter
// ----------------------------------------------------------------------------

/// A single blank line only closes a beat whose buffer is longer than this.
pub const BEAT_MIN_SUBSTANTIVE_CHARS: usize = 50;

/// Maximum beat length, ellipsis included.
pub const BEAT_MAX_CHARS: usize = 150;

/// Beats at least this long count towards the quality gate.
pub const MEANINGFUL_BEAT_CHARS: usize = 15;

/// Fewer meaningful beats than this triggers the sentence fallback.
pub const MIN_MEANINGFUL_BEATS: usize = 2;

/// Sentences used as beats by the fallback.
pub const FALLBACK_BEAT_SENTENCES: usize = 5;

/// Maximum number of beats returned.
pub const MAX_BEATS: usize = 10;

/// Line prefixes that mark an explicit beat separator.
pub const BEAT_SEPARATORS: &[&str] = &["---", "###", "***", "==="];

// ----------------------------------------------------------------------------
// Output formatting
// ----------------------------------------------------------------------------

/// Appended to text cut short by a length cap.
pub const ELLIPSIS: &str = "…";

/// Joins keywords at the Keywords level.
pub const KEYWORD_SEPARATOR: &str = " • ";

/// Joins sentences at the Brief level.
pub const BRIEF_SEPARATOR: &str = " ";

/// Maximum length of a locally suggested title, ellipsis included.
pub const TITLE_MAX_CHARS: usize = 48;

/// Title used for blank notes.
pub const UNTITLED: &str = "Untitled";

/// Maximum number of suggested tags.
pub const MAX_TAGS: usize = 5;

// ----------------------------------------------------------------------------
// Placeholders for blank input
// ----------------------------------------------------------------------------

pub const KEYWORDS_PLACEHOLDER: &str = "No keywords yet";
pub const LINE_PLACEHOLDER: &str = "Empty note";
pub const BRIEF_PLACEHOLDER: &str = "Nothing to summarize yet";
