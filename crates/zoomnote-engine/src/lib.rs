//! zoomnote-engine: On-device heuristic text analysis
//!
//! This crate turns free-form note text into four progressively denser zoom
//! views, extracts keywords and hashtags, and segments prose into beats. It
//! uses fixed-weight heuristics only: no model, no I/O, no retained state.
//! Every function is a pure function of its input, so results may be cached
//! by the caller keyed on the text snapshot.
//!
//! ## Modules
//!
//! - [`language`]: Korean / other script classification
//! - [`sentence`]: Sentence splitting with abbreviation handling
//! - [`keywords`]: Tokenization and keyword scoring
//! - [`summary`]: Sentence scoring for the Line and Brief levels
//! - [`beats`]: Structural beat segmentation with a sentence fallback
//! - [`hashtags`]: Literal `#tag` extraction
//! - [`resolver`]: Zoom-level entry point and whole-text analysis
//! - [`insights`]: Local title, logline, tag and keyword suggestions
//! - [`lexicon`]: Stopword tables, domain lexicon, turning-point verbs
//! - [`params`]: Every threshold and weight, as named constants
//!
//! ## Example Usage
//!
//! ```rust
//! use zoomnote_engine::{resolve, segment_beats, extract_hashtags};
//! use zoomnote_core::ZoomLevel;
//!
//! let text = "Maria storms into the room. She slams the door and breaks down in tears. \
//!             After a long silence, she decides to call her mother.";
//!
//! assert_eq!(
//!     resolve(text, ZoomLevel::Line, 5),
//!     "After a long silence, she decides to call her mother."
//! );
//! assert_eq!(resolve(text, ZoomLevel::Full, 5), text);
//! assert_eq!(segment_beats(text).len(), 3);
//! assert_eq!(extract_hashtags("Rehearsal notes #subtext #timing"), vec!["subtext", "timing"]);
//! ```

pub use zoomnote_core;

pub mod beats;
pub mod hashtags;
pub mod insights;
pub mod keywords;
pub mod language;
pub mod lexicon;
pub mod params;
pub mod resolver;
pub mod sentence;
pub mod summary;
pub mod text;

// Re-export main entry points for convenience
pub use beats::segment_beats;
pub use hashtags::extract_hashtags;
pub use insights::{keyword_list, suggest_tags, suggest_title, summarize_story};
pub use keywords::{extract_keywords, extract_keywords_for, tokenize};
pub use language::classify;
pub use params::DEFAULT_MAX_KEYWORDS;
pub use resolver::{Analysis, analyze, placeholder, resolve};
pub use sentence::split_sentences;
pub use summary::ScoredSentence;
