//! Core data types for zoomnote.
//!
//! These types describe the inputs and outputs of the text-analysis engine:
//!
//! - Zoom levels, the four increasingly detailed views of a note
//! - Script classification used to select stopword tables and lexicons
//! - Note text supplied by the caller (never mutated by the engine)
//! - Beats, the ordered segments produced by the beat segmenter
//! - Content keys that callers may use to cache results per text snapshot
//!
//! All public types derive `Debug`, `Clone`, `Serialize`, and `Deserialize`
//! where a wire representation makes sense.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Zoom levels
// ============================================================================

/// One of four increasingly detailed views of the same note text.
///
/// The discriminants define the total order used by progressive UIs: a view
/// at level `n` reveals every level `<= n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ZoomLevel {
    /// Bullet-joined topic keywords.
    Keywords = 1,
    /// A single representative sentence.
    Line = 2,
    /// Up to three sentences.
    Brief = 3,
    /// The verbatim body.
    Full = 4,
}

impl ZoomLevel {
    /// All levels in ascending order.
    pub const ALL: [ZoomLevel; 4] = [
        ZoomLevel::Keywords,
        ZoomLevel::Line,
        ZoomLevel::Brief,
        ZoomLevel::Full,
    ];

    /// Returns the numeric rank of this level (1..=4).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Creates a level from its numeric rank.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::Keywords),
            2 => Some(Self::Line),
            3 => Some(Self::Brief),
            4 => Some(Self::Full),
            _ => None,
        }
    }

    /// Returns true if a view at this level also reveals `other`.
    #[must_use]
    pub fn reveals(self, other: ZoomLevel) -> bool {
        other <= self
    }

    /// Returns the next more detailed level, if any.
    #[must_use]
    pub const fn zoom_in(self) -> Option<Self> {
        Self::from_rank(self.rank() + 1)
    }

    /// Returns the next less detailed level, if any.
    #[must_use]
    pub const fn zoom_out(self) -> Option<Self> {
        Self::from_rank(self.rank().saturating_sub(1))
    }

    /// Returns the lowercase name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keywords => "keywords",
            Self::Line => "line",
            Self::Brief => "brief",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`ZoomLevel`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomLevelParseError(pub String);

impl fmt::Display for ZoomLevelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown zoom level '{}' (expected keywords, line, brief, full or 1-4)",
            self.0
        )
    }
}

impl std::error::Error for ZoomLevelParseError {}

impl FromStr for ZoomLevel {
    type Err = ZoomLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(rank) = trimmed.parse::<u8>() {
            return Self::from_rank(rank).ok_or_else(|| ZoomLevelParseError(s.to_string()));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "keywords" => Ok(Self::Keywords),
            "line" => Ok(Self::Line),
            "brief" => Ok(Self::Brief),
            "full" => Ok(Self::Full),
            _ => Err(ZoomLevelParseError(s.to_string())),
        }
    }
}

// ============================================================================
// Script classification
// ============================================================================

/// Binary script classification of a whole text.
///
/// Derived per call from the input; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptClass {
    /// The text contains at least one Hangul syllable.
    Korean,
    /// Everything else, processed with the Latin-script tables.
    Other,
}

impl ScriptClass {
    /// Returns true for [`ScriptClass::Korean`].
    #[must_use]
    pub const fn is_korean(self) -> bool {
        matches!(self, Self::Korean)
    }
}

impl fmt::Display for ScriptClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Korean => f.write_str("korean"),
            Self::Other => f.write_str("other"),
        }
    }
}

// ============================================================================
// Note text
// ============================================================================

/// Caller-owned note text: a title and a body.
///
/// The engine reads the body and never mutates either field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteText {
    /// Note title (may be empty).
    #[serde(default)]
    pub title: String,
    /// Note body.
    pub body: String,
}

impl NoteText {
    /// Creates a note from a title and body.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Creates an untitled note.
    pub fn from_body(body: impl Into<String>) -> Self {
        Self::new(String::new(), body)
    }

    /// Returns true if the body is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Returns the content key of the body.
    #[must_use]
    pub fn content_key(&self) -> ContentKey {
        ContentKey::of(&self.body)
    }
}

// ============================================================================
// Beats
// ============================================================================

/// An ordered, length-capped segment of prose.
///
/// Beats preserve source order and are never reordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Beat(String);

impl Beat {
    /// Wraps a segment of text as a beat.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the beat text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the beat and returns its text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Length in characters (not bytes).
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Beat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Beat {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Beat> for String {
    fn from(beat: Beat) -> Self {
        beat.0
    }
}

// ============================================================================
// Content keys
// ============================================================================

/// BLAKE3 hash of a text snapshot.
///
/// Engine outputs are total functions of their input, so callers may cache
/// results keyed by `(ContentKey, ZoomLevel)`. Any edit to the text yields a
/// different key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentKey([u8; 32]);

impl ContentKey {
    /// Hashes a text snapshot.
    #[must_use]
    pub fn of(text: &str) -> Self {
        Self(*blake3::hash(text.as_bytes()).as_bytes())
    }

    /// Returns the raw hash bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the hash as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        blake3::Hash::from_bytes(self.0).to_hex().to_string()
    }
}

impl fmt::Debug for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentKey({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ContentKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
