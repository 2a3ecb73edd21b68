//! zoomnote-core: Core types for the zoomnote note-analysis tools
//!
//! This crate provides:
//! - Zoom levels and script classification
//! - Caller-owned note text and engine-produced beats
//! - Content keys for caller-side result caching
//! - Feature payloads shared by the local engine and the remote enhancer

pub mod payload;
pub mod types;

pub use payload::{KeywordList, StorySummary, TagList, TitleSuggestion};
pub use types::{Beat, ContentKey, NoteText, ScriptClass, ZoomLevel, ZoomLevelParseError};
