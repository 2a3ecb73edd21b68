//! Feature payloads shared by the local engine and the remote enhancer.
//!
//! Field names match the JSON objects the remote language model is asked to
//! return, so the same structs are used for decoding remote responses and for
//! carrying local heuristic results.

use serde::{Deserialize, Serialize};

/// A suggested note title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleSuggestion {
    pub title: String,
}

/// A one-line logline plus an ordered beat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorySummary {
    pub logline: String,
    pub beats: Vec<String>,
}

/// Hash-prefixed, lowercase topic tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagList {
    pub tags: Vec<String>,
}

/// Ranked topic keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordList {
    pub keywords: Vec<String>,
}
