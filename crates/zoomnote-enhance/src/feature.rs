//! Enhancement features.
//!
//! Each feature knows its response schema, its instruction in both supported
//! languages, how to check a decoded answer, and which local heuristic
//! stands in for it.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use zoomnote_core::{KeywordList, ScriptClass, StorySummary, TagList, TitleSuggestion};
use zoomnote_engine::insights;
use zoomnote_engine::lexicon::is_stopword;
use zoomnote_engine::params::{
    LINE_MAX_CHARS, MAX_BEATS, MAX_KEYWORDS_LIMIT, MAX_TAGS, TITLE_MAX_CHARS,
};

/// Longest accepted remote beat, in characters.
pub const REMOTE_BEAT_MAX_CHARS: usize = 80;

/// A remote-capable feature with a local fallback.
pub trait Feature: Send + Sync {
    /// Decoded response payload.
    type Output: DeserializeOwned + Send;

    /// Feature name, used as the schema name and in logs.
    const NAME: &'static str;

    /// JSON schema for the structured response.
    fn schema(&self) -> Value;

    /// System instruction for a note in `script`.
    fn instruction(&self, script: ScriptClass) -> String;

    /// Checks content constraints the schema cannot express, for a note
    /// written in `script`.
    fn validate(&self, output: &Self::Output, script: ScriptClass) -> Result<(), String>;

    /// Computes the local heuristic result.
    fn local(&self, text: &str) -> Self::Output;
}

fn check_text(field: &str, value: &str, max_chars: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is empty"));
    }
    let len = value.chars().count();
    if len > max_chars {
        return Err(format!("{field} has {len} characters, limit is {max_chars}"));
    }
    Ok(())
}

fn check_count(field: &str, len: usize, max: usize) -> Result<(), String> {
    if len == 0 {
        return Err(format!("{field} is empty"));
    }
    if len > max {
        return Err(format!("{field} has {len} entries, limit is {max}"));
    }
    Ok(())
}

/// Rejects repeated terms (ignoring case) and stopwords of `script`.
fn check_terms<'a>(
    field: &str,
    terms: impl IntoIterator<Item = &'a str>,
    script: ScriptClass,
) -> Result<(), String> {
    let mut seen = HashSet::new();
    for term in terms {
        let term = term.to_lowercase();
        if is_stopword(&term, script) {
            return Err(format!("{field} contains stopword {term:?}"));
        }
        if !seen.insert(term.clone()) {
            return Err(format!("{field} repeats {term:?}"));
        }
    }
    Ok(())
}

fn string_list_schema(field: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            field: {"type": "array", "items": {"type": "string"}}
        },
        "required": [field],
        "additionalProperties": false
    })
}

/// Title suggestion.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleFeature;

impl Feature for TitleFeature {
    type Output = TitleSuggestion;
    const NAME: &'static str = "title";

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {"title": {"type": "string"}},
            "required": ["title"],
            "additionalProperties": false
        })
    }

    fn instruction(&self, script: ScriptClass) -> String {
        match script {
            ScriptClass::Korean => format!(
                "다음 메모에 어울리는 제목을 한국어로 하나 제안하세요. {TITLE_MAX_CHARS}자 이내로 작성하세요."
            ),
            ScriptClass::Other => format!(
                "Suggest one title for the following note. Keep it under {TITLE_MAX_CHARS} characters."
            ),
        }
    }

    fn validate(&self, output: &TitleSuggestion, _script: ScriptClass) -> Result<(), String> {
        check_text("title", &output.title, TITLE_MAX_CHARS)
    }

    fn local(&self, text: &str) -> TitleSuggestion {
        insights::suggest_title(text)
    }
}

/// Logline plus beat list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFeature;

impl Feature for SummaryFeature {
    type Output = StorySummary;
    const NAME: &'static str = "summary";

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "logline": {"type": "string"},
                "beats": {"type": "array", "items": {"type": "string"}}
            },
            "required": ["logline", "beats"],
            "additionalProperties": false
        })
    }

    fn instruction(&self, script: ScriptClass) -> String {
        match script {
            ScriptClass::Korean => format!(
                "다음 메모를 한 줄 로그라인과 최대 {MAX_BEATS}개의 비트로 요약하세요. \
                 로그라인은 {LINE_MAX_CHARS}자, 각 비트는 {REMOTE_BEAT_MAX_CHARS}자 이내로 한국어로 작성하세요."
            ),
            ScriptClass::Other => format!(
                "Summarize the following note as a one-line logline and at most {MAX_BEATS} story beats. \
                 Keep the logline under {LINE_MAX_CHARS} characters and each beat under {REMOTE_BEAT_MAX_CHARS}."
            ),
        }
    }

    fn validate(&self, output: &StorySummary, _script: ScriptClass) -> Result<(), String> {
        check_text("logline", &output.logline, LINE_MAX_CHARS)?;
        check_count("beats", output.beats.len(), MAX_BEATS)?;
        output
            .beats
            .iter()
            .try_for_each(|beat| check_text("beat", beat, REMOTE_BEAT_MAX_CHARS))
    }

    fn local(&self, text: &str) -> StorySummary {
        insights::summarize_story(text)
    }
}

/// Topic tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagsFeature;

impl Feature for TagsFeature {
    type Output = TagList;
    const NAME: &'static str = "tags";

    fn schema(&self) -> Value {
        string_list_schema("tags")
    }

    fn instruction(&self, script: ScriptClass) -> String {
        match script {
            ScriptClass::Korean => format!(
                "다음 메모의 주제 태그를 최대 {MAX_TAGS}개 제안하세요. 각 태그는 #으로 시작하고 공백 없이 소문자로 작성하세요."
            ),
            ScriptClass::Other => format!(
                "Suggest at most {MAX_TAGS} topic tags for the following note. \
                 Each tag starts with # and is lowercase with no spaces."
            ),
        }
    }

    fn validate(&self, output: &TagList, script: ScriptClass) -> Result<(), String> {
        check_count("tags", output.tags.len(), MAX_TAGS)?;
        let mut names = Vec::with_capacity(output.tags.len());
        for tag in &output.tags {
            let name = tag
                .strip_prefix('#')
                .ok_or_else(|| format!("tag {tag:?} does not start with #"))?;
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(format!("tag {tag:?} is not a single word"));
            }
            if *tag != tag.to_lowercase() {
                return Err(format!("tag {tag:?} is not lowercase"));
            }
            names.push(name);
        }
        check_terms("tags", names, script)
    }

    fn local(&self, text: &str) -> TagList {
        insights::suggest_tags(text)
    }
}

/// Ranked keywords, at most `max` of them.
#[derive(Debug, Clone, Copy)]
pub struct KeywordsFeature {
    max: usize,
}

impl KeywordsFeature {
    /// Creates the feature; `max` is capped at the engine's keyword limit.
    pub fn new(max: usize) -> Self {
        Self {
            max: max.min(MAX_KEYWORDS_LIMIT),
        }
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl Feature for KeywordsFeature {
    type Output = KeywordList;
    const NAME: &'static str = "keywords";

    fn schema(&self) -> Value {
        string_list_schema("keywords")
    }

    fn instruction(&self, script: ScriptClass) -> String {
        let max = self.max;
        match script {
            ScriptClass::Korean => {
                format!("다음 메모에서 가장 중요한 핵심어를 최대 {max}개 중요도 순으로 추출하세요.")
            }
            ScriptClass::Other => format!(
                "Extract at most {max} of the most important keywords from the following note, most important first."
            ),
        }
    }

    fn validate(&self, output: &KeywordList, script: ScriptClass) -> Result<(), String> {
        check_count("keywords", output.keywords.len(), self.max)?;
        output
            .keywords
            .iter()
            .try_for_each(|keyword| check_text("keyword", keyword, usize::MAX))?;
        check_terms("keywords", output.keywords.iter().map(String::as_str), script)
    }

    fn local(&self, text: &str) -> KeywordList {
        insights::keyword_list(text, self.max)
    }
}
