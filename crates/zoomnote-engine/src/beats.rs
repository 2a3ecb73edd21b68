//! Beat segmentation.
//!
//! Splits a note body into ordered beats using structural cues:
//!
//! 1. A line starting with `---`, `###`, `***` or `===` is a separator
//! 2. Two consecutive blank lines always close the current beat
//! 3. A single blank line closes the beat only when the buffer is already
//!    longer than [`BEAT_MIN_SUBSTANTIVE_CHARS`], so ordinary paragraph
//!    breaks in short notes do not fragment
//!
//! Lines inside a beat are joined with a single space. Beats are capped at
//! [`BEAT_MAX_CHARS`] characters.
//!
//! When fewer than [`MIN_MEANINGFUL_BEATS`] beats reach
//! [`MEANINGFUL_BEAT_CHARS`], the structural result is discarded and the
//! first [`FALLBACK_BEAT_SENTENCES`] sentences are used instead.

use zoomnote_core::Beat;

use crate::params::{
    BEAT_MAX_CHARS, BEAT_MIN_SUBSTANTIVE_CHARS, BEAT_SEPARATORS, FALLBACK_BEAT_SENTENCES,
    MAX_BEATS, MEANINGFUL_BEAT_CHARS, MIN_MEANINGFUL_BEATS,
};
use crate::sentence::split_sentences;
use crate::text::truncate_to_fit;

/// Returns true if a trimmed line is an explicit beat separator.
pub fn is_separator(line: &str) -> bool {
    BEAT_SEPARATORS.iter().any(|prefix| line.starts_with(prefix))
}

/// Accumulates lines into beats.
#[derive(Debug, Default)]
struct BeatBuilder {
    beats: Vec<Beat>,
    current: String,
    current_chars: usize,
}

impl BeatBuilder {
    fn push_line(&mut self, line: &str) {
        if !self.current.is_empty() {
            self.current.push(' ');
            self.current_chars += 1;
        }
        self.current.push_str(line);
        self.current_chars += line.chars().count();
    }

    fn close(&mut self) {
        if self.current.is_empty() {
            return;
        }
        self.beats.push(Beat::new(truncate_to_fit(&self.current, BEAT_MAX_CHARS)));
        self.current.clear();
        self.current_chars = 0;
    }

    fn finish(mut self) -> Vec<Beat> {
        self.close();
        self.beats
    }
}

/// Segments text into beats using only structural cues.
///
/// This is the raw segmentation before the quality gate and the final cap.
pub fn structural_beats(text: &str) -> Vec<Beat> {
    let mut builder = BeatBuilder::default();
    let mut previous_blank = false;

    for raw in text.lines() {
        let line = raw.trim();

        if is_separator(line) {
            builder.close();
            previous_blank = false;
            continue;
        }

        if line.is_empty() {
            if previous_blank || builder.current_chars > BEAT_MIN_SUBSTANTIVE_CHARS {
                builder.close();
            }
            previous_blank = true;
            continue;
        }

        builder.push_line(line);
        previous_blank = false;
    }

    builder.finish()
}

/// Counts beats long enough to be meaningful.
pub fn meaningful_count(beats: &[Beat]) -> usize {
    beats
        .iter()
        .filter(|beat| beat.char_len() >= MEANINGFUL_BEAT_CHARS)
        .count()
}

/// Segments text into at most [`MAX_BEATS`] ordered beats.
///
/// Falls back to the first sentences of the text when the structural
/// segmentation has fewer than [`MIN_MEANINGFUL_BEATS`] meaningful beats.
/// Blank text yields no beats.
pub fn segment_beats(text: &str) -> Vec<Beat> {
    let structural = structural_beats(text);

    let mut beats = if meaningful_count(&structural) >= MIN_MEANINGFUL_BEATS {
        structural
    } else {
        tracing::debug!(
            structural = structural.len(),
            "beat segmentation below quality gate, using sentence fallback"
        );
        split_sentences(text)
            .into_iter()
            .take(FALLBACK_BEAT_SENTENCES)
            .map(|sentence| Beat::new(truncate_to_fit(&sentence, BEAT_MAX_CHARS)))
            .collect()
    };

    beats.truncate(MAX_BEATS);
    beats
}
