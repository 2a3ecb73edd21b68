//! Sentence splitting.
//!
//! Scans characters into a buffer and splits on terminal punctuation. A mark
//! that ends a very short buffer ("Dr.", "Mr.") is kept as an abbreviation.
//! Emitted sentences are trimmed, keep their terminal mark, and are at least
//! [`MIN_SENTENCE_CHARS`] long; shorter fragments are dropped silently.

use crate::params::{ABBREVIATION_MAX_CHARS, MIN_SENTENCE_CHARS, SENTENCE_TERMINATORS};

/// Splits `text` into trimmed sentences in source order.
///
/// A text without terminal punctuation yields one sentence when it is long
/// enough and none otherwise. Terminal marks that arrive while the buffer is
/// still empty (trailing "?!" or ellipsis dots) are skipped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut buffer = String::new();

    for c in text.chars() {
        if !is_terminator(c) {
            buffer.push(c);
            continue;
        }

        let pending = buffer.trim().chars().count();
        if pending == 0 {
            continue;
        }

        buffer.push(c);
        if pending < ABBREVIATION_MAX_CHARS {
            continue;
        }

        flush(&mut buffer, &mut sentences);
    }

    flush(&mut buffer, &mut sentences);
    sentences
}

/// Returns true for ASCII and full-width terminal punctuation.
pub fn is_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// Counts whitespace-separated words.
pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

fn flush(buffer: &mut String, sentences: &mut Vec<String>) {
    let trimmed = buffer.trim();
    if trimmed.chars().count() >= MIN_SENTENCE_CHARS {
        sentences.push(trimmed.to_string());
    }
    buffer.clear();
}
