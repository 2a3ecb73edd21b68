//! Script classification.
//!
//! A text is Korean when it contains at least one precomposed Hangul
//! syllable; everything else is `Other`. The check is global: mixed-language
//! text is processed entirely under the table chosen here.

use zoomnote_core::ScriptClass;

/// First code point of the Hangul Syllables block.
const HANGUL_SYLLABLES_START: char = '\u{AC00}';

/// Last code point of the Hangul Syllables block.
const HANGUL_SYLLABLES_END: char = '\u{D7A3}';

/// Returns true if `c` is a precomposed Hangul syllable.
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLES_START..=HANGUL_SYLLABLES_END).contains(&c)
}

/// Returns true if `text` contains any Hangul syllable.
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(is_hangul_syllable)
}

/// Classifies the script of a whole text.
pub fn classify(text: &str) -> ScriptClass {
    if contains_hangul(text) {
        ScriptClass::Korean
    } else {
        ScriptClass::Other
    }
}
