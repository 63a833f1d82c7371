//! Context-driven magnitude scaling.
//!
//! Financial documents commonly declare a table-wide scale ("(in millions)")
//! that dominates any local suffix on an individual figure; a local suffix
//! ("2.3m", "5 thousand") is the fallback when no declaration is in the
//! window. Cues are matched as literal substrings of the lowercased context,
//! which is deliberately loose: an unrelated "k " right after a number still
//! scales it. Callers wanting stricter behavior must shrink the window.

use once_cell::sync::Lazy;

/// Magnitude multiplier inferred from the text surrounding a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScaleFactor {
    Unit,
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl ScaleFactor {
    pub fn multiplier(self) -> i64 {
        match self {
            ScaleFactor::Unit => 1,
            ScaleFactor::Thousand => 1_000,
            ScaleFactor::Million => 1_000_000,
            ScaleFactor::Billion => 1_000_000_000,
            ScaleFactor::Trillion => 1_000_000_000_000,
        }
    }
}

/// Magnitude words with their one-letter suffix forms, smallest first. The
/// ladder below checks them in this order and stops at the first match.
const MAGNITUDES: [(&str, char, ScaleFactor); 4] = [
    ("thousand", 'k', ScaleFactor::Thousand),
    ("million", 'm', ScaleFactor::Million),
    ("billion", 'b', ScaleFactor::Billion),
    ("trillion", 't', ScaleFactor::Trillion),
];

/// Document-level cues, e.g. `"in millions)"`, matched anywhere in the
/// before window.
static DOC_CUES: Lazy<Vec<(String, ScaleFactor)>> =
    Lazy::new(|| MAGNITUDES.iter().map(|&(word, _, factor)| (format!("in {word}s)"), factor)).collect());

/// Pick the scale factor for a numeral given its lowercased context windows.
///
/// The priority ladder is fixed: a document-level declaration anywhere in
/// `before` wins over any local suffix at the head of `after`; the first
/// matching rung wins and rungs are never combined. A numeral preceded by
/// "(in millions)" and followed by "b " uses the millions scale.
pub(crate) fn scale_for_context(before: &str, after: &str) -> ScaleFactor {
    for (cue, factor) in DOC_CUES.iter() {
        if before.contains(cue.as_str()) {
            return *factor;
        }
    }

    for &(word, letter, factor) in MAGNITUDES.iter() {
        if starts_with_word(after, word) || starts_with_letter(after, letter) {
            return factor;
        }
    }

    ScaleFactor::Unit
}

/// `" thousand"`, `" million"`, ... at the head of the after window.
fn starts_with_word(after: &str, word: &str) -> bool {
    after.strip_prefix(' ').is_some_and(|rest| rest.starts_with(word))
}

/// One-letter suffix (`k`/`m`/`b`/`t`) directly after the numeral, followed
/// by a space or by the end of the clipped window.
fn starts_with_letter(after: &str, letter: char) -> bool {
    let mut chars = after.chars();
    chars.next() == Some(letter) && matches!(chars.next(), None | Some(' '))
}
