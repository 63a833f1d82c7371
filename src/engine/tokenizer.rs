//! Single-pass numeral tokenizer.
//!
//! A numeral is a maximal run of ASCII digits with grouping commas (dropped)
//! and at most one decimal point. Every other character is a terminator.
//!
//! The scan is a two-state automaton:
//!
//! ```text
//!            digit: seed buffer
//!   Idle ───────────────────────> Accumulating ──┐ digit: append
//!    ^                                  │  ^     │ comma: skip
//!    │   terminator: finalize buffer    │  └─────┘ first '.': append
//!    └──────────────────────────────────┘
//! ```
//!
//! A terminator finalizes the in-progress token at the terminator's own
//! position and is consumed as punctuation; it never doubles as the start of
//! the next token. A second decimal point is a terminator. End of input
//! finalizes a still-open token at the block's end position.

use std::str::CharIndices;

use crate::number::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Accumulating,
}

/// Lazy, forward-only scan of one text block, yielding each numeral literal
/// as a `(Number, end_position)` pair. End positions are byte offsets at
/// char boundaries (the terminator's position, or the block length for a
/// token that runs to the end).
///
/// State is local to one block; scanning the next block takes a fresh
/// tokenizer.
pub(crate) struct NumeralTokenizer<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    state: State,
    buffer: String,
    exhausted: bool,
}

impl<'a> NumeralTokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        NumeralTokenizer {
            text,
            chars: text.char_indices(),
            state: State::Idle,
            buffer: String::new(),
            exhausted: false,
        }
    }

    /// Close the buffer at `position`. Buffers that fail to parse are
    /// dropped without ending the scan.
    fn finalize(&mut self, position: usize) -> Option<(Number, usize)> {
        self.state = State::Idle;
        let parsed = Number::parse(&self.buffer);
        self.buffer.clear();
        parsed.map(|number| (number, position))
    }
}

impl Iterator for NumeralTokenizer<'_> {
    type Item = (Number, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        while let Some((position, c)) = self.chars.next() {
            let mut terminate = false;

            if c.is_ascii_digit() {
                self.state = State::Accumulating;
                self.buffer.push(c);
            } else if c == ',' {
                // Grouping commas are invisible to the grammar, so digit
                // runs separated only by commas merge into one token.
            } else if c == '.' {
                if self.state == State::Accumulating {
                    if self.buffer.contains('.') {
                        terminate = true;
                    } else {
                        self.buffer.push(c);
                    }
                }
                // A bare decimal point outside a numeral is ignored.
            } else {
                terminate = true;
            }

            if terminate && self.state == State::Accumulating {
                if let Some(item) = self.finalize(position) {
                    return Some(item);
                }
            }
        }

        self.exhausted = true;
        if self.state == State::Accumulating {
            return self.finalize(self.text.len());
        }
        None
    }
}
