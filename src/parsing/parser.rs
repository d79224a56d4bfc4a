use std::fmt;
use tracing::trace;

use crate::language::*;

/// The ways a non-empty input can fail to be interpreted. The offset is the
/// byte position of the first character left unconsumed once every magnitude
/// has had its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    InvalidCharacter(usize, char),
    Misplaced(usize, char),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::InvalidCharacter(offset, _) => *offset,
            ParsingError::Misplaced(offset, _) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::InvalidCharacter(_, c) => format!("invalid character '{}'", c),
            ParsingError::Misplaced(_, c) => format!("misplaced symbol '{}'", c),
        }
    }

    /// Move the error by `base` bytes, for when the numeral being interpreted
    /// sits somewhere inside a larger document.
    pub fn relocate(self, base: usize) -> ParsingError {
        match self {
            ParsingError::InvalidCharacter(offset, c) => {
                ParsingError::InvalidCharacter(base + offset, c)
            }
            ParsingError::Misplaced(offset, c) => ParsingError::Misplaced(base + offset, c),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message(), self.offset())
    }
}

/// Cursor over a numeral being interpreted. The source only ever shrinks and
/// the total only ever grows.
#[derive(Debug)]
pub struct Parser<'i> {
    original: &'i str,
    source: &'i str,
    offset: usize,
    total: u32,
    terms: Vec<Term<'i>>,
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Parser::new()
    }
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser {
            original: "",
            source: "",
            offset: 0,
            total: 0,
            terms: Vec::new(),
        }
    }

    pub fn initialize(&mut self, content: &'i str) {
        self.original = content;
        self.source = content;
        self.offset = 0;
        self.total = 0;
        self.terms
            .clear();
    }

    fn advance(&mut self, width: usize) {
        self.source = &self.source[width..];
        self.offset += width;
    }

    /// The unconsumed remainder of the input.
    pub fn remaining(&self) -> &'i str {
        self.source
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    /// If the input starts with the given fragment, consume it and add
    /// `count` multiples of the recognizer's magnitude to the total.
    fn take_fragment(
        &mut self,
        recognizer: &Recognizer,
        fragment: &'static str,
        count: u32,
    ) -> bool {
        if fragment.is_empty() || !self
            .source
            .starts_with(fragment)
        {
            return false;
        }

        let value = count * recognizer.multiplier;
        let symbol = &self.source[..fragment.len()];

        self.terms
            .push(Term {
                magnitude: recognizer.magnitude,
                symbol,
                value,
            });
        self.total += value;
        self.advance(fragment.len());
        true
    }

    /// Consume as much of the input as belongs to the given magnitude. A
    /// "nine" or "four" fragment ends the magnitude outright; otherwise an
    /// optional "five" may be followed by up to three "one" fragments.
    pub fn read_magnitude(&mut self, recognizer: &Recognizer) {
        let before = self.offset;

        if !self.take_fragment(recognizer, recognizer.nine, 9)
            && !self.take_fragment(recognizer, recognizer.four, 4)
        {
            self.take_fragment(recognizer, recognizer.five, 5);

            for _ in 0..3 {
                if !self.take_fragment(recognizer, recognizer.one, 1) {
                    break;
                }
            }
        }

        trace!(
            magnitude = ?recognizer.magnitude,
            consumed = &self.original[before..self.offset],
            total = self.total
        );
    }

    /// Run each magnitude in descending order over the input. Anything left
    /// over afterwards means the numeral was malformed.
    pub fn read_numeral(&mut self) -> Result<Numeral<'i>, ParsingError> {
        if !self.is_finished() {
            for recognizer in &RECOGNIZERS {
                self.read_magnitude(recognizer);
            }
        }

        if let Some(c) = self
            .source
            .chars()
            .next()
        {
            return Err(if is_symbol(c) {
                ParsingError::Misplaced(self.offset, c)
            } else {
                ParsingError::InvalidCharacter(self.offset, c)
            });
        }

        Ok(Numeral {
            text: self.original,
            value: self.total,
            terms: std::mem::take(&mut self.terms),
        })
    }
}
