//! Scanner primitives
//!
//! Byte classification, a cursor over the input, and the string/bracket/paren
//! tracking shared by the selector scan and the pipeline splitter.

use cssx_core::error::{ParseError, ParseErrorKind};

pub fn is_ws(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
}

pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

pub fn is_ident_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

pub fn is_ident_part(ch: u8) -> bool {
    is_ident_start(ch) || is_digit(ch) || ch == b'-'
}

/// Trim cssx whitespace from both ends.
///
/// Returns the trimmed text and the number of leading bytes removed.
pub fn trim_ws(text: &str) -> (&str, usize) {
    let bytes = text.as_bytes();
    let mut left = 0;
    let mut right = bytes.len();
    while left < right && is_ws(bytes[left]) {
        left += 1;
    }
    while right > left && is_ws(bytes[right - 1]) {
        right -= 1;
    }
    (&text[left..right], left)
}

/// Read position over an immutable input fragment.
///
/// `base` is the fragment's offset in the original top-level input; every
/// position reported outward is rebased by it.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    base: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str, base: usize) -> Self {
        Self { input, pos: 0, base }
    }

    /// Local read position
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Translate a local position into the original input
    pub fn rebase(&self, local: usize) -> usize {
        self.base + local
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Current byte, or 0 at end of input
    pub fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    pub fn peek_at(&self, ahead: usize) -> u8 {
        self.input
            .as_bytes()
            .get(self.pos + ahead)
            .copied()
            .unwrap_or(0)
    }

    /// Consume and return the current byte, or 0 at end of input
    pub fn bump(&mut self) -> u8 {
        let ch = self.peek();
        if !self.eof() {
            self.pos += 1;
        }
        ch
    }

    pub fn skip_ws(&mut self) {
        while !self.eof() && is_ws(self.peek()) {
            self.pos += 1;
        }
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// Error at a local position
    pub fn error_at(&self, kind: ParseErrorKind, local: usize) -> ParseError {
        ParseError::new(kind, self.rebase(local))
    }

    /// Error at the current read position
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(kind, self.pos)
    }
}

/// Tracks whether a scan is inside a quoted string, and the bracket and
/// paren depth outside of strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanState {
    quote: Option<u8>,
    escape: bool,
    bracket_depth: usize,
    paren_depth: usize,
}

impl ScanState {
    /// Outside any string, bracket or paren
    pub fn at_top_level(&self) -> bool {
        self.quote.is_none() && self.bracket_depth == 0 && self.paren_depth == 0
    }

    /// Account for `ch` being consumed.
    ///
    /// Unbalanced closers never drive a depth below zero.
    pub fn advance(&mut self, ch: u8) {
        if let Some(quote) = self.quote {
            if self.escape {
                self.escape = false;
            } else if ch == b'\\' {
                self.escape = true;
            } else if ch == quote {
                self.quote = None;
            }
            return;
        }

        match ch {
            b'\'' | b'"' => self.quote = Some(ch),
            b'[' => self.bracket_depth += 1,
            b']' => self.bracket_depth = self.bracket_depth.saturating_sub(1),
            b'(' => self.paren_depth += 1,
            b')' => self.paren_depth = self.paren_depth.saturating_sub(1),
            _ => {}
        }
    }
}
