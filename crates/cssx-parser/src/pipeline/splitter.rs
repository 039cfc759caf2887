//! Pipeline sugar splitting
//!
//! Cuts `base >> :call() >> :call()` at every `>>` that sits outside
//! strings, brackets and parens.

use crate::scanner::{trim_ws, ScanState};

/// A raw slice of the input between `>>` boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Offset of `text` in the original input
    pub start: usize,
}

impl<'a> Segment<'a> {
    /// Strip surrounding whitespace, keeping `start` pointed at the first
    /// remaining byte
    pub fn trimmed(&self) -> Segment<'a> {
        let (text, leading) = trim_ws(self.text);
        Segment {
            text,
            start: self.start + leading,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Split `input` on top-level `>>`.
///
/// Returns `None` when no such token exists, so the caller can skip
/// pipeline mode entirely.
pub fn split_pipeline_segments(input: &str) -> Option<Vec<Segment<'_>>> {
    let bytes = input.as_bytes();
    let mut state = ScanState::default();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let ch = bytes[i];
        if ch == b'>' && state.at_top_level() && bytes.get(i + 1) == Some(&b'>') {
            segments.push(Segment {
                text: &input[start..i],
                start,
            });
            i += 2;
            start = i;
            continue;
        }
        state.advance(ch);
        i += 1;
    }

    if segments.is_empty() {
        return None;
    }
    segments.push(Segment {
        text: &input[start..],
        start,
    });
    log::trace!("split pipeline into {} segments", segments.len());
    Some(segments)
}
