//! Byte cursor with line/column tracking

use crate::error::Pos;

/// Cursor for navigating byte input with position tracking
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Current byte without consuming
    pub fn current(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Byte `ahead` positions past the current one
    pub fn peek(&self, ahead: usize) -> Option<u8> {
        self.input.get(self.pos.saturating_add(ahead)).copied()
    }

    /// Next `len` bytes starting at the current one, if that many remain
    pub fn peek_bytes(&self, len: usize) -> Option<&'a [u8]> {
        self.input.get(self.pos..self.pos.saturating_add(len))
    }

    pub fn starts_with(&self, pattern: &[u8]) -> bool {
        self.peek_bytes(pattern.len()) == Some(pattern)
    }

    pub fn advance(&mut self) {
        if let Some(b) = self.current() {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.current() {
            if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consume byte if it matches
    pub fn consume(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.col)
    }

    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Current byte offset
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Slice from `start` up to the current offset
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}
