//! Error types for vd2svg

use std::fmt;
use thiserror::Error;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document does not contain exactly one `vector` root
    InvalidDocument { found: usize },
    /// `sweep` gradients have no SVG counterpart
    UnsupportedGradientType,
    InvalidGradientType { found: String },
    InvalidToken,
    UnexpectedEof,
    MismatchedTag { expected: String, found: String },
    DuplicateAttribute { name: String },
    MaxDepthExceeded { max: u16 },
    InvalidEntity,
    InvalidUtf8,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDocument { found } => {
                write!(f, "VectorDrawable is invalid: expected one vector root, found {found}")
            }
            Self::UnsupportedGradientType => {
                write!(f, "sweep gradient is not supported by SVG")
            }
            Self::InvalidGradientType { found } => {
                write!(f, "invalid gradient type: {found:?}")
            }
            Self::InvalidToken => write!(f, "invalid token"),
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::MismatchedTag { expected, found } => {
                write!(f, "mismatched closing tag: expected </{expected}>, found </{found}>")
            }
            Self::DuplicateAttribute { name } => write!(f, "duplicate attribute: {name}"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::InvalidEntity => write!(f, "invalid xml entity"),
            Self::InvalidUtf8 => write!(f, "invalid utf-8"),
        }
    }
}

/// Main error type for vd2svg
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    /// Error that is not tied to a position in the source text
    pub fn unlocated(kind: ErrorKind) -> Self {
        Self::new(kind, Span::empty())
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, pos: Pos) -> Self {
        Self::new(kind, Span::new(pos, pos))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span == Span::empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "error at {}: {}", self.span.start, self.message)
        }
    }
}

/// Result type alias for vd2svg
pub type Result<T> = std::result::Result<T, Error>;
