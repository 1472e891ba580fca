//! XML reader

use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, Result, Span};
use crate::xml::cursor::Cursor;
use crate::xml::model::{Attributes, Content, Document, Element};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Limits applied while reading a document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum element nesting depth (0 means unlimited)
    pub max_depth: u16,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

impl ParserConfig {
    /// Config without a nesting limit
    pub const fn unlimited() -> Self {
        Self { max_depth: 0 }
    }

    pub const fn new(max_depth: u16) -> Self {
        Self { max_depth }
    }
}

/// XML parser
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: ParserConfig,
    depth: u16,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &'a [u8], config: ParserConfig) -> Self {
        let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
        Self {
            cursor: Cursor::new(input),
            config,
            depth: 0,
        }
    }

    /// Parse a document. Several top-level elements are accepted; deciding
    /// which of them matter is left to the caller.
    pub fn parse(&mut self) -> Result<Document> {
        let mut elements = Vec::new();

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() {
                break;
            }

            if self.skip_markup()? {
                continue;
            }

            if self.cursor.current() == Some(b'<') {
                elements.push(self.parse_element()?);
                continue;
            }

            return Err(self.error_here(ErrorKind::InvalidToken, "text outside of root element"));
        }

        Ok(Document { elements })
    }

    /// Skip a comment, processing instruction or declaration at the cursor.
    /// Returns false when the cursor is not at one.
    fn skip_markup(&mut self) -> Result<bool> {
        if self.cursor.starts_with(b"<!--") {
            self.cursor.advance_by(4);
            self.skip_until(b"-->")?;
            return Ok(true);
        }

        if self.cursor.starts_with(b"<?") {
            self.cursor.advance_by(2);
            self.skip_until(b"?>")?;
            return Ok(true);
        }

        if self.cursor.starts_with(b"<!") && !self.cursor.starts_with(b"<![CDATA[") {
            self.cursor.advance_by(2);
            self.skip_until(b">")?;
            return Ok(true);
        }

        Ok(false)
    }

    fn parse_element(&mut self) -> Result<Element> {
        self.expect_byte(b'<')?;

        if self.cursor.current() == Some(b'/') {
            return Err(self.error_here(ErrorKind::InvalidToken, "unexpected closing tag"));
        }

        self.increment_depth()?;
        let name = self.parse_name()?;
        let attributes = self.parse_attributes()?;

        if self.cursor.consume(b'/') {
            self.expect_byte(b'>')?;
            self.depth = self.depth.saturating_sub(1);
            return Ok(Element {
                name,
                attributes,
                children: Vec::new(),
            });
        }

        self.expect_byte(b'>')?;

        let mut children = Vec::new();
        loop {
            if self.cursor.starts_with(b"</") {
                self.cursor.advance_by(2);
                let close_name = self.parse_name()?;
                if close_name != name {
                    return Err(Error::at(
                        ErrorKind::MismatchedTag {
                            expected: name,
                            found: close_name,
                        },
                        self.cursor.position(),
                    ));
                }
                self.cursor.skip_whitespace();
                self.expect_byte(b'>')?;
                self.depth = self.depth.saturating_sub(1);
                break;
            }

            if self.cursor.starts_with(b"<![CDATA[") {
                self.cursor.advance_by(9);
                let text = self.take_until(b"]]>")?;
                children.push(Content::Text(text));
                continue;
            }

            if self.skip_markup()? {
                continue;
            }

            if self.cursor.current() == Some(b'<') {
                let child = self.parse_element()?;
                children.push(Content::Element(child));
                continue;
            }

            if self.cursor.is_eof() {
                return Err(self.error_here(ErrorKind::UnexpectedEof, "unterminated element"));
            }

            if let Some(text) = self.parse_text()? {
                children.push(Content::Text(text));
            }
        }

        Ok(Element {
            name,
            attributes,
            children,
        })
    }

    fn parse_attributes(&mut self) -> Result<Attributes> {
        let mut attrs = IndexMap::new();

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                Some(b'/') | Some(b'>') => break,
                Some(_) => {}
                None => return Err(self.error_here(ErrorKind::UnexpectedEof, "unexpected end of input")),
            }

            let name = self.parse_name()?;
            self.cursor.skip_whitespace();
            self.expect_byte(b'=')?;
            self.cursor.skip_whitespace();
            let value = self.parse_attribute_value()?;

            if attrs.contains_key(&name) {
                return Err(Error::at(
                    ErrorKind::DuplicateAttribute { name },
                    self.cursor.position(),
                ));
            }
            attrs.insert(name, value);
        }

        Ok(attrs)
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.cursor.current() {
            Some(b'"') => b'"',
            Some(b'\'') => b'\'',
            _ => return Err(self.error_here(ErrorKind::InvalidToken, "expected quoted attribute value")),
        };
        self.cursor.advance();

        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == quote {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance();
                let text = bytes_to_string(raw)?;
                return decode_entities(&text);
            }
            self.cursor.advance();
        }

        Err(self.error_here(ErrorKind::UnexpectedEof, "unterminated attribute value"))
    }

    fn parse_text(&mut self) -> Result<Option<String>> {
        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == b'<' {
                break;
            }
            self.cursor.advance();
        }

        let raw = self.cursor.slice_from(start);
        let text = bytes_to_string(raw)?;
        let text = decode_entities(&text)?;

        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }

    fn parse_name(&mut self) -> Result<String> {
        let start = self.cursor.pos();

        match self.cursor.current() {
            Some(first) if is_name_start(first) => self.cursor.advance(),
            Some(_) => return Err(self.error_here(ErrorKind::InvalidToken, "expected name")),
            None => return Err(self.error_here(ErrorKind::UnexpectedEof, "expected name")),
        }

        while let Some(b) = self.cursor.current() {
            if is_name_char(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }

        bytes_to_string(self.cursor.slice_from(start))
    }

    fn skip_until(&mut self, pattern: &[u8]) -> Result<()> {
        self.take_until(pattern).map(|_| ())
    }

    /// Consume input up to and including `pattern`, returning what preceded it
    fn take_until(&mut self, pattern: &[u8]) -> Result<String> {
        let start = self.cursor.pos();
        while !self.cursor.is_eof() {
            if self.cursor.starts_with(pattern) {
                let text = bytes_to_string(self.cursor.slice_from(start))?;
                self.cursor.advance_by(pattern.len());
                return Ok(text);
            }
            self.cursor.advance();
        }
        Err(self.error_here(ErrorKind::UnexpectedEof, "unterminated markup"))
    }

    fn increment_depth(&mut self) -> Result<()> {
        if self.config.max_depth > 0 && self.depth >= self.config.max_depth {
            return Err(Error::at(
                ErrorKind::MaxDepthExceeded {
                    max: self.config.max_depth,
                },
                self.cursor.position(),
            ));
        }
        self.depth = self.depth.saturating_add(1);
        Ok(())
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        if self.cursor.consume(expected) {
            Ok(())
        } else if self.cursor.is_eof() {
            Err(self.error_here(ErrorKind::UnexpectedEof, "unexpected end of input"))
        } else {
            Err(self.error_here(ErrorKind::InvalidToken, "unexpected token"))
        }
    }

    fn error_here(&self, kind: ErrorKind, message: &str) -> Error {
        let pos = self.cursor.position();
        Error::with_message(kind, Span::new(pos, pos), message)
    }
}

fn bytes_to_string(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|_| Error::unlocated(ErrorKind::InvalidUtf8))
}

fn is_name_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_' | b':') || b >= 0x80
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || matches!(b, b'0'..=b'9' | b'-' | b'.')
}

fn decode_entities(input: &str) -> Result<String> {
    if !input.contains('&') {
        return Ok(input.to_string());
    }

    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch != '&' {
            result.push(ch);
            continue;
        }

        let mut entity = String::new();
        for next in chars.by_ref() {
            if next == ';' {
                break;
            }
            entity.push(next);
        }

        let decoded = match entity.as_str() {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => decode_numeric_entity(&entity),
        };

        match decoded {
            Some(ch) => result.push(ch),
            None => return Err(Error::unlocated(ErrorKind::InvalidEntity)),
        }
    }

    Ok(result)
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        None
    }
}
