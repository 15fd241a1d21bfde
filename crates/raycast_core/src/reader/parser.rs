//! Scene description parser.
//!
//! A single forward pass over the input with one byte of lookahead.
//!
//! # Supported Syntax
//!
//! - `[ object, object, ... ]` with an optional trailing comma
//! - `{ "type": "camera" | "sphere" | "plane", "key": value, ... }`
//! - numbers: decimal floating point literals
//! - vectors: `[number, number, number]`
//! - strings: up to 128 printable ASCII characters, no escapes

use raycast_math::DVec3;
use thiserror::Error;

use super::types::*;
use crate::scene::Scene;

/// Longest string the reader accepts, in bytes.
pub const MAX_STRING_LEN: usize = 128;

/// Errors that can occur while reading a scene description.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Syntax error at line {line}, column {column}: {kind}")]
    Syntax {
        line: usize,
        column: usize,
        kind: SyntaxErrorKind,
    },

    #[error("Error at line {line}, column {column}: {kind}")]
    Semantic {
        line: usize,
        column: usize,
        kind: SemanticErrorKind,
    },

    #[error("Invalid {property} {value} at line {line}, column {column}")]
    Validation {
        line: usize,
        column: usize,
        property: Property,
        value: PropertyValue,
    },
}

impl ParseError {
    /// Line the error was detected on (1-based).
    pub fn line(&self) -> usize {
        match self {
            ParseError::Syntax { line, .. }
            | ParseError::Semantic { line, .. }
            | ParseError::Validation { line, .. } => *line,
        }
    }
}

/// Grammar violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("expected {expected:?}, found {found:?}")]
    Expected { expected: char, found: char },

    #[error("expected string, found {0:?}")]
    ExpectedString(char),

    #[error("strings longer than {MAX_STRING_LEN} characters are not supported")]
    StringTooLong,

    #[error("strings with escape codes are not supported")]
    EscapeSequence,

    #[error("strings may contain only printable ascii characters")]
    NonAsciiString,

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("expected \"type\" key, found {0:?}")]
    ExpectedTypeKey(String),

    #[error("expected ',' or '}}', found {0:?}")]
    ExpectedPropertySeparator(char),

    #[error("expected ',' or ']', found {0:?}")]
    ExpectedObjectSeparator(char),

    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("unexpected content {0:?} after the closing ']'")]
    TrailingContent(char),
}

/// Violations of the object model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticErrorKind {
    #[error("second camera found")]
    DuplicateCamera,

    #[error("unknown type {0:?}")]
    UnknownType(String),

    #[error("unknown property {0:?}")]
    UnknownProperty(String),

    #[error("{property} applied to {kind} object")]
    PropertyNotApplicable { property: Property, kind: ObjectKind },

    #[error("{property} given twice on {kind} object")]
    DuplicateProperty { property: Property, kind: ObjectKind },

    #[error("{kind} object is missing {property}")]
    MissingProperty { property: Property, kind: ObjectKind },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    line: usize,
    column: usize,
}

impl Position {
    fn syntax(self, kind: SyntaxErrorKind) -> ParseError {
        ParseError::Syntax {
            line: self.line,
            column: self.column,
            kind,
        }
    }

    fn semantic(self, kind: SemanticErrorKind) -> ParseError {
        ParseError::Semantic {
            line: self.line,
            column: self.column,
            kind,
        }
    }

    fn validation(self, property: Property, value: PropertyValue) -> ParseError {
        ParseError::Validation {
            line: self.line,
            column: self.column,
            property,
            value,
        }
    }
}

/// Scene description reader.
///
/// Owns the cursor and the line/column counters used in diagnostics.
pub struct SceneReader<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> SceneReader<'a> {
    /// Create a new reader over the scene text.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Parse the whole input into a scene.
    pub fn parse(mut self) -> ParseResult<Scene> {
        let mut scene = Scene::new();

        self.skip_ws();
        self.expect(b'[')?;
        self.skip_ws();

        loop {
            // `]` here closes an empty array or follows a trailing comma
            match self.peek_or_eof()? {
                b']' => {
                    self.bump();
                    break;
                }
                b'{' => {
                    self.bump();
                    self.parse_object(&mut scene)?;
                }
                _ => {
                    return Err(self.position().syntax(SyntaxErrorKind::UnexpectedChar(self.current_char())));
                }
            }

            self.skip_ws();
            match self.peek_or_eof()? {
                b',' => {
                    self.bump();
                    self.skip_ws();
                }
                b']' => {
                    self.bump();
                    break;
                }
                _ => {
                    return Err(self
                        .position()
                        .syntax(SyntaxErrorKind::ExpectedObjectSeparator(self.current_char())));
                }
            }
        }

        self.skip_ws();
        if self.peek().is_some() {
            return Err(self.position().syntax(SyntaxErrorKind::TrailingContent(self.current_char())));
        }

        Ok(scene)
    }

    /// Parse one object body. The opening brace has been consumed.
    fn parse_object(&mut self, scene: &mut Scene) -> ParseResult<()> {
        self.skip_ws();

        let key_pos = self.position();
        let key = self.next_string()?;
        if key != "type" {
            return Err(key_pos.syntax(SyntaxErrorKind::ExpectedTypeKey(key.to_string())));
        }

        self.skip_ws();
        self.expect(b':')?;
        self.skip_ws();

        let type_pos = self.position();
        let type_name = self.next_string()?;
        let kind = ObjectKind::from_type_name(type_name)
            .ok_or_else(|| type_pos.semantic(SemanticErrorKind::UnknownType(type_name.to_string())))?;

        if kind == ObjectKind::Camera && scene.camera.is_some() {
            return Err(type_pos.semantic(SemanticErrorKind::DuplicateCamera));
        }

        let mut builder = ObjectBuilder::new(kind);

        self.skip_ws();
        let close_pos = loop {
            let pos = self.position();
            match self.peek_or_eof()? {
                b'}' => {
                    self.bump();
                    break pos;
                }
                b',' => {
                    self.bump();
                    self.skip_ws();
                    self.parse_property(&mut builder)?;
                    self.skip_ws();
                }
                _ => {
                    return Err(pos.syntax(SyntaxErrorKind::ExpectedPropertySeparator(self.current_char())));
                }
            }
        };

        match builder.finish() {
            Ok(SceneObject::Camera(camera)) => {
                log::debug!(
                    "Camera {}x{} on line {}",
                    camera.width,
                    camera.height,
                    type_pos.line
                );
                scene.camera = Some(camera);
            }
            Ok(SceneObject::Shape(shape)) => {
                log::debug!(
                    "Shape #{} ({}) at {:?} on line {}",
                    scene.shapes.len(),
                    shape.kind_name(),
                    shape.position(),
                    type_pos.line
                );
                scene.shapes.push(shape);
            }
            Err(property) => {
                return Err(close_pos.semantic(SemanticErrorKind::MissingProperty { property, kind }));
            }
        }

        Ok(())
    }

    /// Parse `"key": value` and apply it to the object being built.
    fn parse_property(&mut self, builder: &mut ObjectBuilder) -> ParseResult<()> {
        let key_pos = self.position();
        let key = self.next_string()?;

        self.skip_ws();
        self.expect(b':')?;
        self.skip_ws();

        let property = Property::from_key(key)
            .ok_or_else(|| key_pos.semantic(SemanticErrorKind::UnknownProperty(key.to_string())))?;

        let value_pos = self.position();
        let value = match property.value_kind() {
            ValueKind::Number => PropertyValue::Number(self.next_number()?),
            ValueKind::Vector => PropertyValue::Vector(self.next_vector()?),
        };

        let kind = builder.kind();
        builder.apply(property, value).map_err(|rejection| match rejection {
            Rejection::NotApplicable => {
                key_pos.semantic(SemanticErrorKind::PropertyNotApplicable { property, kind })
            }
            Rejection::Duplicate => key_pos.semantic(SemanticErrorKind::DuplicateProperty { property, kind }),
            Rejection::Invalid => value_pos.validation(property, value),
        })
    }

    /// Read a double-quoted string.
    fn next_string(&mut self) -> ParseResult<&'a str> {
        match self.peek_or_eof()? {
            b'"' => self.bump(),
            _ => return Err(self.position().syntax(SyntaxErrorKind::ExpectedString(self.current_char()))),
        }

        let start = self.pos;
        loop {
            let c = self.peek_or_eof()?;
            if c == b'"' {
                break;
            }
            if self.pos - start >= MAX_STRING_LEN {
                return Err(self.position().syntax(SyntaxErrorKind::StringTooLong));
            }
            if c == b'\\' {
                return Err(self.position().syntax(SyntaxErrorKind::EscapeSequence));
            }
            if !(32..=126).contains(&c) {
                return Err(self.position().syntax(SyntaxErrorKind::NonAsciiString));
            }
            self.bump();
        }

        // Every byte in the range is printable ASCII, so both ends are char boundaries
        let text = self.text;
        let value = &text[start..self.pos];
        self.bump();
        Ok(value)
    }

    /// Read a floating point literal.
    fn next_number(&mut self) -> ParseResult<f64> {
        let start_pos = self.position();
        let start = self.pos;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || matches!(c, b'+' | b'-' | b'.' | b'e' | b'E') {
                self.bump();
            } else {
                break;
            }
        }

        if start == self.pos {
            self.peek_or_eof()?;
            return Err(start_pos.syntax(SyntaxErrorKind::InvalidNumber(self.current_char().to_string())));
        }

        let literal = &self.text[start..self.pos];
        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(start_pos.syntax(SyntaxErrorKind::InvalidNumber(literal.to_string()))),
        }
    }

    /// Read a vector like `[1, 2, 3]`.
    fn next_vector(&mut self) -> ParseResult<DVec3> {
        self.expect(b'[')?;
        self.skip_ws();
        let x = self.next_number()?;
        self.skip_ws();
        self.expect(b',')?;
        self.skip_ws();
        let y = self.next_number()?;
        self.skip_ws();
        self.expect(b',')?;
        self.skip_ws();
        let z = self.next_number()?;
        self.skip_ws();
        self.expect(b']')?;

        Ok(DVec3::new(x, y, z))
    }

    /// Consume `expected` or fail without consuming anything.
    fn expect(&mut self, expected: u8) -> ParseResult<()> {
        let found = self.peek_or_eof()?;
        if found != expected {
            return Err(self.position().syntax(SyntaxErrorKind::Expected {
                expected: expected as char,
                found: self.current_char(),
            }));
        }
        self.bump();
        Ok(())
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_ascii_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Full character at the cursor, for diagnostics.
    fn current_char(&self) -> char {
        self.text
            .get(self.pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn peek_or_eof(&self) -> ParseResult<u8> {
        self.peek()
            .ok_or_else(|| self.position().syntax(SyntaxErrorKind::UnexpectedEof))
    }

    /// Advance past the current byte, keeping line and column in step.
    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += 1;
            if c == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

/// Parse a scene description string.
pub fn read_scene(text: &str) -> ParseResult<Scene> {
    SceneReader::new(text).parse()
}
