//! Recursive descent parser for control documents.
//!
//! One method per grammar production, pulling tokens from the lexer on
//! demand. Each production either returns a fully built [`JsonValue`] or
//! an error; a partially built subtree is dropped on the spot when a
//! production fails, so no half-built value ever reaches a caller.
//!
//! Tokens are pulled lazily so that nothing past the root value is
//! scanned until the root is complete: whatever follows it, tokenizable
//! or not, is reported as trailing data rather than a syntax error.
//!
//! Number classification: a literal with a fractional part or an exponent
//! becomes a `Double`, anything else an `Int`. Conversion parses the full
//! literal text directly rather than recombining digit accumulators, so
//! no precision is lost on the way to `f64`; an integer literal that does
//! not fit in an `i64` fails the parse rather than wrapping.

use std::collections::HashMap;

use tracing::debug;

use super::lexer::{Lexer, Token};
use super::limits::Limits;
use super::types::JsonValue;
use crate::error::{JsonError, JsonResult};

/// Recursive descent parser over the token stream.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Token>,
    limits: Limits,
    depth: u32,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str, limits: Limits) -> JsonResult<Self> {
        Ok(Self {
            lexer: Lexer::new(input, limits)?,
            peeked: None,
            limits,
            depth: 0,
        })
    }

    /// Parse a whole document: one value, then end of input.
    pub fn parse(&mut self) -> JsonResult<JsonValue> {
        if matches!(self.peek()?, Token::Eof) {
            return Err(JsonError::EmptyInput);
        }

        let value = self.parse_value()?;

        if !matches!(self.peek(), Ok(Token::Eof)) {
            return Err(JsonError::TrailingData {
                offset: self.lexer.token_offset(),
            });
        }

        Ok(value)
    }

    /// Consume and return the next token.
    fn next(&mut self) -> JsonResult<Token> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.lexer.next_token(),
        }
    }

    /// Look at the next token without consuming it.
    fn peek(&mut self) -> JsonResult<&Token> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token()?);
        }
        match &self.peeked {
            Some(token) => Ok(token),
            // Just filled above
            None => Err(JsonError::EmptyInput),
        }
    }

    /// Byte offset of the most recently lexed token.
    fn offset(&self) -> usize {
        self.lexer.token_offset()
    }

    /// Parse a single value.
    fn parse_value(&mut self) -> JsonResult<JsonValue> {
        let token = self.next()?;
        let offset = self.offset();

        match token {
            Token::Null => Ok(JsonValue::Null),
            Token::True => Ok(JsonValue::Bool(true)),
            Token::False => Ok(JsonValue::Bool(false)),
            Token::String(s) => Ok(JsonValue::String(s)),
            Token::Number(text) => parse_number_literal(&text, offset),
            Token::LeftBrace => self.parse_object(),
            Token::LeftBracket => self.parse_array(),
            // Eof, closers, colon, comma: nothing that starts a value
            _ => Err(JsonError::Syntax { offset }),
        }
    }

    /// Parse an object, the opening brace already consumed.
    ///
    /// `{}` is a valid empty object. A duplicate key overwrites the
    /// earlier member (last wins).
    fn parse_object(&mut self) -> JsonResult<JsonValue> {
        self.enter()?;

        let mut map = HashMap::new();

        if matches!(self.peek()?, Token::RightBrace) {
            self.next()?;
            self.leave();
            return Ok(JsonValue::Object(map));
        }

        loop {
            // The key position holds a value that must be a string
            self.peek()?;
            let key_offset = self.offset();
            let key = match self.parse_value()? {
                JsonValue::String(s) => s,
                other => {
                    return Err(JsonError::KeyType {
                        found: other.kind(),
                        offset: key_offset,
                    })
                }
            };

            if !matches!(self.next()?, Token::Colon) {
                return Err(JsonError::Syntax {
                    offset: self.offset(),
                });
            }

            let value = self.parse_value()?;
            map.insert(key, value);

            match self.next()? {
                Token::Comma => {}
                Token::RightBrace => break,
                _ => {
                    return Err(JsonError::Syntax {
                        offset: self.offset(),
                    })
                }
            }
        }

        self.leave();
        Ok(JsonValue::Object(map))
    }

    /// Parse an array, the opening bracket already consumed.
    ///
    /// `[]` and `[ ]` are valid empty arrays.
    fn parse_array(&mut self) -> JsonResult<JsonValue> {
        self.enter()?;

        let mut elements = Vec::new();

        if matches!(self.peek()?, Token::RightBracket) {
            self.next()?;
            self.leave();
            return Ok(JsonValue::Array(elements));
        }

        loop {
            elements.push(self.parse_value()?);

            match self.next()? {
                Token::Comma => {}
                Token::RightBracket => break,
                _ => {
                    return Err(JsonError::Syntax {
                        offset: self.offset(),
                    })
                }
            }
        }

        self.leave();
        Ok(JsonValue::Array(elements))
    }

    /// Enter a container, enforcing the nesting limit.
    fn enter(&mut self) -> JsonResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(JsonError::TooDeep {
                limit: self.limits.max_nesting_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Classify and convert one validated number literal.
fn parse_number_literal(text: &str, offset: usize) -> JsonResult<JsonValue> {
    let is_double = text.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'));

    if is_double {
        let value: f64 = text.parse().map_err(|_| JsonError::Syntax { offset })?;
        Ok(JsonValue::Double(value))
    } else {
        let value: i64 = text
            .parse()
            .map_err(|_| JsonError::NumberOutOfRange { offset })?;
        Ok(JsonValue::Int(value))
    }
}

/// Parse a control document with the standard limits.
pub fn parse(input: &str) -> JsonResult<JsonValue> {
    parse_with_limits(input, Limits::standard())
}

/// Parse a control document with custom limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> JsonResult<JsonValue> {
    let result = Parser::new(input, limits).and_then(|mut parser| parser.parse());
    if let Err(err) = &result {
        debug!(%err, "control document rejected");
    }
    result
}
