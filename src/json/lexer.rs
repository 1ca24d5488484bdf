//! Tokenizer for control documents.
//!
//! Converts the input text into a stream of tokens for the parser. The
//! dialect is deliberately narrow: strings are printable ASCII (0x20-0x7E)
//! plus a fixed escape set, and `\u` escapes are rejected outright. A
//! literal is validated in full before its token is produced, so a
//! half-matched `false` can never surface as a boolean.
//!
//! Number tokens carry the raw literal text; classification into int or
//! double and the numeric conversion happen in the parser.

use super::limits::Limits;
use crate::error::{JsonError, JsonResult};

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// Null literal
    Null,
    /// True literal
    True,
    /// False literal
    False,
    /// String value (unescaped)
    String(String),
    /// Number literal (raw text, shape already validated)
    Number(String),
    /// End of input
    Eof,
}

/// Byte-cursor tokenizer over one whole document.
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    tok_start: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str, limits: Limits) -> JsonResult<Self> {
        if input.len() > limits.max_input_size {
            return Err(JsonError::InputTooLarge {
                size: input.len(),
                limit: limits.max_input_size,
            });
        }

        Ok(Self {
            input: input.as_bytes(),
            pos: 0,
            tok_start: 0,
        })
    }

    /// Byte offset where the most recently returned token starts.
    pub fn token_offset(&self) -> usize {
        self.tok_start
    }

    /// Peek at the current byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume and return the current byte.
    fn advance(&mut self) -> Option<u8> {
        let b = self.input.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Skip whitespace characters (space, tab, CR, LF).
    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    /// Read the next token from the input.
    pub fn next_token(&mut self) -> JsonResult<Token> {
        self.skip_whitespace();
        self.tok_start = self.pos;

        match self.peek() {
            None => Ok(Token::Eof),
            Some(b'{') => {
                self.advance();
                Ok(Token::LeftBrace)
            }
            Some(b'}') => {
                self.advance();
                Ok(Token::RightBrace)
            }
            Some(b'[') => {
                self.advance();
                Ok(Token::LeftBracket)
            }
            Some(b']') => {
                self.advance();
                Ok(Token::RightBracket)
            }
            Some(b':') => {
                self.advance();
                Ok(Token::Colon)
            }
            Some(b',') => {
                self.advance();
                Ok(Token::Comma)
            }
            Some(b'"') => self.read_string(),
            Some(b'-') | Some(b'0'..=b'9') => self.read_number(),
            Some(b'n') => self.read_literal(b"null", Token::Null),
            Some(b't') => self.read_literal(b"true", Token::True),
            Some(b'f') => self.read_literal(b"false", Token::False),
            Some(_) => Err(JsonError::Syntax { offset: self.pos }),
        }
    }

    /// Read a string token, decoding escape sequences.
    fn read_string(&mut self) -> JsonResult<Token> {
        // Consume opening quote
        self.advance();

        let mut result = String::new();

        loop {
            match self.advance() {
                None => {
                    return Err(JsonError::UnterminatedString {
                        offset: self.tok_start,
                    })
                }
                Some(b'"') => break,
                Some(b'\\') => {
                    let unescaped = self.read_escape_sequence()?;
                    result.push(unescaped);
                }
                Some(b) if (0x20..=0x7E).contains(&b) => {
                    result.push(char::from(b));
                }
                Some(b) => {
                    // Raw control characters and anything past 0x7E
                    return Err(JsonError::InvalidCharacter {
                        byte: b,
                        offset: self.pos - 1,
                    });
                }
            }
        }

        Ok(Token::String(result))
    }

    /// Read one escape sequence, positioned just past the backslash.
    fn read_escape_sequence(&mut self) -> JsonResult<char> {
        let escape_offset = self.pos - 1;

        match self.advance() {
            None => Err(JsonError::UnterminatedString {
                offset: self.tok_start,
            }),
            Some(b'"') => Ok('"'),
            Some(b'\\') => Ok('\\'),
            Some(b'/') => Ok('/'),
            Some(b'b') => Ok('\x08'),
            Some(b'f') => Ok('\x0C'),
            Some(b'n') => Ok('\n'),
            Some(b'r') => Ok('\r'),
            Some(b't') => Ok('\t'),
            Some(b'u') => Err(JsonError::UnsupportedEscape {
                offset: escape_offset,
            }),
            Some(b) => Err(JsonError::UnknownEscape {
                escape: char::from(b),
                offset: escape_offset,
            }),
        }
    }

    /// Read a number token, validating its shape.
    ///
    /// Grammar: `-? ( 0 | [1-9][0-9]* ) ( . [0-9]+ )? ( [eE] [+-]? [0-9]+ )?`
    fn read_number(&mut self) -> JsonResult<Token> {
        let start = self.pos;

        // Optional minus sign
        if self.peek() == Some(b'-') {
            self.advance();
        }

        // Integer part: a single 0, or a digit run without a leading zero
        match self.peek() {
            Some(b'0') => {
                self.advance();
                if let Some(b'0'..=b'9') = self.peek() {
                    return Err(JsonError::Syntax { offset: self.pos });
                }
            }
            Some(b'1'..=b'9') => {
                self.advance();
                while let Some(b'0'..=b'9') = self.peek() {
                    self.advance();
                }
            }
            // A lone minus is not a number
            _ => return Err(JsonError::Syntax { offset: self.pos }),
        }

        // Fractional part
        if self.peek() == Some(b'.') {
            self.advance();
            self.read_digit_run()?;
        }

        // Exponent
        if let Some(b'e') | Some(b'E') = self.peek() {
            self.advance();
            if let Some(b'+') | Some(b'-') = self.peek() {
                self.advance();
            }
            self.read_digit_run()?;
        }

        let text = std::str::from_utf8(&self.input[start..self.pos])
            .map_err(|_| JsonError::Syntax { offset: start })?;

        Ok(Token::Number(text.to_string()))
    }

    /// Require at least one digit and consume the run.
    fn read_digit_run(&mut self) -> JsonResult<()> {
        match self.peek() {
            Some(b'0'..=b'9') => {}
            _ => return Err(JsonError::Syntax { offset: self.pos }),
        }
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }
        Ok(())
    }

    /// Match a literal keyword in full, case-sensitively.
    fn read_literal(&mut self, expected: &[u8], token: Token) -> JsonResult<Token> {
        for &b in expected {
            if self.advance() != Some(b) {
                return Err(JsonError::Syntax {
                    offset: self.tok_start,
                });
            }
        }
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> JsonResult<Vec<Token>> {
        let mut lexer = Lexer::new(input, Limits::standard())?;
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            if token == Token::Eof {
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    #[test]
    fn test_structural_tokens() {
        let tokens = lex("{}[],:").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LeftBrace,
                Token::RightBrace,
                Token::LeftBracket,
                Token::RightBracket,
                Token::Comma,
                Token::Colon,
            ]
        );
    }

    #[test]
    fn test_literals() {
        let tokens = lex("null true false").unwrap();
        assert_eq!(tokens, vec![Token::Null, Token::True, Token::False]);
    }

    #[test]
    fn test_partial_literal_rejected() {
        assert_eq!(lex("tru"), Err(JsonError::Syntax { offset: 0 }));
        assert_eq!(lex("fals"), Err(JsonError::Syntax { offset: 0 }));
        assert_eq!(lex("nul"), Err(JsonError::Syntax { offset: 0 }));
        // Case-sensitive
        assert!(lex("True").is_err());
    }

    #[test]
    fn test_string_escapes() {
        let tokens = lex(r#""a\nb\tc""#).unwrap();
        assert_eq!(tokens, vec![Token::String("a\nb\tc".to_string())]);

        let tokens = lex(r#""\"\\\/\b\f\r""#).unwrap();
        assert_eq!(tokens, vec![Token::String("\"\\/\x08\x0C\r".to_string())]);
    }

    #[test]
    fn test_unicode_escape_unsupported() {
        assert_eq!(
            lex(r#""\u0041""#),
            Err(JsonError::UnsupportedEscape { offset: 1 })
        );
    }

    #[test]
    fn test_unknown_escape() {
        assert_eq!(
            lex(r#""\x""#),
            Err(JsonError::UnknownEscape {
                escape: 'x',
                offset: 1,
            })
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            lex(r#""abc"#),
            Err(JsonError::UnterminatedString { offset: 0 })
        );
        // Backslash at end of input
        assert_eq!(
            lex("\"abc\\"),
            Err(JsonError::UnterminatedString { offset: 0 })
        );
    }

    #[test]
    fn test_raw_control_character_rejected() {
        assert_eq!(
            lex("\"a\tb\""),
            Err(JsonError::InvalidCharacter {
                byte: 0x09,
                offset: 2,
            })
        );
    }

    #[test]
    fn test_non_ascii_rejected() {
        // 0xC3 0xA9 is the UTF-8 encoding of 'é'
        let result = lex("\"caf\u{e9}\"");
        assert_eq!(
            result,
            Err(JsonError::InvalidCharacter {
                byte: 0xC3,
                offset: 4,
            })
        );
    }

    #[test]
    fn test_integer_tokens() {
        let tokens = lex("42 -123 0 -0").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number("42".to_string()),
                Token::Number("-123".to_string()),
                Token::Number("0".to_string()),
                Token::Number("-0".to_string()),
            ]
        );
    }

    #[test]
    fn test_double_tokens() {
        let tokens = lex("3.14 0.5 1e10 1E+2 2.5e-3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number("3.14".to_string()),
                Token::Number("0.5".to_string()),
                Token::Number("1e10".to_string()),
                Token::Number("1E+2".to_string()),
                Token::Number("2.5e-3".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_numbers_rejected() {
        assert!(lex("-").is_err());
        assert!(lex("01").is_err());
        assert!(lex("1.").is_err());
        assert!(lex("1e").is_err());
        assert!(lex("1e+").is_err());
        assert!(lex(".5").is_err());
    }

    #[test]
    fn test_input_too_large() {
        let limits = Limits {
            max_input_size: 10,
            ..Limits::standard()
        };
        assert_eq!(
            Lexer::new("this is more than 10 bytes", limits).err(),
            Some(JsonError::InputTooLarge {
                size: 26,
                limit: 10,
            })
        );
    }
}
