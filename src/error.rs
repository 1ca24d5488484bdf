//! Error taxonomy for document parsing and value access.
//!
//! Every failure the crate can report is a [`JsonError`]. Parse-side
//! variants carry the byte offset of the offending input so a controller
//! can point at the exact spot in the message it sent. Access-side
//! variants ([`TypeMismatch`](JsonError::TypeMismatch) and
//! [`IndexOutOfRange`](JsonError::IndexOutOfRange)) are produced by the
//! typed accessors on [`JsonValue`](crate::json::JsonValue).
//!
//! The first error aborts the parse; there is no recovery or
//! resynchronization mode.

use thiserror::Error;

use crate::json::JsonKind;

/// Result type used throughout the crate.
pub type JsonResult<T> = Result<T, JsonError>;

/// All errors reported by the parser and the value accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// Unexpected character or structure in the input.
    #[error("syntax error at byte {offset}")]
    Syntax {
        /// Byte offset of the unexpected input.
        offset: usize,
    },

    /// The input contained no value at all.
    #[error("no value found in input")]
    EmptyInput,

    /// A string ran to end of input without a closing quote.
    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// A raw byte outside printable ASCII appeared in a string.
    #[error("invalid character 0x{byte:02x} in string at byte {offset}")]
    InvalidCharacter {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the offending byte.
        offset: usize,
    },

    /// A `\u` escape, which this dialect does not support.
    #[error("unicode escapes are not supported (byte {offset})")]
    UnsupportedEscape {
        /// Byte offset of the backslash.
        offset: usize,
    },

    /// A backslash followed by a character outside the escape set.
    #[error("unknown escape \\{escape} at byte {offset}")]
    UnknownEscape {
        /// The character following the backslash.
        escape: char,
        /// Byte offset of the backslash.
        offset: usize,
    },

    /// An object member whose key is not a string.
    #[error("object key at byte {offset} is {found}, expected string")]
    KeyType {
        /// Kind of the value found in key position.
        found: JsonKind,
        /// Byte offset where the key started.
        offset: usize,
    },

    /// Non-whitespace input left over after a complete top-level value.
    #[error("trailing data after document at byte {offset}")]
    TrailingData {
        /// Byte offset of the first trailing character.
        offset: usize,
    },

    /// An integer literal that does not fit in an `i64`.
    #[error("integer literal at byte {offset} is out of range")]
    NumberOutOfRange {
        /// Byte offset where the literal started.
        offset: usize,
    },

    /// A typed accessor was called against the wrong kind of value.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind the accessor requires.
        expected: JsonKind,
        /// Kind the value actually has.
        found: JsonKind,
    },

    /// An array index outside `[0, len)`.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the array.
        len: usize,
    },

    /// The input buffer exceeds the configured size limit.
    #[error("input of {size} bytes exceeds limit of {limit}")]
    InputTooLarge {
        /// Size of the rejected input.
        size: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// Containers nested deeper than the configured limit.
    #[error("nesting exceeds limit of {limit} levels")]
    TooDeep {
        /// Configured maximum depth.
        limit: u32,
    },
}
