//! Document parsing for the control protocol.
//!
//! Control messages are JSON-shaped text documents restricted to printable
//! ASCII. Parsing is whole-document and single-pass: the caller hands over
//! one in-memory buffer and gets back either the root of a fully built
//! value tree or the first error encountered, never a partial tree.
//!
//! # Architecture
//!
//! The subsystem is organized into focused modules:
//!
//! - [`types`] - The value tree and its typed accessors
//! - [`limits`] - Resource limits guarding against hostile input
//! - [`lexer`] - Byte-cursor tokenizer with escape handling
//! - [`parser`] - Recursive descent parser, one method per production
//!
//! # Example
//!
//! ```
//! use mediactl::json::{parse, JsonKind};
//!
//! let root = parse(r#"{"ports": [4713, 4714]}"#).unwrap();
//! let ports = root.object_get("ports").unwrap().unwrap();
//! assert_eq!(ports.kind(), JsonKind::Array);
//! assert_eq!(ports.array_get(1).unwrap().as_int().unwrap(), 4714);
//! ```

pub mod lexer;
pub mod limits;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use limits::Limits;
pub use parser::{parse, parse_with_limits};
pub use types::{JsonKind, JsonValue};
