//! Control-plane document parsing for a real-time media server.
//!
//! External controllers and loadable modules exchange structured control
//! messages with the server as text documents. This crate turns such a
//! document into a tree of typed values and provides the accessor surface
//! callers use to read it.
//!
//! # Architecture
//!
//! - [`json`] - Document parser and value model
//! - [`error`] - Error taxonomy shared by the parser and the accessors
//!
//! # Example
//!
//! ```
//! use mediactl::parse;
//!
//! let root = parse(r#"{"volume": 65536, "muted": false}"#).unwrap();
//! let volume = root.object_get("volume").unwrap().unwrap();
//! assert_eq!(volume.as_int().unwrap(), 65536);
//! ```

// Control-plane code must not take the server down on bad input.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{JsonError, JsonResult};
pub use json::{parse, parse_with_limits, JsonKind, JsonValue, Limits};
