//! The value tree produced by the parser, and its typed accessors.
//!
//! A parsed document is a tree of [`JsonValue`] nodes. A node exclusively
//! owns its children; dropping the last handle to a node tears the whole
//! subtree down. Values are immutable once the parser has returned them,
//! so a tree can be read from any number of threads without locking —
//! wrap the root in `std::sync::Arc` to share it (the reference count is
//! atomic, and a clone always requires a live handle, so a node can never
//! be revived after its last reference is gone).
//!
//! Accessor policy: a typed accessor called against the wrong kind fails
//! with [`JsonError::TypeMismatch`]. Kinds are never silently coerced.

use std::collections::HashMap;
use std::fmt;

use crate::error::{JsonError, JsonResult};

/// The discriminator selecting a [`JsonValue`]'s active payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// The null literal.
    Null,
    /// A boolean.
    Bool,
    /// A signed integer.
    Int,
    /// A floating-point number.
    Double,
    /// A printable-ASCII string.
    String,
    /// An ordered sequence of values.
    Array,
    /// A string-keyed mapping of values.
    Object,
}

impl JsonKind {
    /// Lowercase name of the kind, for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Int => "int",
            JsonKind::Double => "double",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One node of a parsed control document.
///
/// The kind and payload are fixed at construction. Objects keep their
/// members in a hash map whose iteration order is unspecified; when the
/// input contains the same key twice, the member parsed last wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// The null literal.
    #[default]
    Null,
    /// A boolean literal.
    Bool(bool),
    /// A number with neither fractional part nor exponent.
    Int(i64),
    /// A number with a fractional part or an exponent.
    Double(f64),
    /// A string, unescaped, printable ASCII plus the escape-set control
    /// characters.
    String(String),
    /// An ordered array of values (duplicates and mixed kinds allowed).
    Array(Vec<JsonValue>),
    /// A keyed collection of values.
    Object(HashMap<String, JsonValue>),
}

impl JsonValue {
    /// Returns the kind of this value. Total, never fails.
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Null => JsonKind::Null,
            JsonValue::Bool(_) => JsonKind::Bool,
            JsonValue::Int(_) => JsonKind::Int,
            JsonValue::Double(_) => JsonKind::Double,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::Object(_) => JsonKind::Object,
        }
    }

    /// Returns the kind name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, JsonValue::Int(_))
    }

    /// Returns true if this is a floating-point value.
    pub fn is_double(&self) -> bool {
        matches!(self, JsonValue::Double(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    fn mismatch(&self, expected: JsonKind) -> JsonError {
        JsonError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Returns the boolean payload, or `TypeMismatch` for any other kind.
    pub fn as_bool(&self) -> JsonResult<bool> {
        match self {
            JsonValue::Bool(b) => Ok(*b),
            other => Err(other.mismatch(JsonKind::Bool)),
        }
    }

    /// Returns the integer payload, or `TypeMismatch` for any other kind.
    ///
    /// A `Double` is not coerced, even when it holds a whole number.
    pub fn as_int(&self) -> JsonResult<i64> {
        match self {
            JsonValue::Int(n) => Ok(*n),
            other => Err(other.mismatch(JsonKind::Int)),
        }
    }

    /// Returns the floating-point payload, or `TypeMismatch` for any other
    /// kind. An `Int` is not coerced.
    pub fn as_double(&self) -> JsonResult<f64> {
        match self {
            JsonValue::Double(d) => Ok(*d),
            other => Err(other.mismatch(JsonKind::Double)),
        }
    }

    /// Returns the string payload, or `TypeMismatch` for any other kind.
    pub fn as_str(&self) -> JsonResult<&str> {
        match self {
            JsonValue::String(s) => Ok(s),
            other => Err(other.mismatch(JsonKind::String)),
        }
    }

    /// Returns the array elements, or `TypeMismatch` for any other kind.
    pub fn as_array(&self) -> JsonResult<&[JsonValue]> {
        match self {
            JsonValue::Array(a) => Ok(a),
            other => Err(other.mismatch(JsonKind::Array)),
        }
    }

    /// Returns the object members, or `TypeMismatch` for any other kind.
    pub fn as_object(&self) -> JsonResult<&HashMap<String, JsonValue>> {
        match self {
            JsonValue::Object(o) => Ok(o),
            other => Err(other.mismatch(JsonKind::Object)),
        }
    }

    /// Number of elements in an array.
    pub fn array_len(&self) -> JsonResult<usize> {
        Ok(self.as_array()?.len())
    }

    /// Element of an array by index.
    ///
    /// Fails with `IndexOutOfRange` when `index` is outside `[0, len)`.
    pub fn array_get(&self, index: usize) -> JsonResult<&JsonValue> {
        let elements = self.as_array()?;
        elements.get(index).ok_or(JsonError::IndexOutOfRange {
            index,
            len: elements.len(),
        })
    }

    /// Member of an object by key.
    ///
    /// `Ok(None)` means the key is absent; a key present with a null value
    /// yields `Ok(Some(&JsonValue::Null))`, so the two are distinguishable.
    pub fn object_get(&self, key: &str) -> JsonResult<Option<&JsonValue>> {
        Ok(self.as_object()?.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_object() -> JsonValue {
        let mut map = HashMap::new();
        map.insert("rate".to_string(), JsonValue::Int(44100));
        map.insert("muted".to_string(), JsonValue::Null);
        JsonValue::Object(map)
    }

    #[test]
    fn test_kinds() {
        assert_eq!(JsonValue::Null.kind(), JsonKind::Null);
        assert_eq!(JsonValue::Bool(true).kind(), JsonKind::Bool);
        assert_eq!(JsonValue::Int(42).kind(), JsonKind::Int);
        assert_eq!(JsonValue::Double(1.5).kind(), JsonKind::Double);
        assert_eq!(JsonValue::String("x".to_string()).kind(), JsonKind::String);
        assert_eq!(JsonValue::Array(vec![]).kind(), JsonKind::Array);
        assert_eq!(sample_object().kind(), JsonKind::Object);
    }

    #[test]
    fn test_accessors_match_kind() {
        assert_eq!(JsonValue::Bool(true).as_bool(), Ok(true));
        assert_eq!(JsonValue::Int(42).as_int(), Ok(42));
        assert_eq!(JsonValue::Double(2.5).as_double(), Ok(2.5));
        assert_eq!(JsonValue::String("hi".to_string()).as_str(), Ok("hi"));
    }

    #[test]
    fn test_no_coercion_between_numeric_kinds() {
        assert_eq!(
            JsonValue::Double(3.0).as_int(),
            Err(JsonError::TypeMismatch {
                expected: JsonKind::Int,
                found: JsonKind::Double,
            })
        );
        assert_eq!(
            JsonValue::Int(3).as_double(),
            Err(JsonError::TypeMismatch {
                expected: JsonKind::Double,
                found: JsonKind::Int,
            })
        );
    }

    #[test]
    fn test_array_get_bounds() {
        let arr = JsonValue::Array(vec![JsonValue::Int(1), JsonValue::Int(2)]);
        assert_eq!(arr.array_len(), Ok(2));
        assert_eq!(arr.array_get(1), Ok(&JsonValue::Int(2)));
        assert_eq!(
            arr.array_get(2),
            Err(JsonError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_object_get_absent_vs_null() {
        let obj = sample_object();
        // Present with a null value is not the same as absent.
        assert_eq!(obj.object_get("muted"), Ok(Some(&JsonValue::Null)));
        assert_eq!(obj.object_get("missing"), Ok(None));
    }

    #[test]
    fn test_accessor_on_wrong_kind() {
        assert_eq!(
            JsonValue::Int(1).array_len(),
            Err(JsonError::TypeMismatch {
                expected: JsonKind::Array,
                found: JsonKind::Int,
            })
        );
        assert_eq!(
            JsonValue::Null.object_get("x"),
            Err(JsonError::TypeMismatch {
                expected: JsonKind::Object,
                found: JsonKind::Null,
            })
        );
    }

    #[test]
    fn test_shared_tree_across_threads() {
        use std::sync::Arc;

        let root = Arc::new(sample_object());
        let handle = {
            let root = Arc::clone(&root);
            std::thread::spawn(move || root.object_get("rate").unwrap().unwrap().as_int())
        };
        assert_eq!(handle.join().unwrap(), Ok(44100));
        assert_eq!(root.object_get("rate").unwrap().unwrap().as_int(), Ok(44100));
    }
}
