//! Resource limits for document parsing.
//!
//! Control documents come from external controllers, so the parser never
//! trusts their size or shape. The depth limit bounds parser recursion;
//! the input limit bounds allocation for a single message.

/// Resource limits applied to one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes.
    pub max_input_size: usize,
    /// Maximum nesting depth for arrays and objects.
    pub max_nesting_depth: u32,
}

impl Limits {
    /// Default limits for control messages.
    ///
    /// Control documents are small; anything past these bounds is either a
    /// bug in the sender or an attack.
    pub const fn standard() -> Self {
        Self {
            max_input_size: 1024 * 1024, // 1 MiB
            max_nesting_depth: 64,
        }
    }

    /// No limits, for callers that already bound their input.
    pub const fn unbounded() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_nesting_depth: u32::MAX,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::standard()
    }
}
