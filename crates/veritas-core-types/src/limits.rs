//! Truncation policy for rendered values
//!
//! These limits bound the cost of formatting any value, including cyclic
//! object graphs and unbounded sequences. They are fixed for the lifetime
//! of the process; failure messages depend on the exact values.

use serde::{Deserialize, Serialize};

/// Maximum nesting depth before containers render as `[...]` and objects as `{ ... }`
pub const MAX_DEPTH: usize = 3;

/// Maximum number of collection items rendered before `...`
pub const MAX_ENUMERABLE_LENGTH: usize = 5;

/// Maximum number of object fields/properties rendered before `...`
pub const MAX_OBJECT_MEMBER_COUNT: usize = 5;

/// Maximum number of (escaped) string characters rendered before `...`
pub const MAX_STRING_LENGTH: usize = 50;

/// The complete set of truncation limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncationPolicy {
    pub max_depth: usize,
    pub max_enumerable_length: usize,
    pub max_object_member_count: usize,
    pub max_string_length: usize,
}

/// The policy applied by the value formatter
pub const TRUNCATION_POLICY: TruncationPolicy = TruncationPolicy {
    max_depth: MAX_DEPTH,
    max_enumerable_length: MAX_ENUMERABLE_LENGTH,
    max_object_member_count: MAX_OBJECT_MEMBER_COUNT,
    max_string_length: MAX_STRING_LENGTH,
};

impl Default for TruncationPolicy {
    fn default() -> Self {
        TRUNCATION_POLICY
    }
}
