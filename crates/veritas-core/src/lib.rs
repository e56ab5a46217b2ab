//! Veritas core: the decision engines of an assertion library
//!
//! - [`equality`]: layered, capability-driven structural equality
//! - [`ordering`]: null-aware, type-guarded three-way comparison
//! - [`format`]: bounded, cycle-safe rendering of values for diagnostics
//! - [`lexical`]: escape sequences and whitespace classification
//! - [`assertions`]: assertion entry points built on the engines
//!
//! Operands are dynamic [`Value`]s; user types take part by implementing
//! [`Inspect`](value::Inspect) and exposing the capabilities they support.
//!
//! ```
//! use veritas_core::{equals, format, Value};
//!
//! let expected = Value::from(vec![1i32, 2, 3]);
//! let actual = Value::from(vec![1i32, 2, 3]);
//! assert!(equals(&expected, &actual));
//! assert_eq!(format(&actual), "[1, 2, 3]");
//! ```

pub mod assertions;
pub mod equality;
pub mod errors;
pub mod format;
pub mod lexical;
pub mod logging_facility;
pub mod ordering;
pub mod value;

// Schema constants used by the logging macros
pub use veritas_core_types;

pub use assertions::{
    assert_contains, assert_does_not_contain, assert_equal, assert_equal_with, assert_in_range,
    assert_not_equal, assert_not_in_range, assert_str_equal, StrEquality,
};
pub use equality::{equals, equals_with, EqualityEngine, IgnoreCase, ItemEquality};
pub use errors::{ExError, ExErrorKind, Result, VeritasError};
pub use format::{format, format_type_name};
pub use ordering::compare;
pub use value::{Fault, Inspect, Member, TypeName, Value};
