//! Assertion entry points
//!
//! Thin wrappers over the engines that turn a negative answer into a
//! [`VeritasError`] carrying both operands rendered by the value formatter.
//!
//! ## Logging Ownership
//!
//! Each assertion is an operation boundary:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The engines underneath only emit `tracing::debug!()` / `trace!()` details.

use std::cmp::Ordering;
use std::time::Instant;

use crate::equality::{EqualityEngine, ItemEquality};
use crate::errors::{Result, VeritasError};
use crate::format::{format, format_str};
use crate::lexical::{is_line_ending, is_white_space, skip_line_ending, skip_whitespace};
use crate::ordering::compare;
use crate::value::Value;
use crate::{log_op_end, log_op_error, log_op_start};

/// Options for [`assert_str_equal`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrEquality {
    pub ignore_case: bool,
    /// `\r\n`, `\r` and `\n` all match each other
    pub ignore_line_ending_differences: bool,
    /// Any run of whitespace matches any other non-empty run
    pub ignore_white_space_differences: bool,
}

fn boundary(op: &'static str, check: impl FnOnce() -> Result<()>) -> Result<()> {
    log_op_start!(op);
    let start = Instant::now();

    check().map_err(|e| {
        log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        e
    })?;

    log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
    Ok(())
}

/// Verify that two values are equal
///
/// # Errors
///
/// * `NotEqual` - if the equality engine says they differ
pub fn assert_equal(expected: &Value, actual: &Value) -> Result<()> {
    boundary("assert_equal", || {
        check_equal(EqualityEngine::default(), expected, actual)
    })
}

/// Verify that two values are equal, comparing their elements with
/// `strategy`
///
/// # Errors
///
/// * `NotEqual` - if the equality engine says they differ
pub fn assert_equal_with(
    expected: &Value,
    actual: &Value,
    strategy: &dyn ItemEquality,
) -> Result<()> {
    boundary("assert_equal_with", || {
        check_equal(EqualityEngine::new(strategy), expected, actual)
    })
}

fn check_equal(engine: EqualityEngine<'_>, expected: &Value, actual: &Value) -> Result<()> {
    if engine.equals(expected, actual) {
        return Ok(());
    }
    Err(VeritasError::NotEqual {
        expected: format(expected),
        actual: format(actual),
    })
}

/// Verify that two values differ
///
/// # Errors
///
/// * `UnexpectedlyEqual` - if the equality engine says they are equal
pub fn assert_not_equal(expected: &Value, actual: &Value) -> Result<()> {
    boundary("assert_not_equal", || {
        if !EqualityEngine::default().equals(expected, actual) {
            return Ok(());
        }
        Err(VeritasError::UnexpectedlyEqual {
            expected: format(expected),
            actual: format(actual),
        })
    })
}

/// Verify that two strings are equal under `options`
///
/// # Errors
///
/// * `StringsDiffer` - with the indices (in characters) where the walk over
///   each string stopped
pub fn assert_str_equal(expected: &str, actual: &str, options: StrEquality) -> Result<()> {
    boundary("assert_str_equal", || {
        let (expected_index, actual_index) = str_mismatch(expected, actual, options);
        let expected_len = expected.chars().count();
        let actual_len = actual.chars().count();
        if expected_index >= expected_len && actual_index >= actual_len {
            return Ok(());
        }
        Err(VeritasError::StringsDiffer {
            expected: format_str(expected),
            actual: format_str(actual),
            expected_index,
            actual_index,
        })
    })
}

// Walk both strings together; returns where each walk stopped
fn str_mismatch(expected: &str, actual: &str, options: StrEquality) -> (usize, usize) {
    let expected: Vec<char> = expected.chars().collect();
    let actual: Vec<char> = actual.chars().collect();
    let (mut i, mut j) = (0, 0);

    while i < expected.len() && j < actual.len() {
        let (e, a) = (expected[i], actual[j]);
        if options.ignore_line_ending_differences && is_line_ending(e) && is_line_ending(a) {
            i = skip_line_ending(&expected, i);
            j = skip_line_ending(&actual, j);
        } else if options.ignore_white_space_differences && is_white_space(e) && is_white_space(a)
        {
            i = skip_whitespace(&expected, i);
            j = skip_whitespace(&actual, j);
        } else {
            let same = if options.ignore_case {
                e.to_uppercase().eq(a.to_uppercase())
            } else {
                e == a
            };
            if !same {
                break;
            }
            i += 1;
            j += 1;
        }
    }
    (i, j)
}

/// Verify that `low <= actual <= high`
///
/// Values whose runtime type differs from a bound are out of range.
///
/// # Errors
///
/// * `OutOfRange` - if `actual` lies outside the bounds
/// * `Incomparable` / `MemberFault` - if the values cannot be ordered
pub fn assert_in_range(actual: &Value, low: &Value, high: &Value) -> Result<()> {
    boundary("assert_in_range", || {
        if in_range(actual, low, high)? {
            return Ok(());
        }
        Err(VeritasError::OutOfRange {
            low: format(low),
            high: format(high),
            actual: format(actual),
        })
    })
}

/// Verify that `actual` lies outside `[low, high]`
///
/// # Errors
///
/// * `UnexpectedlyInRange` - if `low <= actual <= high`
/// * `Incomparable` / `MemberFault` - if the values cannot be ordered
pub fn assert_not_in_range(actual: &Value, low: &Value, high: &Value) -> Result<()> {
    boundary("assert_not_in_range", || {
        if !in_range(actual, low, high)? {
            return Ok(());
        }
        Err(VeritasError::UnexpectedlyInRange {
            low: format(low),
            high: format(high),
            actual: format(actual),
        })
    })
}

fn in_range(actual: &Value, low: &Value, high: &Value) -> Result<bool> {
    if !same_type(low, actual) || !same_type(actual, high) {
        return Ok(false);
    }
    Ok(compare(low, actual)? != Ordering::Greater && compare(actual, high)? != Ordering::Greater)
}

fn same_type(x: &Value, y: &Value) -> bool {
    x.is_null() || y.is_null() || x.runtime_type() == y.runtime_type()
}

/// Verify that `collection` holds an item equal to `expected`
///
/// # Errors
///
/// * `NotFound` - if no item is equal
/// * `NotACollection` - if `collection` cannot be enumerated
/// * `MemberFault` - if enumeration fails to start
pub fn assert_contains(expected: &Value, collection: &Value) -> Result<()> {
    boundary("assert_contains", || {
        if contains(expected, collection)? {
            return Ok(());
        }
        Err(VeritasError::NotFound {
            expected: format(expected),
            collection: format(collection),
        })
    })
}

/// Verify that no item of `collection` equals `expected`
///
/// # Errors
///
/// * `UnexpectedlyFound` - if an item is equal
/// * `NotACollection` - if `collection` cannot be enumerated
/// * `MemberFault` - if enumeration fails to start
pub fn assert_does_not_contain(expected: &Value, collection: &Value) -> Result<()> {
    boundary("assert_does_not_contain", || {
        if !contains(expected, collection)? {
            return Ok(());
        }
        Err(VeritasError::UnexpectedlyFound {
            expected: format(expected),
            collection: format(collection),
        })
    })
}

fn contains(expected: &Value, collection: &Value) -> Result<bool> {
    let mut items = collection
        .enumerate()
        .ok_or_else(|| VeritasError::NotACollection {
            type_name: collection.runtime_type().full_name(),
        })??;
    let engine = EqualityEngine::default();
    Ok(items.any(|item| engine.equals(expected, &item)))
}
