//! Ordering Comparator
//!
//! Null-aware, type-guarded three-way comparison used by range assertions.
//! Ordering is deliberately partial: values of different runtime types are
//! reported as `Less` so a range check treats them as out of range.

use std::cmp::Ordering;

use crate::errors::{Result, VeritasError};
use crate::format::format_type_name;
use crate::value::{Fault, Value};

/// Compare `x` with `y`
///
/// * null sorts below every value and equal to null
/// * different runtime types compare as `Less`
/// * built-in scalars, strings, timestamps, enums and tuples use their
///   natural order (strings are compared ordinally, NaN sorts first)
/// * user types use their generic ordering when it accepts `y`'s type,
///   else their untyped ordering
///
/// # Errors
///
/// * `Incomparable` - if the operands share a type that has no ordering
/// * `MemberFault` - if a user ordering fails
pub fn compare(x: &Value, y: &Value) -> Result<Ordering> {
    match (x.is_null(), y.is_null()) {
        (true, true) => return Ok(Ordering::Equal),
        (true, false) => return Ok(Ordering::Less),
        (false, true) => return Ok(Ordering::Greater),
        (false, false) => {}
    }

    let x_type = x.runtime_type();
    if x_type != y.runtime_type() {
        return Ok(Ordering::Less);
    }

    if let Some(result) = builtin_compare(x, y) {
        return result.map_err(VeritasError::from);
    }

    let comparable = match x {
        Value::Object(obj) => obj.comparable(),
        _ => None,
    };
    match comparable {
        Some(cmp) if cmp.comparable_to(&x_type) || cmp.is_untyped() => {
            cmp.compare_to(y).map_err(VeritasError::from)
        }
        _ => Err(VeritasError::Incomparable {
            type_name: format_type_name(&x_type),
        }),
    }
}

/// Natural order of the built-in comparable values
///
/// Returns `None` when `x` has no built-in ordering, and a fault when it
/// has one but `y` is of another type.
pub(crate) fn builtin_compare(x: &Value, y: &Value) -> Option<std::result::Result<Ordering, Fault>> {
    let ord = match (x, y) {
        (Value::I8(a), Value::I8(b)) => a.cmp(b),
        (Value::I16(a), Value::I16(b)) => a.cmp(b),
        (Value::I32(a), Value::I32(b)) => a.cmp(b),
        (Value::I64(a), Value::I64(b)) => a.cmp(b),
        (Value::U8(a), Value::U8(b)) => a.cmp(b),
        (Value::U16(a), Value::U16(b)) => a.cmp(b),
        (Value::U32(a), Value::U32(b)) => a.cmp(b),
        (Value::U64(a), Value::U64(b)) => a.cmp(b),
        (Value::F32(a), Value::F32(b)) => float_order(f64::from(*a), f64::from(*b)),
        (Value::F64(a), Value::F64(b)) => float_order(*a, *b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Char(a), Value::Char(b)) => a.cmp(b),
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        (Value::Timestamp(a), Value::Timestamp(b)) if a.type_name() == b.type_name() => {
            a.comparison_key().cmp(&b.comparison_key())
        }
        (Value::Enum(a), Value::Enum(b)) if a.enum_type() == b.enum_type() => {
            a.value().cmp(&b.value())
        }
        (Value::Tuple(a), Value::Tuple(b)) if a.len() == b.len() => {
            return Some(compare_tuples(a, b));
        }
        _ if !has_builtin_order(x) => return None,
        (_, Value::Null) => Ordering::Greater,
        _ => {
            return Some(Err(Fault::new(
                "ArgumentException",
                format!("Object must be of type {}.", x.runtime_type().short_name()),
            )))
        }
    };
    Some(Ok(ord))
}

fn has_builtin_order(value: &Value) -> bool {
    matches!(
        value,
        Value::I8(_)
            | Value::I16(_)
            | Value::I32(_)
            | Value::I64(_)
            | Value::U8(_)
            | Value::U16(_)
            | Value::U32(_)
            | Value::U64(_)
            | Value::F32(_)
            | Value::F64(_)
            | Value::Bool(_)
            | Value::Char(_)
            | Value::Str(_)
            | Value::Timestamp(_)
            | Value::Enum(_)
            | Value::Tuple(_)
    )
}

// Items of different runtime types fault rather than ordering as `Less`
fn compare_tuples(a: &[Value], b: &[Value]) -> std::result::Result<Ordering, Fault> {
    for (x, y) in a.iter().zip(b) {
        if !x.is_null() && !y.is_null() && x.runtime_type() != y.runtime_type() {
            return Err(Fault::new(
                "ArgumentException",
                format!("Object must be of type {}.", x.runtime_type().short_name()),
            ));
        }
        let ord = match compare(x, y) {
            Ok(ord) => ord,
            Err(VeritasError::MemberFault(fault)) => return Err(fault),
            Err(_) => {
                return Err(Fault::new(
                    "ArgumentException",
                    "At least one object must implement IComparable.",
                ))
            }
        };
        if ord != Ordering::Equal {
            return Ok(ord);
        }
    }
    Ok(Ordering::Equal)
}

/// Total order over floats with NaN below every number and equal to itself
pub(crate) fn float_order(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
