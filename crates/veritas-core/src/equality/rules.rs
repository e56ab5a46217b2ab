//! The ordered equality rules
//!
//! Each rule inspects the declared type and both operands and either decides
//! the comparison, declares itself inapplicable, or reports that a user
//! comparison member faulted. The engine tries them in [`RULES`] order and
//! the first decision wins.

use std::cmp::Ordering;
use std::sync::Arc;

use super::EqualityEngine;
use crate::ordering::{builtin_compare, float_order};
use crate::value::{Collection, Fault, Inspect, MemberEquality, TypeName, Value};

/// Outcome of a single rule
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Verdict {
    Decided(bool),
    Inapplicable,
    /// A user comparison member failed; the next rule is tried
    Faulted(Fault),
}

impl From<bool> for Verdict {
    fn from(equal: bool) -> Self {
        Verdict::Decided(equal)
    }
}

type Apply = fn(&EqualityEngine<'_>, &TypeName, &Value, &Value) -> Verdict;

pub(crate) struct Rule {
    pub name: &'static str,
    pub apply: Apply,
}

pub(crate) const RULES: [Rule; 10] = [
    Rule {
        name: "null_default",
        apply: null_default,
    },
    Rule {
        name: "equatable",
        apply: equatable,
    },
    Rule {
        name: "comparable_generic",
        apply: comparable_generic,
    },
    Rule {
        name: "comparable_untyped",
        apply: comparable_untyped,
    },
    Rule {
        name: "dictionary",
        apply: dictionary,
    },
    Rule {
        name: "set",
        apply: set,
    },
    Rule {
        name: "sequence",
        apply: sequence,
    },
    Rule {
        name: "structural",
        apply: structural,
    },
    Rule {
        name: "cross_type",
        apply: cross_type,
    },
    Rule {
        name: "object_equals",
        apply: object_equals,
    },
];

fn object(value: &Value) -> Option<&dyn Inspect> {
    match value {
        Value::Object(obj) => Some(obj.as_ref()),
        _ => None,
    }
}

fn ordering_verdict(result: Result<Ordering, Fault>) -> Verdict {
    match result {
        Ok(ord) => Verdict::Decided(ord == Ordering::Equal),
        Err(fault) => Verdict::Faulted(fault),
    }
}

/// Value equality of the built-in equatable types
///
/// `None` when `x` is not one of them. Floats treat NaN as equal to NaN and
/// `-0.0` as equal to `0.0`.
pub(crate) fn builtin_equal(x: &Value, y: &Value) -> Option<bool> {
    let equal = match (x, y) {
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::I8(a), Value::I8(b)) => a == b,
        (Value::I16(a), Value::I16(b)) => a == b,
        (Value::I32(a), Value::I32(b)) => a == b,
        (Value::I64(a), Value::I64(b)) => a == b,
        (Value::U8(a), Value::U8(b)) => a == b,
        (Value::U16(a), Value::U16(b)) => a == b,
        (Value::U32(a), Value::U32(b)) => a == b,
        (Value::U64(a), Value::U64(b)) => a == b,
        (Value::F32(a), Value::F32(b)) => {
            float_order(f64::from(*a), f64::from(*b)) == Ordering::Equal
        }
        (Value::F64(a), Value::F64(b)) => float_order(*a, *b) == Ordering::Equal,
        (Value::Char(a), Value::Char(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Timestamp(a), Value::Timestamp(b)) => {
            a.type_name() == b.type_name() && a.comparison_key() == b.comparison_key()
        }
        (Value::Enum(a), Value::Enum(b)) => {
            a.enum_type() == b.enum_type() && a.value() == b.value()
        }
        (Value::Type(a), Value::Type(b)) => a == b,
        _ if is_builtin_equatable(x) => false,
        _ => return None,
    };
    Some(equal)
}

fn is_builtin_equatable(value: &Value) -> bool {
    matches!(
        value,
        Value::Bool(_)
            | Value::I8(_)
            | Value::I16(_)
            | Value::I32(_)
            | Value::I64(_)
            | Value::U8(_)
            | Value::U16(_)
            | Value::U32(_)
            | Value::U64(_)
            | Value::F32(_)
            | Value::F64(_)
            | Value::Char(_)
            | Value::Str(_)
            | Value::Timestamp(_)
            | Value::Enum(_)
            | Value::Type(_)
    )
}

// 1. Null on either side decides: equal only when both are null.
fn null_default(_: &EqualityEngine<'_>, _: &TypeName, x: &Value, y: &Value) -> Verdict {
    if x.is_null() || y.is_null() {
        return Verdict::Decided(x.is_null() && y.is_null());
    }
    Verdict::Inapplicable
}

// 2. "Equatable to the declared type"
fn equatable(_: &EqualityEngine<'_>, declared: &TypeName, x: &Value, y: &Value) -> Verdict {
    if let Some(obj) = object(x) {
        return match obj.equatable() {
            Some(eq) if eq.equatable_to(declared) => eq.equals(y).into(),
            _ => Verdict::Inapplicable,
        };
    }
    if !declared.is_object() && *declared == x.runtime_type() {
        if let Some(equal) = builtin_equal(x, y) {
            return equal.into();
        }
    }
    Verdict::Inapplicable
}

// 3. "Comparable to the declared type"; zero means equal
fn comparable_generic(_: &EqualityEngine<'_>, declared: &TypeName, x: &Value, y: &Value) -> Verdict {
    match object(x).and_then(|obj| obj.comparable()) {
        Some(cmp) if cmp.comparable_to(declared) => ordering_verdict(cmp.compare_to(y)),
        _ => Verdict::Inapplicable,
    }
}

// 4. Untyped ordering, including the built-in orderings
fn comparable_untyped(_: &EqualityEngine<'_>, _: &TypeName, x: &Value, y: &Value) -> Verdict {
    if let Some(obj) = object(x) {
        return match obj.comparable() {
            Some(cmp) if cmp.is_untyped() => ordering_verdict(cmp.compare_to(y)),
            _ => Verdict::Inapplicable,
        };
    }
    builtin_compare(x, y).map_or(Verdict::Inapplicable, ordering_verdict)
}

// 5. Same count, and every key of `x` matched by a distinct key of `y`
// holding an equal value
fn dictionary(engine: &EqualityEngine<'_>, _: &TypeName, x: &Value, y: &Value) -> Verdict {
    let (Value::Map(left), Value::Map(right)) = (x, y) else {
        return Verdict::Inapplicable;
    };
    if left.len() != right.len() {
        return Verdict::Decided(false);
    }

    let keys = EqualityEngine::default();
    let mut matched = vec![false; right.len()];
    for (key, value) in left.entries() {
        let found = right
            .entries()
            .iter()
            .enumerate()
            .find(|(i, (other, _))| !matched[*i] && keys.equals(key, other));
        let Some((index, (_, other_value))) = found else {
            return Verdict::Decided(false);
        };
        if !engine.items_equal(value, other_value) {
            return Verdict::Decided(false);
        }
        matched[index] = true;
    }
    Verdict::Decided(matched.iter().all(|m| *m))
}

/// Set abstractions a declared type may name instead of a concrete set
const SET_CAPABILITIES: [&str; 2] = [
    "System.Collections.Generic.ISet`1",
    "System.Collections.Generic.IReadOnlySet`1",
];

fn declares_set(declared: &TypeName, left: &Collection, right: &Collection) -> bool {
    if declared == left.type_name() || declared == right.type_name() {
        return true;
    }
    matches!(declared, TypeName::Named { name, .. } if SET_CAPABILITIES.contains(&name.as_str()))
}

// 6. Unordered set equality over the declared element type; only when the
// declared type is itself a set
fn set(_: &EqualityEngine<'_>, declared: &TypeName, x: &Value, y: &Value) -> Verdict {
    let (Value::Set(left), Value::Set(right)) = (x, y) else {
        return Verdict::Inapplicable;
    };
    if !declares_set(declared, left, right) {
        return Verdict::Inapplicable;
    }
    let element = match declared.type_args() {
        [single] => single.clone(),
        _ => TypeName::object(),
    };
    let elements = EqualityEngine::default();
    let contains = |haystack: &[Value], needle: &Value| {
        haystack
            .iter()
            .any(|candidate| elements.equals_as(&element, needle, candidate))
    };
    let subset = left.items().iter().all(|a| contains(right.items(), a));
    let superset = right.items().iter().all(|b| contains(left.items(), b));
    Verdict::Decided(subset && superset)
}

// 7. Lockstep enumeration; arrays must also agree on shape
fn sequence(engine: &EqualityEngine<'_>, _: &TypeName, x: &Value, y: &Value) -> Verdict {
    let (Some(left), Some(right)) = (x.enumerate(), y.enumerate()) else {
        return Verdict::Inapplicable;
    };
    let mut left = match left {
        Ok(items) => items,
        Err(fault) => return Verdict::Faulted(fault),
    };
    let mut right = match right {
        Ok(items) => items,
        Err(fault) => return Verdict::Faulted(fault),
    };

    if let (Value::Array(a), Value::Array(b)) = (x, y) {
        if a.rank() != b.rank() || a.lengths() != b.lengths() {
            return Verdict::Decided(false);
        }
    }

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Verdict::Decided(true),
            (Some(a), Some(b)) => {
                if !engine.items_equal(&a, &b) {
                    return Verdict::Decided(false);
                }
            }
            _ => return Verdict::Decided(false),
        }
    }
}

/// Compares structural members with the engine, inferring each member's
/// declared type from the pair
struct MemberComparer<'e, 's> {
    engine: &'e EqualityEngine<'s>,
}

impl MemberEquality for MemberComparer<'_, '_> {
    fn equals(&self, x: &Value, y: &Value) -> bool {
        self.engine.equals(x, y)
    }
}

// 8. Structural members compared with the engine
fn structural(engine: &EqualityEngine<'_>, _: &TypeName, x: &Value, y: &Value) -> Verdict {
    let comparer = MemberComparer { engine };
    match x {
        Value::Tuple(items) => {
            let Value::Tuple(others) = y else {
                return Verdict::Decided(false);
            };
            if items.len() != others.len() {
                return Verdict::Decided(false);
            }
            items
                .iter()
                .zip(others)
                .all(|(a, b)| comparer.equals(a, b))
                .into()
        }
        Value::Object(obj) => match obj.structural() {
            Some(s) => s.structural_equals(y, &comparer).into(),
            None => Verdict::Inapplicable,
        },
        _ => Verdict::Inapplicable,
    }
}

// 9. Equatable or comparable to the runtime type of `y`
fn cross_type(_: &EqualityEngine<'_>, _: &TypeName, x: &Value, y: &Value) -> Verdict {
    let Some(obj) = object(x) else {
        return Verdict::Inapplicable;
    };
    let actual = y.runtime_type();
    if let Some(eq) = obj.equatable() {
        if eq.equatable_to(&actual) {
            return eq.equals(y).into();
        }
    }
    match obj.comparable() {
        Some(cmp) if cmp.comparable_to(&actual) => ordering_verdict(cmp.compare_to(y)),
        _ => Verdict::Inapplicable,
    }
}

// 10. The operand's own equality: overrides, value-type member equality,
// then identity
fn object_equals(engine: &EqualityEngine<'_>, _: &TypeName, x: &Value, y: &Value) -> Verdict {
    if let Some(equal) = builtin_equal(x, y) {
        return equal.into();
    }
    match (x, y) {
        (Value::Object(a), _) => {
            if let Some(equal) = a.object_equals(y) {
                return equal.into();
            }
            let Value::Object(b) = y else {
                return Verdict::Decided(false);
            };
            if a.is_value_type() {
                return value_type_equals(engine, a.as_ref(), b.as_ref()).into();
            }
            std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ()).into()
        }
        (Value::Task(a), Value::Task(b)) => (a == b).into(),
        _ => Verdict::Decided(false),
    }
}

// Same type and pairwise equal members
fn value_type_equals(engine: &EqualityEngine<'_>, a: &dyn Inspect, b: &dyn Inspect) -> bool {
    if a.type_name() != b.type_name() {
        return false;
    }
    let mut left = a.members();
    let mut right = b.members();
    if left.len() != right.len() {
        return false;
    }
    left.sort_by(|m, n| m.name().cmp(n.name()));
    right.sort_by(|m, n| m.name().cmp(n.name()));
    left.iter().zip(&right).all(|(m, n)| {
        m.name() == n.name()
            && match (m.get(), n.get()) {
                (Ok(v), Ok(w)) => engine.equals(&v, &w),
                _ => false,
            }
    })
}
