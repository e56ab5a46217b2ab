//! Equality Engine
//!
//! Decides whether two values are equal under a layered, capability-driven
//! notion of equality. Rules are tried in a fixed precedence order; the
//! first one that decides wins. A user comparison member that faults never
//! aborts the comparison: its rule is skipped and the next one is tried.
//!
//! ## Item equality
//!
//! Container elements, dictionary values and nested structural members are
//! compared through an [`ItemEquality`] strategy. The same strategy instance
//! is used at every nesting level of one comparison, so a custom strategy
//! (for example [`IgnoreCase`]) applies transitively.

mod rules;

use veritas_core_types::schema::{EVENT_FALLTHROUGH, FIELD_FAULT, FIELD_RULE};

use crate::value::{TypeName, Value};

use rules::{Verdict, RULES};

/// How two container elements are compared
///
/// `None` means "no opinion": the engine compares the pair itself and keeps
/// using this strategy for anything nested inside it.
pub trait ItemEquality {
    fn equals(&self, x: &Value, y: &Value) -> Option<bool>;
}

impl<F> ItemEquality for F
where
    F: Fn(&Value, &Value) -> Option<bool>,
{
    fn equals(&self, x: &Value, y: &Value) -> Option<bool> {
        self(x, y)
    }
}

/// Defers every pair to the engine
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultItemEquality;

impl ItemEquality for DefaultItemEquality {
    fn equals(&self, _: &Value, _: &Value) -> Option<bool> {
        None
    }
}

/// Compares strings case-insensitively and defers everything else
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreCase;

impl ItemEquality for IgnoreCase {
    fn equals(&self, x: &Value, y: &Value) -> Option<bool> {
        match (x, y) {
            (Value::Str(a), Value::Str(b)) => Some(a.to_lowercase() == b.to_lowercase()),
            (Value::Char(a), Value::Char(b)) => Some(a.to_lowercase().eq(b.to_lowercase())),
            _ => None,
        }
    }
}

static DEFAULT_ITEM_EQUALITY: DefaultItemEquality = DefaultItemEquality;

/// One comparison session: the item strategy shared by every nested
/// comparison
#[derive(Clone, Copy)]
pub struct EqualityEngine<'s> {
    strategy: &'s dyn ItemEquality,
}

impl Default for EqualityEngine<'static> {
    fn default() -> Self {
        Self {
            strategy: &DEFAULT_ITEM_EQUALITY,
        }
    }
}

impl<'s> EqualityEngine<'s> {
    pub fn new(strategy: &'s dyn ItemEquality) -> Self {
        Self { strategy }
    }

    /// Compare `x` and `y` declared as their shared runtime type, or
    /// `object` when they differ
    pub fn equals(&self, x: &Value, y: &Value) -> bool {
        self.equals_as(&declared_type(x, y), x, y)
    }

    /// Compare `x` and `y` as values of the `declared` type
    pub fn equals_as(&self, declared: &TypeName, x: &Value, y: &Value) -> bool {
        for rule in &RULES {
            match (rule.apply)(self, declared, x, y) {
                Verdict::Decided(equal) => {
                    tracing::trace!(
                        component = module_path!(),
                        op = "equals",
                        { FIELD_RULE } = rule.name,
                        equal,
                    );
                    return equal;
                }
                Verdict::Inapplicable => {}
                Verdict::Faulted(fault) => {
                    tracing::debug!(
                        component = module_path!(),
                        op = "equals",
                        event = EVENT_FALLTHROUGH,
                        { FIELD_RULE } = rule.name,
                        { FIELD_FAULT } = %fault,
                    );
                }
            }
        }
        false
    }

    /// Compare two elements through the session's strategy
    pub(crate) fn items_equal(&self, x: &Value, y: &Value) -> bool {
        match self.strategy.equals(x, y) {
            Some(equal) => equal,
            None => self.equals_as(&TypeName::object(), x, y),
        }
    }
}

/// The declared type of a top-level pair: their common runtime type, or
/// `object`
pub fn declared_type(x: &Value, y: &Value) -> TypeName {
    if x.is_null() || y.is_null() {
        return TypeName::object();
    }
    let ty = x.runtime_type();
    if ty == y.runtime_type() {
        ty
    } else {
        TypeName::object()
    }
}

/// Are `expected` and `actual` equal?
pub fn equals(expected: &Value, actual: &Value) -> bool {
    EqualityEngine::default().equals(expected, actual)
}

/// Are `expected` and `actual` equal, comparing their elements with
/// `strategy`?
pub fn equals_with(expected: &Value, actual: &Value, strategy: &dyn ItemEquality) -> bool {
    EqualityEngine::new(strategy).equals(expected, actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Builtin;

    #[test]
    fn test_scalars() {
        assert!(equals(&Value::I32(1), &Value::I32(1)));
        assert!(!equals(&Value::I32(1), &Value::I32(2)));
        assert!(!equals(&Value::I32(1), &Value::I64(1)));
        assert!(equals(&Value::F64(f64::NAN), &Value::F64(f64::NAN)));
        assert!(equals(&Value::from("a"), &Value::from("a")));
    }

    #[test]
    fn test_nulls() {
        assert!(equals(&Value::Null, &Value::Null));
        assert!(!equals(&Value::Null, &Value::from("")));
        assert!(!equals(&Value::I32(0), &Value::Null));
    }

    #[test]
    fn test_sequences() {
        assert!(equals(&Value::from(vec![1i32, 2]), &Value::from(vec![1i32, 2])));
        assert!(!equals(&Value::from(vec![1i32, 2]), &Value::from(vec![2i32, 1])));
        assert!(!equals(&Value::from(vec![1i32]), &Value::from(vec![1i32, 1])));
    }

    #[test]
    fn test_list_equals_array_with_same_items() {
        let list = Value::from(vec![1i32, 2]);
        let array = Value::array(Builtin::I32.into(), vec![Value::I32(1), Value::I32(2)]);
        assert!(equals(&list, &array));
    }

    #[test]
    fn test_strategy_applies_to_nested_items() {
        let x = Value::from(vec![Value::from(vec!["A", "b"])]);
        let y = Value::from(vec![Value::from(vec!["a", "B"])]);
        assert!(!equals(&x, &y));
        assert!(equals_with(&x, &y, &IgnoreCase));
    }

    #[test]
    fn test_strategy_not_applied_to_top_level_pair() {
        assert!(!equals_with(&Value::from("A"), &Value::from("a"), &IgnoreCase));
    }

    #[test]
    fn test_closure_strategy() {
        let within_one = |x: &Value, y: &Value| match (x, y) {
            (Value::I32(a), Value::I32(b)) => Some((a - b).abs() <= 1),
            _ => None,
        };
        let x = Value::from(vec![1i32, 5]);
        let y = Value::from(vec![2i32, 4]);
        assert!(equals_with(&x, &y, &within_one));
    }

    #[test]
    fn test_declared_type() {
        assert_eq!(
            declared_type(&Value::I32(1), &Value::I32(2)),
            TypeName::Builtin(Builtin::I32)
        );
        assert!(declared_type(&Value::I32(1), &Value::from("x")).is_object());
        assert!(declared_type(&Value::Null, &Value::I32(1)).is_object());
    }
}
