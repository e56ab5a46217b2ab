//! Capabilities a user type may expose to the engines
//!
//! A type participates in equality and formatting by implementing
//! [`Inspect`]. Every capability is optional and checked at runtime; a type
//! that exposes nothing still compares by identity and renders as a
//! structural dump of its (possibly empty) member list.

use std::any::Any;
use std::cmp::Ordering;

use thiserror::Error;

use super::{TypeName, Value};

/// A failure raised by a user-supplied member (a getter, a comparison or a
/// textual conversion)
///
/// `type_name` names the failure the way an exception type would
/// (`InvalidOperationException`); it is what diagnostics display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{type_name}: {message}")]
pub struct Fault {
    type_name: String,
    message: String,
}

impl Fault {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// The failure's type name
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A public field or property: a name and a lazy accessor
///
/// Accessors are only invoked when the formatter actually renders the
/// member, so a depth-limited dump never touches them.
pub struct Member<'a> {
    name: String,
    getter: Box<dyn Fn() -> Result<Value, Fault> + 'a>,
}

impl<'a> Member<'a> {
    pub fn new(
        name: impl Into<String>,
        getter: impl Fn() -> Result<Value, Fault> + 'a,
    ) -> Self {
        Self {
            name: name.into(),
            getter: Box::new(getter),
        }
    }

    /// A member whose accessor always yields `value`
    pub fn field(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(name, move || Ok(value.clone()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the accessor
    pub fn get(&self) -> Result<Value, Fault> {
        (self.getter)()
    }
}

impl std::fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Member").field("name", &self.name).finish()
    }
}

/// "Equatable to T" for every `T` accepted by [`Equatable::equatable_to`]
pub trait Equatable {
    fn equatable_to(&self, ty: &TypeName) -> bool;

    fn equals(&self, other: &Value) -> bool;
}

/// Ordering against other values
///
/// `comparable_to` answers the generic "comparable to T" question;
/// `is_untyped` marks the non-generic form that accepts any operand and is
/// expected to fail on operands of an unexpected shape.
pub trait Comparable {
    fn comparable_to(&self, ty: &TypeName) -> bool;

    fn is_untyped(&self) -> bool {
        false
    }

    fn compare_to(&self, other: &Value) -> Result<Ordering, Fault>;
}

/// The per-member comparer handed to [`StructuralEquatable::structural_equals`]
pub trait MemberEquality {
    fn equals(&self, x: &Value, y: &Value) -> bool;
}

/// Compares all structural members with a supplied comparer
pub trait StructuralEquatable {
    fn structural_equals(&self, other: &Value, comparer: &dyn MemberEquality) -> bool;
}

/// A type that can be enumerated
///
/// Starting the enumeration may fail. The returned enumerator is released
/// when dropped, on every exit path of the caller.
pub trait Iterable {
    fn enumerate(&self) -> Result<Box<dyn Iterator<Item = Value> + '_>, Fault>;
}

/// The runtime face of a user type
pub trait Inspect: Send + Sync {
    fn type_name(&self) -> TypeName;

    /// Plain value types render through their default textual conversion
    /// rather than a member dump.
    fn is_value_type(&self) -> bool {
        false
    }

    /// Public instance fields and readable properties, in any order
    fn members(&self) -> Vec<Member<'_>> {
        Vec::new()
    }

    /// The type's own textual conversion, when it defines one
    fn display(&self) -> Option<Result<String, Fault>> {
        None
    }

    /// The type's own `Equals(object)` override; identity when absent
    fn object_equals(&self, _other: &Value) -> Option<bool> {
        None
    }

    fn equatable(&self) -> Option<&dyn Equatable> {
        None
    }

    fn comparable(&self) -> Option<&dyn Comparable> {
        None
    }

    fn structural(&self) -> Option<&dyn StructuralEquatable> {
        None
    }

    fn iterable(&self) -> Option<&dyn Iterable> {
        None
    }

    /// The concrete value, for capabilities that need to read the other
    /// operand; see [`Value::downcast_ref`]
    fn as_any(&self) -> Option<&dyn Any> {
        None
    }
}
