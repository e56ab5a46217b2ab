//! Fixture types exercising each capability a user type can expose

#![allow(dead_code)]

use std::any::Any;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Arc, Weak};

use veritas_core::value::{
    Comparable, Equatable, Fault, Inspect, Iterable, Member, MemberEquality, StructuralEquatable,
    TypeName, Value,
};

/// An object whose `Self` property points back at itself
pub struct Looped {
    me: Weak<Looped>,
}

pub fn looped() -> Value {
    let looped = Arc::new_cyclic(|me| Looped { me: me.clone() });
    Value::Object(looped)
}

impl Inspect for Looped {
    fn type_name(&self) -> TypeName {
        TypeName::named("Acme.Looped")
    }

    fn members(&self) -> Vec<Member<'_>> {
        vec![Member::new("Self", || {
            self.me
                .upgrade()
                .map(|me| Value::Object(me))
                .ok_or_else(|| Fault::new("ObjectDisposedException", "gone"))
        })]
    }
}

/// An object with one property whose getter always fails
pub struct Throwing;

impl Inspect for Throwing {
    fn type_name(&self) -> TypeName {
        TypeName::named("Acme.Throwing")
    }

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::field("Ok", 1i32),
            Member::new("Boom", || {
                Err(Fault::new("DivideByZeroException", "Attempted to divide by zero."))
            }),
        ]
    }
}

/// An object with more members than the formatter shows
pub struct Widget;

impl Inspect for Widget {
    fn type_name(&self) -> TypeName {
        TypeName::named("Acme.Widget")
    }

    fn members(&self) -> Vec<Member<'_>> {
        ["G", "C", "A", "F", "B", "E", "D"]
            .iter()
            .map(|name| Member::field(*name, name.chars().next().map_or(0, |c| c as i32 - 64)))
            .collect()
    }
}

/// Equatable to itself, with its own textual conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    pub amount: i64,
    pub currency: &'static str,
}

impl Money {
    pub fn value(amount: i64, currency: &'static str) -> Value {
        Value::object(Money { amount, currency })
    }

    fn money_type() -> TypeName {
        TypeName::named("Acme.Money")
    }
}

impl Equatable for Money {
    fn equatable_to(&self, ty: &TypeName) -> bool {
        *ty == Money::money_type()
    }

    fn equals(&self, other: &Value) -> bool {
        other.downcast_ref::<Money>() == Some(self)
    }
}

impl Inspect for Money {
    fn type_name(&self) -> TypeName {
        Money::money_type()
    }

    fn display(&self) -> Option<Result<String, Fault>> {
        Some(Ok(format!("{} {}", self.amount, self.currency)))
    }

    fn equatable(&self) -> Option<&dyn Equatable> {
        Some(self)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

/// Generic ordering against other versions; faults on anything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(pub u32, pub u32);

impl Version {
    pub fn value(major: u32, minor: u32) -> Value {
        Value::object(Version(major, minor))
    }
}

impl Comparable for Version {
    fn comparable_to(&self, ty: &TypeName) -> bool {
        *ty == TypeName::named("Acme.Version") || ty.is_object()
    }

    fn compare_to(&self, other: &Value) -> Result<Ordering, Fault> {
        other
            .downcast_ref::<Version>()
            .map(|other| self.cmp(other))
            .ok_or_else(|| Fault::new("ArgumentException", "Object must be of type Version."))
    }
}

impl Inspect for Version {
    fn type_name(&self) -> TypeName {
        TypeName::named("Acme.Version")
    }

    fn display(&self) -> Option<Result<String, Fault>> {
        Some(Ok(format!("{}.{}", self.0, self.1)))
    }

    fn comparable(&self) -> Option<&dyn Comparable> {
        Some(self)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

/// Untyped ordering that always fails
pub struct Moody;

impl Comparable for Moody {
    fn comparable_to(&self, _: &TypeName) -> bool {
        false
    }

    fn is_untyped(&self) -> bool {
        true
    }

    fn compare_to(&self, _: &Value) -> Result<Ordering, Fault> {
        Err(Fault::new("InvalidOperationException", "Moody objects refuse to compare"))
    }
}

impl Inspect for Moody {
    fn type_name(&self) -> TypeName {
        TypeName::named("Acme.Moody")
    }

    fn comparable(&self) -> Option<&dyn Comparable> {
        Some(self)
    }
}

/// Structural equality over two members
pub struct Pair {
    pub left: Value,
    pub right: Value,
}

impl Pair {
    pub fn value(left: impl Into<Value>, right: impl Into<Value>) -> Value {
        Value::object(Pair {
            left: left.into(),
            right: right.into(),
        })
    }
}

impl StructuralEquatable for Pair {
    fn structural_equals(&self, other: &Value, comparer: &dyn MemberEquality) -> bool {
        match other.downcast_ref::<Pair>() {
            Some(other) => {
                comparer.equals(&self.left, &other.left) && comparer.equals(&self.right, &other.right)
            }
            None => false,
        }
    }
}

impl Inspect for Pair {
    fn type_name(&self) -> TypeName {
        TypeName::named("Acme.Pair")
    }

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Left", || Ok(self.left.clone())),
            Member::new("Right", || Ok(self.right.clone())),
        ]
    }

    fn structural(&self) -> Option<&dyn StructuralEquatable> {
        Some(self)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

/// Tracks how many of its enumerators are open and how many were started
pub struct Counted {
    items: Vec<Value>,
    pub open: Arc<AtomicUsize>,
    pub started: Arc<AtomicUsize>,
}

impl Counted {
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items,
            open: Arc::new(AtomicUsize::new(0)),
            started: Arc::new(AtomicUsize::new(0)),
        }
    }
}

struct CountedItems<'a> {
    inner: std::slice::Iter<'a, Value>,
    open: Arc<AtomicUsize>,
}

impl Iterator for CountedItems<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.inner.next().cloned()
    }
}

impl Drop for CountedItems<'_> {
    fn drop(&mut self) {
        self.open.fetch_sub(1, AtomicOrdering::SeqCst);
    }
}

impl Iterable for Counted {
    fn enumerate(&self) -> Result<Box<dyn Iterator<Item = Value> + '_>, Fault> {
        self.open.fetch_add(1, AtomicOrdering::SeqCst);
        self.started.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(Box::new(CountedItems {
            inner: self.items.iter(),
            open: Arc::clone(&self.open),
        }))
    }
}

impl Inspect for Counted {
    fn type_name(&self) -> TypeName {
        TypeName::named("Acme.Counted")
    }

    fn iterable(&self) -> Option<&dyn Iterable> {
        Some(self)
    }
}

/// An endless sequence of integers
pub struct Naturals;

impl Iterable for Naturals {
    fn enumerate(&self) -> Result<Box<dyn Iterator<Item = Value> + '_>, Fault> {
        Ok(Box::new((0i64..).map(Value::I64)))
    }
}

impl Inspect for Naturals {
    fn type_name(&self) -> TypeName {
        TypeName::named("Acme.Naturals")
    }

    fn iterable(&self) -> Option<&dyn Iterable> {
        Some(self)
    }
}

/// An iterable that refuses to start
pub struct Sealed;

impl Iterable for Sealed {
    fn enumerate(&self) -> Result<Box<dyn Iterator<Item = Value> + '_>, Fault> {
        Err(Fault::new("InvalidOperationException", "sealed"))
    }
}

impl Inspect for Sealed {
    fn type_name(&self) -> TypeName {
        TypeName::named("Acme.Sealed")
    }

    fn iterable(&self) -> Option<&dyn Iterable> {
        Some(self)
    }
}

/// Its textual conversion always fails
pub struct Exploding;

impl Inspect for Exploding {
    fn type_name(&self) -> TypeName {
        TypeName::named("Acme.Exploding")
    }

    fn display(&self) -> Option<Result<String, Fault>> {
        Some(Err(Fault::new("FormatException", "bad format")))
    }
}

/// A plain value type: equal when its members are
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn value(x: i32, y: i32) -> Value {
        Value::object(Point { x, y })
    }
}

impl Inspect for Point {
    fn type_name(&self) -> TypeName {
        TypeName::named("Acme.Point")
    }

    fn is_value_type(&self) -> bool {
        true
    }

    fn members(&self) -> Vec<Member<'_>> {
        vec![Member::field("X", self.x), Member::field("Y", self.y)]
    }
}
