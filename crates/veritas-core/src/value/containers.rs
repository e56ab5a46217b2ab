//! Built-in composite values: collections, arrays, enums, timestamps and
//! task handles

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::{TypeName, Value};
use crate::errors::{Result, VeritasError};

/// An ordered or unordered collection with its runtime type
#[derive(Debug, Clone)]
pub struct Collection {
    type_name: TypeName,
    items: Vec<Value>,
}

impl Collection {
    pub fn new(type_name: TypeName, items: Vec<Value>) -> Self {
        Self { type_name, items }
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A dictionary-shaped container
#[derive(Debug, Clone)]
pub struct MapValue {
    type_name: TypeName,
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    pub fn new(type_name: TypeName, entries: Vec<(Value, Value)>) -> Self {
        Self { type_name, entries }
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A (possibly multi-dimensional) array stored in row-major order
#[derive(Debug, Clone)]
pub struct ArrayValue {
    element: TypeName,
    lengths: Vec<usize>,
    items: Vec<Value>,
}

impl ArrayValue {
    /// Build an array whose dimensions are `lengths`
    ///
    /// # Errors
    ///
    /// * `InvalidArrayShape` - if `lengths` is empty or its product differs
    ///   from the number of items
    pub fn new(element: TypeName, lengths: Vec<usize>, items: Vec<Value>) -> Result<Self> {
        let expected: usize = lengths.iter().product();
        if lengths.is_empty() || expected != items.len() {
            return Err(VeritasError::InvalidArrayShape {
                lengths,
                items: items.len(),
            });
        }
        Ok(Self {
            element,
            lengths,
            items,
        })
    }

    /// A one-dimensional array
    pub fn vector(element: TypeName, items: Vec<Value>) -> Self {
        Self {
            element,
            lengths: vec![items.len()],
            items,
        }
    }

    pub fn element_type(&self) -> &TypeName {
        &self.element
    }

    pub fn rank(&self) -> usize {
        self.lengths.len()
    }

    /// Length along each dimension
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn type_name(&self) -> TypeName {
        TypeName::array(self.element.clone(), self.rank())
    }
}

/// Descriptor of an enumeration type: its members and whether values
/// combine as flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    name: TypeName,
    members: Vec<(String, i64)>,
    flags: bool,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: TypeName::named(name),
            members: Vec::new(),
            flags: false,
        }
    }

    pub fn member(mut self, name: impl Into<String>, value: i64) -> Self {
        self.members.push((name.into(), value));
        self.members.sort_by_key(|(_, v)| *v as u64);
        self
    }

    /// Mark the type as a combinable flags enumeration
    pub fn flags(mut self) -> Self {
        self.flags = true;
        self
    }

    pub fn type_name(&self) -> &TypeName {
        &self.name
    }

    pub fn is_flags(&self) -> bool {
        self.flags
    }

    /// An instance of this type
    pub fn value(self: &Arc<Self>, value: i64) -> EnumValue {
        EnumValue {
            ty: Arc::clone(self),
            value,
        }
    }
}

/// An enumeration value
#[derive(Debug, Clone)]
pub struct EnumValue {
    ty: Arc<EnumType>,
    value: i64,
}

impl EnumValue {
    pub fn enum_type(&self) -> &EnumType {
        &self.ty
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// The runtime's textual conversion: the member name, `", "`-joined
    /// names for flag combinations, or the bare number when no member
    /// matches.
    pub fn runtime_name(&self) -> String {
        let members = &self.ty.members;
        if !self.ty.flags {
            return members
                .iter()
                .find(|(_, v)| *v == self.value)
                .map(|(name, _)| name.clone())
                .unwrap_or_else(|| self.value.to_string());
        }

        let original = self.value as u64;
        if original == 0 {
            return match members.first() {
                Some((name, 0)) => name.clone(),
                _ => "0".to_string(),
            };
        }

        let mut remaining = original;
        let mut names: Vec<&str> = Vec::new();
        for (name, value) in members.iter().rev() {
            let bits = *value as u64;
            if bits != 0 && remaining & bits == bits {
                remaining -= bits;
                names.push(name);
            }
        }
        if remaining != 0 {
            return self.value.to_string();
        }
        names.reverse();
        names.join(", ")
    }
}

/// A date/time value
///
/// `Unspecified` and `Utc` share the `DateTime` runtime type and compare by
/// their clock reading; `Offset` is a `DateTimeOffset` and compares by the
/// instant it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Unspecified(NaiveDateTime),
    Utc(DateTime<Utc>),
    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    pub fn type_name(&self) -> TypeName {
        match self {
            Timestamp::Unspecified(_) | Timestamp::Utc(_) => TypeName::named("System.DateTime"),
            Timestamp::Offset(_) => TypeName::named("System.DateTimeOffset"),
        }
    }

    /// The reading used for equality and ordering
    pub fn comparison_key(&self) -> NaiveDateTime {
        match self {
            Timestamp::Unspecified(naive) => *naive,
            Timestamp::Utc(utc) => utc.naive_utc(),
            Timestamp::Offset(offset) => offset.naive_utc(),
        }
    }

    /// Round-trip rendering with seven fractional digits
    pub fn round_trip(&self) -> String {
        match self {
            Timestamp::Unspecified(naive) => seven_digit(naive),
            Timestamp::Utc(utc) => format!("{}Z", seven_digit(&utc.naive_utc())),
            Timestamp::Offset(offset) => format!(
                "{}{}",
                seven_digit(&offset.naive_local()),
                offset.format("%:z")
            ),
        }
    }
}

fn seven_digit(naive: &NaiveDateTime) -> String {
    let ticks = (naive.nanosecond() % 1_000_000_000) / 100;
    format!("{}.{:07}", naive.format("%Y-%m-%dT%H:%M:%S"), ticks)
}

/// Lifecycle state of an asynchronous result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Created,
    WaitingForActivation,
    WaitingToRun,
    Running,
    WaitingForChildrenToComplete,
    RanToCompletion,
    Canceled,
    Faulted,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// A handle to an asynchronous result
///
/// Every constructed handle is a distinct task: handles are equal only when
/// one is a clone of the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHandle {
    id: u64,
    result_type: Option<TypeName>,
    status: TaskStatus,
}

impl TaskHandle {
    /// A task producing no result
    pub fn new(status: TaskStatus) -> Self {
        Self {
            id: NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed),
            result_type: None,
            status,
        }
    }

    /// A task producing a result of `result_type`
    pub fn with_result(result_type: TypeName, status: TaskStatus) -> Self {
        Self {
            id: NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed),
            result_type: Some(result_type),
            status,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn result_type(&self) -> Option<&TypeName> {
        self.result_type.as_ref()
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn type_name(&self) -> TypeName {
        match &self.result_type {
            None => TypeName::named("System.Threading.Tasks.Task"),
            Some(result) => {
                TypeName::generic("System.Threading.Tasks.Task`1", vec![result.clone()])
            }
        }
    }
}
