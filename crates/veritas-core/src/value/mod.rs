//! Dynamic value model
//!
//! Operands reach the engines as [`Value`]s. Every variant knows its runtime
//! type; user types join through the [`Inspect`] capability trait.

pub mod capability;
pub mod containers;
pub mod json;
pub mod type_name;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

pub use capability::{
    Comparable, Equatable, Fault, Inspect, Iterable, Member, MemberEquality, StructuralEquatable,
};
pub use containers::{
    ArrayValue, Collection, EnumType, EnumValue, MapValue, TaskHandle, TaskStatus, Timestamp,
};
pub use type_name::{Builtin, TypeName};

/// An enumerator over a value's items
pub type Items<'a> = Box<dyn Iterator<Item = Value> + 'a>;

/// Any runtime value
#[derive(Clone)]
pub enum Value {
    /// Reference null, or a defaulted nullable value
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Char(char),
    Str(String),
    Timestamp(Timestamp),
    /// A type used as a value
    Type(TypeName),
    Task(TaskHandle),
    Enum(EnumValue),
    /// An ordered iterable
    Seq(Collection),
    /// An unordered set
    Set(Collection),
    Map(MapValue),
    Array(ArrayValue),
    /// A fixed-arity heterogeneous tuple
    Tuple(Vec<Value>),
    Object(Arc<dyn Inspect>),
}

impl Value {
    /// Wrap a user type
    pub fn object<T: Inspect + 'static>(value: T) -> Self {
        Value::Object(Arc::new(value))
    }

    /// Wrap an already shared user type
    pub fn shared(value: Arc<dyn Inspect>) -> Self {
        Value::Object(value)
    }

    pub fn str(value: impl Into<String>) -> Self {
        Value::Str(value.into())
    }

    /// A `List<element>`
    pub fn list(element: TypeName, items: Vec<Value>) -> Self {
        Value::Seq(Collection::new(TypeName::list_of(element), items))
    }

    /// An ordered iterable of an arbitrary runtime type
    pub fn seq(type_name: TypeName, items: Vec<Value>) -> Self {
        Value::Seq(Collection::new(type_name, items))
    }

    /// A `HashSet<element>`
    pub fn set(element: TypeName, items: Vec<Value>) -> Self {
        Value::Set(Collection::new(TypeName::hash_set_of(element), items))
    }

    /// A set of an arbitrary runtime type
    pub fn set_of(type_name: TypeName, items: Vec<Value>) -> Self {
        Value::Set(Collection::new(type_name, items))
    }

    /// A `Dictionary<key, value>`
    pub fn map(key: TypeName, value: TypeName, entries: Vec<(Value, Value)>) -> Self {
        Value::Map(MapValue::new(TypeName::dictionary_of(key, value), entries))
    }

    /// A dictionary of an arbitrary runtime type
    pub fn map_of(type_name: TypeName, entries: Vec<(Value, Value)>) -> Self {
        Value::Map(MapValue::new(type_name, entries))
    }

    /// A one-dimensional array
    pub fn array(element: TypeName, items: Vec<Value>) -> Self {
        Value::Array(ArrayValue::vector(element, items))
    }

    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(items)
    }

    /// The user type behind an `Object`, if it is a `T` that exposes
    /// [`Inspect::as_any`]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Value::Object(obj) => obj.as_any()?.downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The value's runtime type; `object` for null
    pub fn runtime_type(&self) -> TypeName {
        match self {
            Value::Null => TypeName::object(),
            Value::Bool(_) => Builtin::Bool.into(),
            Value::I8(_) => Builtin::I8.into(),
            Value::I16(_) => Builtin::I16.into(),
            Value::I32(_) => Builtin::I32.into(),
            Value::I64(_) => Builtin::I64.into(),
            Value::U8(_) => Builtin::U8.into(),
            Value::U16(_) => Builtin::U16.into(),
            Value::U32(_) => Builtin::U32.into(),
            Value::U64(_) => Builtin::U64.into(),
            Value::F32(_) => Builtin::F32.into(),
            Value::F64(_) => Builtin::F64.into(),
            Value::Char(_) => Builtin::Char.into(),
            Value::Str(_) => Builtin::String.into(),
            Value::Timestamp(ts) => ts.type_name(),
            Value::Type(_) => TypeName::named("System.RuntimeType"),
            Value::Task(task) => task.type_name(),
            Value::Enum(e) => e.enum_type().type_name().clone(),
            Value::Seq(c) | Value::Set(c) => c.type_name().clone(),
            Value::Map(m) => m.type_name().clone(),
            Value::Array(a) => a.type_name(),
            Value::Tuple(items) => TypeName::generic(
                format!("System.Tuple`{}", items.len()),
                items.iter().map(Value::runtime_type).collect(),
            ),
            Value::Object(obj) => obj.type_name(),
        }
    }

    /// Plain value types: scalars, timestamps, enums and user types marked
    /// as such
    pub fn is_value_type(&self) -> bool {
        match self {
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
            | Value::Timestamp(_)
            | Value::Enum(_) => true,
            Value::Object(obj) => obj.is_value_type(),
            _ => false,
        }
    }

    /// Start enumerating the value's items, if it is iterable
    ///
    /// Dictionaries yield `(key, value)` tuples and strings yield their
    /// characters. `Some(Err(_))` means the value is iterable but refused to
    /// start.
    pub fn enumerate(&self) -> Option<Result<Items<'_>, Fault>> {
        match self {
            Value::Seq(c) | Value::Set(c) => Some(Ok(Box::new(c.items().iter().cloned()))),
            Value::Array(a) => Some(Ok(Box::new(a.items().iter().cloned()))),
            Value::Map(m) => Some(Ok(Box::new(
                m.entries()
                    .iter()
                    .map(|(k, v)| Value::Tuple(vec![k.clone(), v.clone()])),
            ))),
            Value::Str(s) => Some(Ok(Box::new(s.chars().map(Value::Char)))),
            Value::Object(obj) => obj.iterable().map(|it| it.enumerate()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format(self))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format(self))
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => Str,
    TypeName => Type,
    TaskHandle => Task,
    EnumValue => Enum,
    Timestamp => Timestamp,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Timestamp(Timestamp::Unspecified(value))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(Timestamp::Utc(value))
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(Timestamp::Offset(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// A `List<T>` whose element type is the items' common runtime type, or
/// `object` when they disagree
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        let element = common_type(&items);
        Value::list(element, items)
    }
}

/// The single runtime type shared by all non-null `values`, else `object`
pub fn common_type(values: &[Value]) -> TypeName {
    let Some(first) = values.first() else {
        return TypeName::object();
    };
    let ty = first.runtime_type();
    if values
        .iter()
        .all(|v| !v.is_null() && v.runtime_type() == ty)
    {
        ty
    } else {
        TypeName::object()
    }
}
