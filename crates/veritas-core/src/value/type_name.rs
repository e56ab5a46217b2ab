//! Runtime type names
//!
//! A [`TypeName`] identifies the runtime type of a [`Value`](super::Value)
//! and doubles as the *declared* type of a comparison. Names keep their
//! namespace and generic arity suffix (``List`1``) exactly as the runtime
//! reports them; the formatter decides how to present them.

use serde::{Deserialize, Serialize};

/// Built-in scalar types with a keyword name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Builtin {
    Bool,
    U8,
    I8,
    Char,
    F64,
    F32,
    I32,
    U32,
    I64,
    U64,
    Object,
    I16,
    U16,
    String,
}

impl Builtin {
    /// The keyword used when rendering the type (`int`, `string`, ...)
    pub fn keyword(self) -> &'static str {
        match self {
            Builtin::Bool => "bool",
            Builtin::U8 => "byte",
            Builtin::I8 => "sbyte",
            Builtin::Char => "char",
            Builtin::F64 => "double",
            Builtin::F32 => "float",
            Builtin::I32 => "int",
            Builtin::U32 => "uint",
            Builtin::I64 => "long",
            Builtin::U64 => "ulong",
            Builtin::Object => "object",
            Builtin::I16 => "short",
            Builtin::U16 => "ushort",
            Builtin::String => "string",
        }
    }

    /// The namespace-qualified runtime name (`System.Int32`)
    pub fn full_name(self) -> &'static str {
        match self {
            Builtin::Bool => "System.Boolean",
            Builtin::U8 => "System.Byte",
            Builtin::I8 => "System.SByte",
            Builtin::Char => "System.Char",
            Builtin::F64 => "System.Double",
            Builtin::F32 => "System.Single",
            Builtin::I32 => "System.Int32",
            Builtin::U32 => "System.UInt32",
            Builtin::I64 => "System.Int64",
            Builtin::U64 => "System.UInt64",
            Builtin::Object => "System.Object",
            Builtin::I16 => "System.Int16",
            Builtin::U16 => "System.UInt16",
            Builtin::String => "System.String",
        }
    }

    pub fn is_value_type(self) -> bool {
        !matches!(self, Builtin::Object | Builtin::String)
    }
}

/// A runtime type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeName {
    /// A built-in scalar type
    Builtin(Builtin),
    /// A named type, closed over `args` when generic
    Named { name: String, args: Vec<TypeName> },
    /// An open generic type definition such as ``Dictionary`2``
    Definition { name: String, arity: usize },
    /// An unbound generic type parameter
    Parameter(String),
    /// An array of `element` with the given rank
    Array { element: Box<TypeName>, rank: usize },
    /// `Nullable<T>`
    Nullable(Box<TypeName>),
}

impl TypeName {
    pub fn object() -> Self {
        TypeName::Builtin(Builtin::Object)
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeName::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeName>) -> Self {
        TypeName::Named {
            name: name.into(),
            args,
        }
    }

    pub fn definition(name: impl Into<String>, arity: usize) -> Self {
        TypeName::Definition {
            name: name.into(),
            arity,
        }
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        TypeName::Parameter(name.into())
    }

    pub fn array(element: TypeName, rank: usize) -> Self {
        TypeName::Array {
            element: Box::new(element),
            rank: rank.max(1),
        }
    }

    pub fn nullable(inner: TypeName) -> Self {
        TypeName::Nullable(Box::new(inner))
    }

    /// ``System.Collections.Generic.List`1`` closed over `element`
    pub fn list_of(element: TypeName) -> Self {
        Self::generic("System.Collections.Generic.List`1", vec![element])
    }

    /// ``System.Collections.Generic.HashSet`1`` closed over `element`
    pub fn hash_set_of(element: TypeName) -> Self {
        Self::generic("System.Collections.Generic.HashSet`1", vec![element])
    }

    /// ``System.Collections.Generic.Dictionary`2`` closed over `key` and `value`
    pub fn dictionary_of(key: TypeName, value: TypeName) -> Self {
        Self::generic("System.Collections.Generic.Dictionary`2", vec![key, value])
    }

    pub fn is_object(&self) -> bool {
        matches!(self, TypeName::Builtin(Builtin::Object))
    }

    /// Generic type arguments of a closed type
    pub fn type_args(&self) -> &[TypeName] {
        match self {
            TypeName::Named { args, .. } => args.as_slice(),
            TypeName::Nullable(inner) => std::slice::from_ref(inner.as_ref()),
            _ => &[],
        }
    }

    /// The unqualified name including any arity suffix (``List`1``)
    pub fn short_name(&self) -> String {
        match self {
            TypeName::Builtin(b) => last_segment(b.full_name()).to_string(),
            TypeName::Named { name, .. } | TypeName::Definition { name, .. } => {
                last_segment(name).to_string()
            }
            TypeName::Parameter(name) => name.clone(),
            TypeName::Array { element, rank } => {
                format!("{}[{}]", element.short_name(), ",".repeat(rank.saturating_sub(1)))
            }
            TypeName::Nullable(_) => "Nullable`1".to_string(),
        }
    }

    /// The namespace-qualified runtime name, generic arguments in brackets
    pub fn full_name(&self) -> String {
        match self {
            TypeName::Builtin(b) => b.full_name().to_string(),
            TypeName::Named { name, args } if args.is_empty() => name.clone(),
            TypeName::Named { name, args } => {
                let args: Vec<String> = args.iter().map(TypeName::full_name).collect();
                format!("{}[{}]", name, args.join(","))
            }
            TypeName::Definition { name, .. } => name.clone(),
            TypeName::Parameter(name) => name.clone(),
            TypeName::Array { element, rank } => {
                format!("{}[{}]", element.full_name(), ",".repeat(rank.saturating_sub(1)))
            }
            TypeName::Nullable(inner) => format!("System.Nullable`1[{}]", inner.full_name()),
        }
    }
}

impl From<Builtin> for TypeName {
    fn from(builtin: Builtin) -> Self {
        TypeName::Builtin(builtin)
    }
}

fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_strips_namespace() {
        let list = TypeName::list_of(Builtin::I32.into());
        assert_eq!(list.short_name(), "List`1");
        assert_eq!(TypeName::named("Acme.Widget").short_name(), "Widget");
        assert_eq!(TypeName::from(Builtin::I32).short_name(), "Int32");
    }

    #[test]
    fn test_full_name_brackets_generic_args() {
        let list = TypeName::list_of(Builtin::I32.into());
        assert_eq!(
            list.full_name(),
            "System.Collections.Generic.List`1[System.Int32]"
        );
        let jagged = TypeName::array(Builtin::String.into(), 2);
        assert_eq!(jagged.full_name(), "System.String[,]");
    }

    #[test]
    fn test_type_args() {
        let dict = TypeName::dictionary_of(Builtin::String.into(), TypeName::object());
        assert_eq!(dict.type_args().len(), 2);
        assert!(TypeName::object().type_args().is_empty());
        let nullable = TypeName::nullable(Builtin::I32.into());
        assert_eq!(nullable.type_args(), &[TypeName::Builtin(Builtin::I32)]);
    }

    #[test]
    fn test_array_rank_is_at_least_one() {
        let arr = TypeName::array(TypeName::object(), 0);
        assert_eq!(
            arr,
            TypeName::Array {
                element: Box::new(TypeName::object()),
                rank: 1
            }
        );
    }
}
