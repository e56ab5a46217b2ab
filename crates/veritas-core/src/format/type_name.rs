//! Display form of type names

use crate::value::TypeName;

/// Render a type the way source code spells it
///
/// Built-ins use their keyword, generic arity suffixes are stripped, array
/// ranks become bracket groups (`int[,]`), open definitions list bare commas
/// (`Dictionary<,>`) and `Nullable<X>` renders as `X?`.
pub fn format_type_name(ty: &TypeName) -> String {
    match ty {
        TypeName::Array { .. } => {
            let (element, suffix) = peel_arrays(ty);
            format!("{}{}", format_type_name(element), suffix)
        }
        TypeName::Builtin(b) => b.keyword().to_string(),
        TypeName::Named { name, args } if args.is_empty() => strip_arity(name).to_string(),
        TypeName::Named { name, args } => {
            let args: Vec<String> = args.iter().map(format_type_name).collect();
            format!("{}<{}>", strip_arity(name), args.join(", "))
        }
        TypeName::Definition { name, arity } => {
            format!("{}<{}>", strip_arity(name), ",".repeat(arity.saturating_sub(1)))
        }
        TypeName::Parameter(name) => name.clone(),
        TypeName::Nullable(inner) => format!("{}?", format_type_name(inner)),
    }
}

// Outermost rank first
fn peel_arrays(ty: &TypeName) -> (&TypeName, String) {
    let mut suffix = String::new();
    let mut current = ty;
    while let TypeName::Array { element, rank } = current {
        suffix.push('[');
        suffix.push_str(&",".repeat(rank.saturating_sub(1)));
        suffix.push(']');
        current = element;
    }
    (current, suffix)
}

fn strip_arity(name: &str) -> &str {
    match name.find('`') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}
