//! Value Formatter
//!
//! Renders any [`Value`] as a bounded, human-readable string for failure
//! diagnostics. Rendering is depth-limited and truncated according to
//! [`TRUNCATION_POLICY`](veritas_core_types::TRUNCATION_POLICY), so cyclic
//! object graphs and unbounded sequences always terminate. Formatting never
//! fails: a fault raised by a user type becomes a placeholder string.
//!
//! ## Dispatch
//!
//! 1. null
//! 2. characters
//! 3. timestamps (round-trip form)
//! 4. strings (escaped, quoted, truncated)
//! 5. task handles
//! 6. types (`typeof(...)`)
//! 7. iterables (`[a, b, ...]`)
//! 8. enums (flag names joined with `" | "`)
//! 9. types with their own textual conversion
//! 10. plain value types
//! 11. structural dump (`Name { A = 1, B = 2 }`)

mod scalars;
mod type_name;

use veritas_core_types::limits::{MAX_DEPTH, MAX_ENUMERABLE_LENGTH, MAX_OBJECT_MEMBER_COUNT};
use veritas_core_types::schema::{EVENT_PLACEHOLDER, FIELD_FAULT, FIELD_TYPE_NAME};

use crate::value::{Fault, Inspect, Items, Value};

pub use scalars::{format_bool, format_char, format_f32, format_f64, format_str};
pub use type_name::format_type_name;

/// Render `value` for display
pub fn format(value: &Value) -> String {
    format_at(value, 1)
}

fn format_at(value: &Value, depth: usize) -> String {
    or_placeholder(value, try_format(value, depth))
}

fn or_placeholder(value: &Value, rendered: Result<String, Fault>) -> String {
    match rendered {
        Ok(rendered) => rendered,
        Err(fault) => {
            let type_name = value.runtime_type().full_name();
            tracing::debug!(
                component = module_path!(),
                op = "format",
                event = EVENT_PLACEHOLDER,
                { FIELD_FAULT } = %fault,
                { FIELD_TYPE_NAME } = %type_name,
            );
            format!(
                "{} was thrown formatting an object of type \"{}\"",
                fault.type_name(),
                type_name
            )
        }
    }
}

fn try_format(value: &Value, depth: usize) -> Result<String, Fault> {
    let rendered = match value {
        Value::Null => "null".to_string(),
        Value::Char(c) => format_char(*c),
        Value::Timestamp(ts) => ts.round_trip(),
        Value::Str(s) => format_str(s),
        Value::Task(task) => {
            let name = match task.result_type() {
                None => "Task".to_string(),
                Some(result) => format!("Task<{}>", format_type_name(result)),
            };
            format!("{} {{ Status = {} }}", name, task.status())
        }
        Value::Type(ty) => format!("typeof({})", format_type_name(ty)),
        Value::Seq(_) | Value::Set(_) | Value::Array(_) => {
            format_iterable(value, depth, format_at)?
        }
        Value::Map(_) => format_iterable(value, depth, format_entry)?,
        Value::Enum(e) => e.runtime_name().replace(", ", " | "),
        Value::Tuple(_) => display_text(value)?,
        Value::Bool(b) => format_bool(*b).to_string(),
        Value::I8(n) => n.to_string(),
        Value::I16(n) => n.to_string(),
        Value::I32(n) => n.to_string(),
        Value::I64(n) => n.to_string(),
        Value::U8(n) => n.to_string(),
        Value::U16(n) => n.to_string(),
        Value::U32(n) => n.to_string(),
        Value::U64(n) => n.to_string(),
        Value::F32(f) => format_f32(*f),
        Value::F64(f) => format_f64(*f),
        Value::Object(obj) => return format_object(value, obj.as_ref(), depth),
    };
    Ok(rendered)
}

fn format_object(value: &Value, obj: &dyn Inspect, depth: usize) -> Result<String, Fault> {
    if obj.iterable().is_some() {
        return format_iterable(value, depth, format_at);
    }
    if let Some(display) = obj.display() {
        return display;
    }
    if obj.is_value_type() {
        return Ok(obj.type_name().full_name());
    }
    Ok(format_members(obj, depth))
}

/// `[a, b, c]`; at the depth limit `[...]` without starting enumeration
fn format_iterable(
    value: &Value,
    depth: usize,
    render: fn(&Value, usize) -> String,
) -> Result<String, Fault> {
    if depth == MAX_DEPTH {
        return Ok("[...]".to_string());
    }
    match value.enumerate() {
        Some(items) => Ok(format_items(items?, depth, render)),
        None => Ok(String::new()),
    }
}

/// At most [`MAX_ENUMERABLE_LENGTH`] items followed by `...`
///
/// Only one item past the limit is pulled from `items`, so unbounded
/// sequences are safe.
fn format_items(items: Items<'_>, depth: usize, render: fn(&Value, usize) -> String) -> String {
    let taken: Vec<Value> = items.take(MAX_ENUMERABLE_LENGTH + 1).collect();
    let mut parts: Vec<String> = taken
        .iter()
        .take(MAX_ENUMERABLE_LENGTH)
        .map(|item| render(item, depth + 1))
        .collect();
    if taken.len() > MAX_ENUMERABLE_LENGTH {
        parts.push("...".to_string());
    }
    format!("[{}]", parts.join(", "))
}

// Dictionary entries arrive as (key, value) tuples and render as `[key, value]`
// from the display text of each half
fn format_entry(entry: &Value, depth: usize) -> String {
    match entry {
        Value::Tuple(pair) if pair.len() == 2 => {
            or_placeholder(entry, entry_text(&pair[0], &pair[1]))
        }
        other => format_at(other, depth),
    }
}

fn entry_text(key: &Value, value: &Value) -> Result<String, Fault> {
    Ok(format!("[{}, {}]", display_text(key)?, display_text(value)?))
}

/// A value's own textual conversion, as tuples and dictionary entries show
/// their parts: strings and characters unquoted, null as nothing, and
/// containers or tasks by their runtime type name
fn display_text(value: &Value) -> Result<String, Fault> {
    let text = match value {
        Value::Null => String::new(),
        Value::Str(s) => s.clone(),
        Value::Char(c) => c.to_string(),
        Value::Enum(e) => e.runtime_name(),
        Value::Type(ty) => ty.full_name(),
        Value::Tuple(items) => {
            let items = items
                .iter()
                .map(display_text)
                .collect::<Result<Vec<_>, _>>()?;
            format!("({})", items.join(", "))
        }
        Value::Object(obj) => match obj.display() {
            Some(display) => display?,
            None => obj.type_name().full_name(),
        },
        Value::Seq(_) | Value::Set(_) | Value::Map(_) | Value::Array(_) | Value::Task(_) => {
            value.runtime_type().full_name()
        }
        _ => try_format(value, MAX_DEPTH)?,
    };
    Ok(text)
}

/// `Name { A = 1, B = 2 }`, members in ordinal name order
///
/// A member whose accessor (or rendering) faults shows as
/// `(throws FaultType)`. At the depth limit no accessor is invoked.
fn format_members(obj: &dyn Inspect, depth: usize) -> String {
    let type_name = obj.type_name().short_name();
    if depth == MAX_DEPTH {
        return format!("{type_name} {{ ... }}");
    }

    let mut members = obj.members();
    if members.is_empty() {
        return format!("{type_name} {{ }}");
    }
    members.sort_by(|a, b| a.name().cmp(b.name()));

    let mut parts: Vec<String> = members
        .iter()
        .take(MAX_OBJECT_MEMBER_COUNT)
        .map(|member| {
            let rendered = member
                .get()
                .and_then(|v| try_format(&v, depth + 1))
                .unwrap_or_else(|fault| format!("(throws {})", fault.type_name()));
            format!("{} = {}", member.name(), rendered)
        })
        .collect();
    if members.len() > MAX_OBJECT_MEMBER_COUNT {
        parts.push("...".to_string());
    }
    format!("{} {{ {} }}", type_name, parts.join(", "))
}
