//! Rendering of characters, strings and numbers

use veritas_core_types::limits::MAX_STRING_LENGTH;

use crate::lexical::{escape_sequence, escape_str, is_printable};

/// Render a character literal: `'a'`, `'\t'`, `'\''`, or `0x####` when it
/// has no printable form
pub fn format_char(c: char) -> String {
    if c == '\'' {
        return "'\\''".to_string();
    }
    if let Some(seq) = escape_sequence(c) {
        return format!("'{seq}'");
    }
    if is_printable(c) {
        return format!("'{c}'");
    }
    format!("0x{:04x}", c as u32)
}

/// Render a quoted, escaped string truncated to [`MAX_STRING_LENGTH`]
/// characters
pub fn format_str(s: &str) -> String {
    let escaped = escape_str(s).replace('"', "\\\"");
    if escaped.chars().count() > MAX_STRING_LENGTH {
        let shown: String = escaped.chars().take(MAX_STRING_LENGTH).collect();
        return format!("\"{shown}...\"");
    }
    format!("\"{escaped}\"")
}

pub fn format_bool(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

pub fn format_f64(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    shortest(&format!("{f:e}"), &format!("{f}"))
}

pub fn format_f32(f: f32) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    shortest(&format!("{f:e}"), &format!("{f}"))
}

/// Pick between the positional and scientific shortest round-trip forms
///
/// Scientific notation is used for decimal exponents of 15 and above or
/// below -5, written as `1.5E+20` / `1E-07`.
fn shortest(scientific: &str, positional: &str) -> String {
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return positional.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return positional.to_string();
    };
    if (-5..15).contains(&exponent) {
        return positional.to_string();
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}E{sign}{:02}", exponent.abs())
}
