//! Character classification and escaping
//!
//! Pure helpers shared by the value formatter (escape sequences,
//! printability) and by string assertions (line endings, whitespace runs).

/// The canonical escape sequence for a control character, if it has one
pub fn escape_sequence(c: char) -> Option<&'static str> {
    match c {
        '\t' => Some("\\t"),
        '\n' => Some("\\n"),
        '\u{0B}' => Some("\\v"),
        '\u{07}' => Some("\\a"),
        '\r' => Some("\\r"),
        '\u{0C}' => Some("\\f"),
        '\u{08}' => Some("\\b"),
        '\0' => Some("\\0"),
        '\\' => Some("\\\\"),
        _ => None,
    }
}

/// Escape every character of `s` for display
///
/// Known control characters use their escape sequence, other characters
/// below `0x20` render as `\x##`, and the two non-character code points
/// `U+FFFE`/`U+FFFF` as `\x####`. Quotes are left alone.
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if let Some(seq) = escape_sequence(c) {
            out.push_str(seq);
        } else if (c as u32) < 0x20 {
            out.push_str(&format!("\\x{:02x}", c as u32));
        } else if is_non_character(c) {
            out.push_str(&format!("\\x{:04x}", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}

fn is_non_character(c: char) -> bool {
    matches!(c, '\u{FFFE}' | '\u{FFFF}')
}

// Punctuation and symbol blocks outside ASCII
const PUNCTUATION_AND_SYMBOLS: &[(char, char)] = &[
    ('\u{00A1}', '\u{00AC}'),
    ('\u{00AE}', '\u{00B1}'),
    ('\u{00B4}', '\u{00B4}'),
    ('\u{00B6}', '\u{00B8}'),
    ('\u{00BB}', '\u{00BB}'),
    ('\u{00BF}', '\u{00BF}'),
    ('\u{00D7}', '\u{00D7}'),
    ('\u{00F7}', '\u{00F7}'),
    ('\u{02C2}', '\u{02C5}'),
    ('\u{02D2}', '\u{02DF}'),
    ('\u{037E}', '\u{037E}'),
    ('\u{0387}', '\u{0387}'),
    ('\u{055A}', '\u{055F}'),
    ('\u{0589}', '\u{058A}'),
    ('\u{05BE}', '\u{05BE}'),
    ('\u{05C0}', '\u{05C0}'),
    ('\u{05C3}', '\u{05C3}'),
    ('\u{05C6}', '\u{05C6}'),
    ('\u{05F3}', '\u{05F4}'),
    ('\u{0606}', '\u{060F}'),
    ('\u{061B}', '\u{061B}'),
    ('\u{061D}', '\u{061F}'),
    ('\u{066A}', '\u{066D}'),
    ('\u{06D4}', '\u{06D4}'),
    ('\u{0964}', '\u{0965}'),
    ('\u{0970}', '\u{0970}'),
    ('\u{0E3F}', '\u{0E3F}'),
    ('\u{0E4F}', '\u{0E4F}'),
    ('\u{0E5A}', '\u{0E5B}'),
    ('\u{0F04}', '\u{0F12}'),
    ('\u{104A}', '\u{104F}'),
    ('\u{10FB}', '\u{10FB}'),
    ('\u{1360}', '\u{1368}'),
    ('\u{166E}', '\u{166E}'),
    ('\u{169B}', '\u{169C}'),
    ('\u{16EB}', '\u{16ED}'),
    ('\u{17D4}', '\u{17D6}'),
    ('\u{17D8}', '\u{17DB}'),
    ('\u{1800}', '\u{180A}'),
    ('\u{2010}', '\u{2027}'),
    ('\u{2030}', '\u{205E}'),
    ('\u{207A}', '\u{207E}'),
    ('\u{208A}', '\u{208E}'),
    ('\u{20A0}', '\u{20C0}'),
    ('\u{2100}', '\u{214F}'),
    ('\u{2190}', '\u{23FF}'),
    ('\u{2500}', '\u{2775}'),
    ('\u{2794}', '\u{2BFF}'),
    ('\u{2E00}', '\u{2E5D}'),
    ('\u{2E80}', '\u{2FDF}'),
    ('\u{3001}', '\u{3004}'),
    ('\u{3008}', '\u{3020}'),
    ('\u{3030}', '\u{3030}'),
    ('\u{303D}', '\u{303F}'),
    ('\u{30A0}', '\u{30A0}'),
    ('\u{30FB}', '\u{30FB}'),
    ('\u{A4FE}', '\u{A4FF}'),
    ('\u{A60D}', '\u{A60F}'),
    ('\u{FD3E}', '\u{FD3F}'),
    ('\u{FE10}', '\u{FE19}'),
    ('\u{FE30}', '\u{FE4F}'),
    ('\u{FE50}', '\u{FE6B}'),
    ('\u{FF01}', '\u{FF0F}'),
    ('\u{FF1A}', '\u{FF20}'),
    ('\u{FF3B}', '\u{FF40}'),
    ('\u{FF5B}', '\u{FF65}'),
    ('\u{FFE0}', '\u{FFEE}'),
    ('\u{1F300}', '\u{1FAFF}'),
];

// Combining marks that `char::is_alphabetic` accepts but are not letters
const ALPHABETIC_MARKS: &[(char, char)] = &[
    ('\u{0300}', '\u{036F}'),
    ('\u{0591}', '\u{05C7}'),
    ('\u{0610}', '\u{061A}'),
    ('\u{064B}', '\u{065F}'),
    ('\u{0670}', '\u{0670}'),
    ('\u{06D6}', '\u{06DC}'),
    ('\u{06DF}', '\u{06E4}'),
    ('\u{06E7}', '\u{06E8}'),
    ('\u{06EA}', '\u{06ED}'),
    ('\u{0900}', '\u{0903}'),
    ('\u{093A}', '\u{093C}'),
    ('\u{093E}', '\u{094F}'),
    ('\u{0955}', '\u{0957}'),
    ('\u{0962}', '\u{0963}'),
    ('\u{0981}', '\u{0983}'),
    ('\u{09BE}', '\u{09CC}'),
    ('\u{09D7}', '\u{09D7}'),
    ('\u{0E31}', '\u{0E31}'),
    ('\u{0E34}', '\u{0E3A}'),
    ('\u{0E47}', '\u{0E4E}'),
    ('\u{1AB0}', '\u{1AFF}'),
    ('\u{1DC0}', '\u{1DFF}'),
    ('\u{20D0}', '\u{20FF}'),
    ('\u{FE20}', '\u{FE2F}'),
];

// First digit of each run of ten decimal digits
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x11066, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC,
    0x1D7F6, 0x1E950, 0x1FBF0,
];

fn in_ranges(table: &[(char, char)], c: char) -> bool {
    table.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Letters proper, without letter-like numbers or combining marks
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric() && !in_ranges(ALPHABETIC_MARKS, c)
}

/// Decimal digits of any script; fractions, superscripts and other
/// numeric characters are excluded
pub fn is_decimal_digit(c: char) -> bool {
    let code = c as u32;
    DECIMAL_ZEROS
        .iter()
        .any(|&zero| (zero..zero + 10).contains(&code))
}

/// Letters, decimal digits, punctuation, symbols and the plain space render
/// literally inside a character literal
pub fn is_printable(c: char) -> bool {
    c == ' '
        || is_letter(c)
        || is_decimal_digit(c)
        || c.is_ascii_punctuation()
        || in_ranges(PUNCTUATION_AND_SYMBOLS, c)
}

pub fn is_line_ending(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Space separators plus the zero-width and tab characters treated as
/// whitespace when comparing strings
pub fn is_white_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{180E}'
            | '\u{2000}'..='\u{200B}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Index just past a single `\r\n`, `\r` or `\n` starting at `index`
pub fn skip_line_ending(chars: &[char], mut index: usize) -> usize {
    if chars.get(index) == Some(&'\r') {
        index += 1;
    }
    if chars.get(index) == Some(&'\n') {
        index += 1;
    }
    index
}

/// Index of the first non-whitespace character at or after `index`
pub fn skip_whitespace(chars: &[char], mut index: usize) -> usize {
    while chars.get(index).is_some_and(|&c| is_white_space(c)) {
        index += 1;
    }
    index
}
