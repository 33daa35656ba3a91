//! String Sanitizer and canonical string quoting.
//!
//! [`clean`] drops every code point that is not graphic (letters, marks,
//! numbers, punctuation, symbols and space separators), keeping `\n` and `\t`.
//! Raw control characters such as U+0002 would otherwise reach the quoting
//! step. [`quote`] then renders the cleaned text as a JSON string literal with
//! HTML-sensitive characters (`<`, `>`, `&`) written as `\u` escapes and
//! non-printable spaces (e.g. U+00A0) escaped as well.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Remove non-graphic code points, preserving newline and horizontal tab.
pub fn clean(s: &str) -> String {
    s.chars()
        .filter(|&c| c == '\n' || c == '\t' || is_graphic(c))
        .collect()
}

/// Whether `c` belongs to a graphic Unicode category (L, M, N, P, S, Zs).
pub fn is_graphic(c: char) -> bool {
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Graphic, with U+0020 as the only space separator.
fn is_printable(c: char) -> bool {
    c == ' '
        || (is_graphic(c) && !matches!(get_general_category(c), GeneralCategory::SpaceSeparator))
}

/// Render `s` as a JSON string literal, including the surrounding quotes.
///
/// The output is always valid JSON. It does not clean `s` first; callers
/// encoding a String wrapper pass the result of [`clean`].
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' | '>' | '&' => push_unicode_escape(ch, &mut out),
            c if is_printable(c) => out.push(c),
            c => push_unicode_escape(c, &mut out),
        }
    }
    out.push('"');
    out
}

/// Emit `\uXXXX` escapes (lowercase hex), as a surrogate pair above U+FFFF.
fn push_unicode_escape(c: char, out: &mut String) {
    let mut units = [0u16; 2];
    for unit in c.encode_utf16(&mut units) {
        out.push_str(&format!("\\u{:04x}", unit));
    }
}
