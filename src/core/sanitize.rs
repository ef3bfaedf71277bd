use std::borrow::Cow;

#[inline]
const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

// Visible US-ASCII minus the CSP delimiters ',' and ';', plus space and tab.
#[inline]
const fn is_value_char(c: char) -> bool {
    matches!(c, ' ' | '\t') || (c as u32 >= 0x21 && c as u32 <= 0x7e && c != ',' && c != ';')
}

/// Replaces every line-break sequence (CR, LF, CRLF, or another Unicode line
/// terminator) with a single space. Borrows when the input has none.
pub fn strip_line_breaks(raw: &str) -> Cow<'_, str> {
    if !raw.chars().any(is_line_break) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            // CRLF counts as one sequence
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push(' ');
        } else if is_line_break(c) {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Sanitizes a raw directive source for use in a header value: line breaks
/// become single spaces, then every character outside the directive-value
/// grammar is dropped. Total and idempotent; never rejects input.
pub fn sanitize_directive_value(raw: &str) -> Cow<'_, str> {
    let stripped = strip_line_breaks(raw);
    if stripped.chars().all(is_value_char) {
        return stripped;
    }

    Cow::Owned(stripped.chars().filter(|c| is_value_char(*c)).collect())
}
