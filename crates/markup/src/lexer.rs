//! Quote-aware splitting of the character stream into text runs and tag
//! spans.
//!
//! Two states: in text, accumulate until `<`; in a tag, accumulate until the
//! matching `>`, except that a `"`- or `'`-delimited run is copied verbatim
//! (quotes included) so an embedded `>` cannot terminate the span early.
//! Quotes are passed through, not interpreted; the attribute parser strips
//! them later.
//!
//! Tolerance: a span cut off by stream exhaustion instead of `>` is still
//! delivered.

use crate::cursor::Cursor;

/// Reads a text run up to (not including) the next `<`.
///
/// May be empty. The `<` is pushed back for [`read_tag`].
pub fn read_text(cursor: &mut Cursor) -> String {
    let mut out = String::new();
    while let Some(c) = cursor.read() {
        if c == '<' {
            cursor.unread();
            break;
        }
        out.push(c);
    }
    out
}

/// Reads one `<…>` span and returns the raw text between the brackets,
/// exclusive. Returns `None` at end of input.
pub fn read_tag(cursor: &mut Cursor) -> Option<String> {
    let opener = cursor.read()?;
    debug_assert_eq!(opener, '<', "read_tag called off a tag boundary");

    let mut out = String::new();
    while let Some(c) = cursor.read() {
        match c {
            '>' => return Some(out),
            '"' | '\'' => {
                out.push(c);
                // verbatim copy through the matching quote; an unterminated
                // quote runs to end of input
                while let Some(q) = cursor.read() {
                    out.push(q);
                    if q == c {
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }
    Some(out)
}
