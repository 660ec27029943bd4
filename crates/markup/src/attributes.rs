//! Raw attribute text → ordered attribute list.
//!
//! Tokens are whitespace-delimited, but a quoted span is read through its
//! matching quote even when it contains whitespace. Each token splits on the
//! first `=`: no `=` makes a boolean attribute, a quoted value loses exactly
//! one layer of matching quotes, anything else is stored literally.

use dom::AttrList;

/// Parses everything after the element name into attributes.
pub fn parse_attributes(raw: &str) -> AttrList {
    let mut attrs = AttrList::new();
    let mut chars = raw.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut token = String::new();
        while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
            token.push(c);
            if c == '"' || c == '\'' {
                // quoted span: whitespace inside does not end the token
                for q in chars.by_ref() {
                    token.push(q);
                    if q == c {
                        break;
                    }
                }
            }
        }
        if token.is_empty() {
            return attrs;
        }

        match token.split_once('=') {
            None => attrs.set(token, None),
            Some((key, value)) => {
                let value = unquote(value).to_string();
                attrs.set(key.to_string(), Some(value));
            }
        }
    }
}

/// Strips exactly one layer of matching `"…"` or `'…'` quoting.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &value[1..value.len() - 1];
        }
    }
    value
}
