//! Classification of raw `<…>` spans.

use crate::error::ParseError;

/// A classified tag span, name and attribute text still raw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagToken {
    /// `<name …>` — opens an element that expects a closing tag.
    Opening { name: String, raw_attrs: String },
    /// `<name … />` — a complete, childless element.
    SelfClosing { name: String, raw_attrs: String },
    /// `</name>` — closes the innermost open element (or, on a mismatch,
    /// several of them; see the tree builder).
    Closing { name: String },
    /// `<!…>` — content is discarded, only its span matters.
    Comment,
}

/// Classifies the text between `<` and `>` (exclusive).
///
/// A blank element name is fatal for the enclosing parse.
pub fn classify(raw: &str) -> Result<TagToken, ParseError> {
    let token = raw.trim_start();

    if let Some(rest) = token.strip_prefix('/') {
        let name = rest.trim();
        if name.is_empty() {
            return Err(ParseError::EmptyTag);
        }
        return Ok(TagToken::Closing {
            name: name.to_string(),
        });
    }

    if token.starts_with('!') {
        return Ok(TagToken::Comment);
    }

    let mut body = token.trim_end();
    let mut self_closing = false;
    if let Some(stripped) = body.strip_suffix('/') {
        // trailing whitespace before the slash is insignificant
        body = stripped.trim_end();
        self_closing = true;
    }

    // The name is the leading run of letters and digits; everything after
    // the first whitespace is raw attribute text.
    let name_end = body
        .char_indices()
        .find(|&(_, c)| !c.is_alphanumeric())
        .map_or(body.len(), |(i, _)| i);
    let name = &body[..name_end];
    if name.is_empty() {
        return Err(ParseError::EmptyTag);
    }
    let raw_attrs = body[name_end..].trim_start().to_string();

    if self_closing {
        Ok(TagToken::SelfClosing {
            name: name.to_string(),
            raw_attrs,
        })
    } else {
        Ok(TagToken::Opening {
            name: name.to_string(),
            raw_attrs,
        })
    }
}
