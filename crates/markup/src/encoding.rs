//! Charset sniffing and byte decoding ahead of tokenization.
//!
//! The whole byte source is buffered first: a `<meta … charset=…>` hint can
//! appear anywhere, and switching encodings mid-stream is not supported, so
//! the scan must finish before the lexer sees a single character. Memory use
//! is therefore bounded by the input size; callers wanting a bound impose it
//! on the source.
//!
//! Decoding never fails. An unknown or misdeclared charset logs a warning
//! and falls back to lossy UTF-8.

use std::io::Read;

use encoding_rs::{Encoding, UTF_8};
use memchr::memchr;

use crate::error::ParseError;

/// Reads the whole byte source and decodes it, honoring a declared charset.
///
/// The only failure mode is an I/O error from the source itself.
pub fn decode_source(mut input: impl Read) -> Result<String, ParseError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    Ok(decode_bytes(&bytes))
}

/// Decodes a fully buffered document.
pub fn decode_bytes(bytes: &[u8]) -> String {
    let Some(label) = sniff_charset(bytes) else {
        return decode_utf8(bytes);
    };
    match Encoding::for_label(label.as_bytes()) {
        Some(encoding) if encoding != UTF_8 => {
            log::debug!(target: "markup.encoding", "re-decoding as declared charset {label:?}");
            let (text, _, _) = encoding.decode(bytes);
            text.into_owned()
        }
        Some(_) => decode_utf8(bytes),
        None => {
            log::warn!(
                target: "markup.encoding",
                "unknown declared charset {label:?}, falling back to utf-8"
            );
            decode_utf8(bytes)
        }
    }
}

fn decode_utf8(bytes: &[u8]) -> String {
    // Lossy: malformed sequences become replacement characters rather than
    // aborting the parse.
    let (text, _, _) = UTF_8.decode(bytes);
    text.into_owned()
}

fn starts_with_ignore_ascii_case_at(haystack: &[u8], start: usize, needle: &[u8]) -> bool {
    haystack.len() >= start + needle.len()
        && haystack[start..start + needle.len()].eq_ignore_ascii_case(needle)
}

/// Scans raw bytes for a `<meta … charset=…>` declaration.
///
/// Case-insensitive single forward pass. Covers both the HTML5 form
/// (`<meta charset=utf-8>`) and the legacy pragma form where `charset=`
/// appears inside a `content` value. The label may be bare or quoted.
pub fn sniff_charset(bytes: &[u8]) -> Option<String> {
    let mut i = 0;
    while let Some(rel) = memchr(b'<', &bytes[i..]) {
        let start = i + rel;
        if starts_with_ignore_ascii_case_at(bytes, start + 1, b"meta") {
            let end = memchr(b'>', &bytes[start..])
                .map(|r| start + r)
                .unwrap_or(bytes.len());
            if let Some(label) = charset_in_tag(&bytes[start..end]) {
                return Some(label);
            }
        }
        i = start + 1;
    }
    None
}

fn charset_in_tag(tag: &[u8]) -> Option<String> {
    const NEEDLE: &[u8] = b"charset";
    let mut i = 0;
    while i + NEEDLE.len() <= tag.len() {
        if !starts_with_ignore_ascii_case_at(tag, i, NEEDLE) {
            i += 1;
            continue;
        }
        let mut j = i + NEEDLE.len();
        while j < tag.len() && tag[j].is_ascii_whitespace() {
            j += 1;
        }
        if tag.get(j) != Some(&b'=') {
            i += 1;
            continue;
        }
        j += 1;
        while j < tag.len() && tag[j].is_ascii_whitespace() {
            j += 1;
        }
        let quote = tag
            .get(j)
            .copied()
            .filter(|&q| q == b'"' || q == b'\'');
        if quote.is_some() {
            j += 1;
        }
        let label_start = j;
        while j < tag.len() {
            let b = tag[j];
            let done = match quote {
                Some(q) => b == q,
                None => b.is_ascii_whitespace() || b == b'/' || b == b'"' || b == b'\'',
            };
            if done {
                break;
            }
            j += 1;
        }
        if j > label_start {
            return Some(String::from_utf8_lossy(&tag[label_start..j]).into_owned());
        }
        i += 1;
    }
    None
}
