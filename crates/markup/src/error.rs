use std::fmt;
use std::io;

/// Terminal failure of a `parse` call.
///
/// Mismatched closing tags are deliberately absent here: they are handled by
/// the recovery policy in the tree builder and never surface as errors.
#[derive(Debug)]
pub enum ParseError {
    /// Reading the byte source failed; carries the originating cause.
    Io(io::Error),
    /// Empty, all-whitespace, or element-free input.
    NoContent,
    /// A tag with a blank element name.
    EmptyTag,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(cause) => write!(f, "failed to read content: {cause}"),
            ParseError::NoContent => write!(f, "failed to parse content"),
            ParseError::EmptyTag => write!(f, "encountered empty tag"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(cause) => Some(cause),
            ParseError::NoContent | ParseError::EmptyTag => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(cause: io::Error) -> Self {
        ParseError::Io(cause)
    }
}
