use std::fmt;

/// Structural faults raised by tree mutation.
///
/// These indicate misuse of the tree API, not recoverable input conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomError {
    /// The insertion target is a text node, which cannot carry children.
    NotAnElement,
    /// The insertion would parent a node under itself or one of its own
    /// descendants.
    WouldCycle,
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::NotAnElement => write!(f, "text nodes cannot carry children"),
            DomError::WouldCycle => {
                write!(f, "node cannot become a child of itself or of its own descendant")
            }
        }
    }
}

impl std::error::Error for DomError {}
