// Mon Jan 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReflectError {
    #[error("Type mismatch reading member {member}: expected {expected}")]
    TypeMismatch {
        member: &'static str,
        expected: &'static str,
    },
    #[error("Member not readable: {0}")]
    NotReadable(&'static str),
    #[error("Index {index} out of range for member {member}")]
    IndexOutOfRange { member: &'static str, index: usize },
    #[error("Value unavailable: {0} is exclusively borrowed")]
    Unavailable(&'static str),
    #[error("Getter for {member} failed: {reason}")]
    Getter { member: &'static str, reason: String },
    #[error("Maximum traversal depth {0} exceeded")]
    DepthExceeded(usize),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failure of a graph visit: either the callback or the graph walk itself.
#[derive(Error, Debug)]
pub enum VisitError<E> {
    #[error("Visitor callback failed: {0}")]
    Callback(E),
    #[error(transparent)]
    Graph(#[from] ReflectError),
}

impl<E> VisitError<E> {
    pub fn into_callback(self) -> Option<E> {
        match self {
            Self::Callback(e) => Some(e),
            Self::Graph(_) => None,
        }
    }
}
