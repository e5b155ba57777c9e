use std::fmt;
use std::io;

/// All errors this parser can fail with.
///
/// Every variant is fatal to the parse that raised it: the lexer stops
/// consuming input, the element stream yields the error once and then ends.
/// There is no resynchronization.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Error {
    /// A named character entity was terminated with `;` but is not one of the
    /// five predefined XML entities.
    UnresolvedEntity {
        /// The entity name as written, without `&` and `;`.
        entity: String,
    },
    /// An attribute or text event arrived while no element was open, or an
    /// attribute value arrived while no attribute was open.
    NoOpenElement,
    /// A close tag arrived while no element was open.
    UnbalancedClose,
    /// A close tag did not match the most recently opened element.
    MismatchedClose {
        /// The name of the element that is actually open.
        expected: String,
        /// The name the close tag carried.
        found: String,
    },
}

impl Error {
    /// Return the stable `kebap-case` error code for this error.
    ///
    /// The code identifies the kind of error without its context fields, which
    /// makes it suitable for matching in tests and log processing.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match *self {
            Error::UnresolvedEntity { .. } => "unresolved-entity",
            Error::NoOpenElement => "no-open-element",
            Error::UnbalancedClose => "unbalanced-close",
            Error::MismatchedClose { .. } => "mismatched-close",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::UnresolvedEntity { ref entity } => {
                write!(f, "unresolved-entity: &{};", entity)
            }
            Error::MismatchedClose {
                ref expected,
                ref found,
            } => {
                write!(f, "mismatched-close: expected </{}>, found </{}>", expected, found)
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

impl std::error::Error for Error {}

/// An error produced while driving a parse over a `std::io::Read` input.
///
/// This is what [`crate::ElementStream`] yields: either the input failed or
/// the document is malformed.
#[derive(Debug)]
pub enum StreamError {
    /// The underlying reader failed, or its bytes were not valid UTF-8.
    Io(io::Error),
    /// The document is malformed.
    Parse(Error),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            StreamError::Io(ref e) => write!(f, "read failed: {}", e),
            StreamError::Parse(ref e) => e.fmt(f),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            StreamError::Io(ref e) => Some(e),
            StreamError::Parse(ref e) => Some(e),
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

impl From<Error> for StreamError {
    fn from(e: Error) -> Self {
        StreamError::Parse(e)
    }
}
