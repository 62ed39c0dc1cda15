//! Error types for URI parsing.

use std::fmt;

/// Error returned by the `Result`-based parse entry points.
///
/// The plain [`ParsedUri::parse`](crate::ParsedUri::parse) never fails and
/// reports the same information through
/// [`ParsedUri::error`](crate::ParsedUri::error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The precondition that was violated
    pub kind: ParseErrorKind,
}

/// The structural precondition a URI violated.
///
/// Positions are byte offsets. Scheme, query and fragment positions are
/// relative to the whole input; authority positions are relative to the
/// hier-part (the text after the scheme terminator and any leading slashes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// No scheme terminator after the first character
    MissingScheme,
    /// The query separator appears before the scheme terminator
    QueryBeforeScheme {
        /// Position of the query separator
        position: usize,
    },
    /// The fragment separator appears before the scheme terminator
    FragmentBeforeScheme {
        /// Position of the fragment separator
        position: usize,
    },
    /// The fragment separator appears before the query separator
    FragmentBeforeQuery {
        /// Position of the fragment separator
        fragment: usize,
        /// Position of the query separator
        query: usize,
    },
    /// The user-info terminator appears after the port or path separator
    UserInfoOutOfOrder {
        /// Position of the user-info terminator
        position: usize,
    },
    /// The port separator appears after the path separator
    PortAfterPath {
        /// Position of the port separator
        port: usize,
        /// Position of the path separator
        path: usize,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingScheme => write!(f, "missing scheme; expected ':' after the first character"),
            Self::QueryBeforeScheme { position } => {
                write!(f, "query separator '?' at position {position} precedes the scheme")
            }
            Self::FragmentBeforeScheme { position } => {
                write!(f, "fragment separator '#' at position {position} precedes the scheme")
            }
            Self::FragmentBeforeQuery { fragment, query } => write!(
                f,
                "fragment separator '#' at position {fragment} precedes query separator '?' at position {query}"
            ),
            Self::UserInfoOutOfOrder { position } => write!(
                f,
                "user-info terminator '@' at position {position} follows the port or path"
            ),
            Self::PortAfterPath { port, path } => write!(
                f,
                "port separator ':' at position {port} follows path separator '/' at position {path}"
            ),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': {}", self.input, self.kind)
    }
}

impl std::error::Error for ParseError {}

/// Error for parsing a [`ParameterSeparator`](crate::ParameterSeparator) from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorError {
    /// The unrecognized input
    pub input: String,
}

impl fmt::Display for SeparatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown parameter separator '{}'; expected '&', ';', 'ampersand' or 'semicolon'",
            self.input
        )
    }
}

impl std::error::Error for SeparatorError {}
