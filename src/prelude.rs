//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use urlator::prelude::*;
//!
//! let uri = ParsedUri::parse("foo://example.com:8042/over/there?name=ferret#nose");
//! let builder = UriBuilder::from_parsed(&uri).separator(ParameterSeparator::Semicolon);
//! ```
//!
//! Delimiter constants are left out; import them from the crate root.

pub use crate::{
    // Core types
    Parameters, ParsedUri, UriParser,
    // Builder
    ParameterSeparator, UriBuilder,
    // Errors
    ParseError, ParseErrorKind, SeparatorError,
    // Functions and scheme names
    schemes, validate,
};
