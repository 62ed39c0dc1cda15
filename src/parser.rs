//! A URI string paired with its parsed components.

use std::fmt;

use crate::error::ParseError;
use crate::separator::ParameterSeparator;
use crate::uri::ParsedUri;

/// Owns a URI string and keeps its [`ParsedUri`] in step with it.
///
/// Parsing happens eagerly: on construction, and again whenever the
/// source text or the parameter separator is reassigned.
///
/// # Examples
///
/// ```
/// use urlator::{ParameterSeparator, UriParser};
///
/// let mut parser = UriParser::new("http://example.com/?a=1;b=2");
/// assert_eq!(parser.parsed().query_parameters().len(), 1);
///
/// parser.set_separator(ParameterSeparator::Semicolon);
/// assert_eq!(parser.parsed().query_parameters().len(), 2);
///
/// parser.set_uri("not a uri");
/// assert!(!parser.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParser {
    source: String,
    separator: ParameterSeparator,
    parsed: ParsedUri,
}

impl UriParser {
    /// Parses `uri`, splitting parameters on `&`.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self::with_separator(uri, ParameterSeparator::default())
    }

    /// Parses `uri`, splitting parameters on `separator`.
    #[must_use]
    pub fn with_separator(uri: impl Into<String>, separator: ParameterSeparator) -> Self {
        let source = uri.into();
        let parsed = ParsedUri::parse_with(&source, separator);
        Self {
            source,
            separator,
            parsed,
        }
    }

    /// Returns true if `uri` parses as a valid URI.
    #[must_use]
    pub fn validate(uri: &str) -> bool {
        ParsedUri::parse(uri).is_valid()
    }

    /// Replaces the source text and re-parses it.
    pub fn set_uri(&mut self, uri: impl Into<String>) {
        self.source = uri.into();
        self.reparse();
    }

    /// Replaces the parameter separator and re-parses the source text.
    pub fn set_separator(&mut self, separator: ParameterSeparator) {
        self.separator = separator;
        self.reparse();
    }

    /// Returns the source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the parameter separator.
    #[must_use]
    pub const fn separator(&self) -> ParameterSeparator {
        self.separator
    }

    /// Returns the components of the source text.
    #[must_use]
    pub const fn parsed(&self) -> &ParsedUri {
        &self.parsed
    }

    /// Consumes the parser, returning the parsed components.
    #[must_use]
    pub fn into_parsed(self) -> ParsedUri {
        self.parsed
    }

    /// Returns true if the source text is a valid URI.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.parsed.is_valid()
    }

    /// Returns the parse error for the source text, if it is invalid.
    #[must_use]
    pub fn error(&self) -> Option<ParseError> {
        self.parsed.error().map(|kind| ParseError {
            input: self.source.clone(),
            kind,
        })
    }

    fn reparse(&mut self) {
        self.parsed = ParsedUri::parse_with(&self.source, self.separator);
    }
}

impl fmt::Display for UriParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl AsRef<str> for UriParser {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

impl From<&str> for UriParser {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for UriParser {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UriParser {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.source)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UriParser {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let parser = Self::new(s);
        match parser.error() {
            Some(err) => Err(serde::de::Error::custom(err)),
            None => Ok(parser),
        }
    }
}
