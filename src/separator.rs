//! Separator between key-value pairs in queries and fragments.

use std::fmt;
use std::str::FromStr;

use crate::error::SeparatorError;

/// Token placed between key-value pairs of a query or fragment.
///
/// The same value drives both decomposition by the parser and
/// [`UriBuilder::add_query_parameter`](crate::UriBuilder::add_query_parameter).
///
/// # Examples
///
/// ```
/// use urlator::{ParameterSeparator, ParsedUri};
///
/// let uri = ParsedUri::parse_with("http://example.com/?a=1;b=2", ParameterSeparator::Semicolon);
/// assert_eq!(uri.query_parameters().len(), 2);
/// assert_eq!(ParameterSeparator::default().as_str(), "&");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParameterSeparator {
    /// `&`
    #[default]
    Ampersand,
    /// `;`
    Semicolon,
}

impl ParameterSeparator {
    /// Returns the separator token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ampersand => "&",
            Self::Semicolon => ";",
        }
    }

    /// Returns the separator as a character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Ampersand => '&',
            Self::Semicolon => ';',
        }
    }
}

impl fmt::Display for ParameterSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterSeparator {
    type Err = SeparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "&" || s.eq_ignore_ascii_case("ampersand") {
            Ok(Self::Ampersand)
        } else if s == ";" || s.eq_ignore_ascii_case("semicolon") {
            Ok(Self::Semicolon)
        } else {
            Err(SeparatorError {
                input: s.to_string(),
            })
        }
    }
}
