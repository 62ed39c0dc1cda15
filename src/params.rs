//! Key-value parameters decomposed from a query or fragment.

use std::fmt;

use crate::constants::KEY_VALUE_SEPARATOR;
use crate::separator::ParameterSeparator;

/// Ordered key-value pairs from a query or fragment.
///
/// Pairs keep their original order and duplicates are preserved. A segment
/// without `=` has no value, which is distinct from an empty value
/// (`key=`). Nothing is percent-decoded.
///
/// # Examples
///
/// ```
/// use urlator::{ParameterSeparator, Parameters};
///
/// let params = Parameters::parse("name=ferret&flag&empty=", ParameterSeparator::Ampersand);
/// assert_eq!(params.get("name"), Some(Some("ferret")));
/// assert_eq!(params.get("flag"), Some(None));
/// assert_eq!(params.get("empty"), Some(Some("")));
/// assert_eq!(params.get("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameters {
    pairs: Vec<(String, Option<String>)>,
}

impl Parameters {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `input` on `separator`, then each segment on its first `=`.
    ///
    /// Empty segments are kept as an empty key with no value.
    #[must_use]
    pub fn parse(input: &str, separator: ParameterSeparator) -> Self {
        if input.is_empty() {
            return Self::new();
        }

        let pairs = input
            .split(separator.as_str())
            .map(|segment| match segment.split_once(KEY_VALUE_SEPARATOR) {
                Some((key, value)) => (key.to_string(), Some(value.to_string())),
                None => (segment.to_string(), None),
            })
            .collect();

        Self { pairs }
    }

    /// Returns the value of the first pair named `key`.
    ///
    /// The outer `Option` is `None` when the key is missing; the inner one
    /// is `None` when the key appeared without `=`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    /// Returns the values of every pair named `key`, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = Option<&'a str>> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    /// Returns true if any pair is named `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Returns true if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns an iterator over the pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    /// Renders the pairs joined by `separator`.
    #[must_use]
    pub fn to_string_with(&self, separator: ParameterSeparator) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push_str(separator.as_str());
            }
            out.push_str(key);
            if let Some(value) = value {
                out.push(KEY_VALUE_SEPARATOR);
                out.push_str(value);
            }
        }
        out
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(ParameterSeparator::default()))
    }
}

impl IntoIterator for Parameters {
    type Item = (String, Option<String>);
    type IntoIter = std::vec::IntoIter<(String, Option<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl FromIterator<(String, Option<String>)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (String, Option<String>)>>(iter: T) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMP: ParameterSeparator = ParameterSeparator::Ampersand;

    #[test]
    fn parse_empty() {
        let params = Parameters::parse("", AMP);
        assert!(params.is_empty());
    }

    #[test]
    fn parse_multiple_params_in_order() {
        let params = Parameters::parse("test=123&size=2", AMP);
        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("test", Some("123")), ("size", Some("2"))]);
    }

    #[test]
    fn parse_key_without_value() {
        let params = Parameters::parse("flag", AMP);
        assert_eq!(params.get("flag"), Some(None));
    }

    #[test]
    fn value_split_on_first_equals_only() {
        let params = Parameters::parse("expr=a=b", AMP);
        assert_eq!(params.get("expr"), Some(Some("a=b")));
    }

    #[test]
    fn empty_segments_are_preserved() {
        let params = Parameters::parse("a=1&&b", AMP);
        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("a", Some("1")), ("", None), ("b", None)]);
    }

    #[test]
    fn duplicates_are_kept() {
        let params = Parameters::parse("k=1&k=2", AMP);
        assert_eq!(params.get("k"), Some(Some("1")));
        assert_eq!(params.get_all("k").collect::<Vec<_>>(), vec![Some("1"), Some("2")]);
    }

    #[test]
    fn semicolon_separator() {
        let params = Parameters::parse("a=1;b=2&c=3", ParameterSeparator::Semicolon);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("b"), Some(Some("2&c=3")));
    }

    #[test]
    fn ampersand_does_not_split_on_semicolon() {
        let params = Parameters::parse("a=1;b=2", AMP);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a"), Some(Some("1;b=2")));
    }

    #[test]
    fn no_percent_decoding() {
        let params = Parameters::parse("name=%41%42", AMP);
        assert_eq!(params.get("name"), Some(Some("%41%42")));
    }

    #[test]
    fn display_preserves_order_and_bare_keys() {
        let params = Parameters::parse("z=1&flag&a=", AMP);
        assert_eq!(params.to_string(), "z=1&flag&a=");
        assert_eq!(
            params.to_string_with(ParameterSeparator::Semicolon),
            "z=1;flag;a="
        );
    }

    #[test]
    fn keys_and_contains() {
        let params = Parameters::parse("a=1&b", AMP);
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(params.contains_key("b"));
        assert!(!params.contains_key("c"));
    }
}
