//! Ordered query string for intent URLs.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters gets percent-encoded.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Query parameters of an intent URL.
///
/// Keeps parameters in insertion order and allows repeated names, since
/// Warpcast reads embeds from repeated `embeds[]` parameters. Names are
/// written as-is; values are percent-encoded.
///
/// # Examples
///
/// ```
/// use warpcast_intents::IntentQuery;
///
/// let mut query = IntentQuery::new();
/// query.append("text", "Hello World!");
/// query.append("embeds[]", "https://a.xyz");
/// assert_eq!(query.to_string(), "text=Hello%20World%21&embeds[]=https%3A%2F%2Fa.xyz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntentQuery {
    params: Vec<(String, String)>,
}

impl IntentQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string (without leading '?').
    ///
    /// Decoding follows `application/x-www-form-urlencoded`: `+` is a space and
    /// malformed escapes are kept literally.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let params = url::form_urlencoded::parse(input.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { params }
    }

    /// Appends a parameter after all existing ones.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push((name.into(), value.into()));
    }

    /// Returns the first value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the last value for a parameter, if present.
    #[must_use]
    pub fn get_last(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for a parameter in order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns true if the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for IntentQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{name}={}", utf8_percent_encode(value, QUERY_VALUE))?;
        }
        Ok(())
    }
}

impl FromStr for IntentQuery {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_displays_nothing() {
        assert_eq!(IntentQuery::new().to_string(), "");
    }

    #[test]
    fn keeps_insertion_order() {
        let mut query = IntentQuery::new();
        query.append("z", "1");
        query.append("a", "2");
        assert_eq!(query.to_string(), "z=1&a=2");
    }

    #[test]
    fn repeated_names_are_kept() {
        let mut query = IntentQuery::new();
        query.append("embeds[]", "one");
        query.append("embeds[]", "two");
        assert_eq!(query.len(), 2);
        assert_eq!(query.get_all("embeds[]"), vec!["one", "two"]);
        assert_eq!(query.get("embeds[]"), Some("one"));
        assert_eq!(query.get_last("embeds[]"), Some("two"));
    }

    #[test]
    fn encodes_reserved_and_unicode() {
        let mut query = IntentQuery::new();
        query.append("text", "a+b&c=d 🎲~");
        assert_eq!(query.to_string(), "text=a%2Bb%26c%3Dd%20%F0%9F%8E%B2~");
    }

    #[test]
    fn parse_decodes_percent_and_plus() {
        let query = IntentQuery::parse("text=Hello+World%21&channelKey=testinprod");
        assert_eq!(query.get("text"), Some("Hello World!"));
        assert_eq!(query.get("channelKey"), Some("testinprod"));
    }

    #[test]
    fn parse_decodes_bracketed_names() {
        let query = IntentQuery::parse("embeds%5B%5D=a&embeds[]=b");
        assert_eq!(query.get_all("embeds[]"), vec!["a", "b"]);
    }

    #[test]
    fn parse_param_without_value() {
        let query = IntentQuery::parse("flag");
        assert_eq!(query.get("flag"), Some(""));
    }

    #[test]
    fn display_then_parse_recovers_values() {
        let mut query = IntentQuery::new();
        query.append("text", "hello fam! @ispeaknerd.eth 🎲 100% + more");
        let parsed = IntentQuery::parse(&query.to_string());
        assert_eq!(parsed, query);
    }

    #[test]
    fn iter_returns_all_params() {
        let query = IntentQuery::parse("a=1&b=2");
        let items: Vec<_> = query.iter().collect();
        assert_eq!(items, vec![("a", "1"), ("b", "2")]);
    }
}
