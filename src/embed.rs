//! Embed type for link previews attached to a cast.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use url::Url;

use crate::error::EmbedError;

/// Schemes an embed may use.
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// A validated embed: an absolute URL with an `http` or `https` scheme.
///
/// The caller's string is kept exactly as given, not the normalized form
/// produced by the URL parser, so it survives a round trip unchanged.
/// Whitespace and control characters are rejected, since the URL parser
/// would silently strip them from the value that is checked but not from
/// the value that is sent.
///
/// # Examples
///
/// ```
/// use warpcast_intents::Embed;
///
/// let embed = Embed::parse("https://events.xyz/events/2223b818").unwrap();
/// assert_eq!(embed.as_str(), "https://events.xyz/events/2223b818");
///
/// assert!(Embed::parse("ftp://example.com/file").is_err());
/// assert!(Embed::parse("/relative/path").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Embed {
    raw: String,
    url: Url,
}

impl Embed {
    /// Parses an embed URL.
    ///
    /// # Errors
    ///
    /// Returns `EmbedError` if:
    /// - The input is empty
    /// - The input contains ASCII whitespace or control characters
    /// - The input is not an absolute URL
    /// - The scheme is anything other than `http` or `https`
    pub fn parse(input: &str) -> Result<Self, EmbedError> {
        if input.is_empty() {
            return Err(EmbedError::Empty);
        }

        for (i, c) in input.chars().enumerate() {
            if c.is_ascii_whitespace() || c.is_ascii_control() {
                return Err(EmbedError::InvalidChar { char: c, position: i });
            }
        }

        let url = Url::parse(input).map_err(EmbedError::NotAbsolute)?;
        if !ALLOWED_SCHEMES.contains(&url.scheme()) {
            return Err(EmbedError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
            });
        }

        Ok(Self {
            raw: input.to_string(),
            url,
        })
    }

    /// Returns the embed as given by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed, normalized URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Embed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Embed {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Embed {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl TryFrom<&str> for Embed {
    type Error = EmbedError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Deref for Embed {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

impl PartialOrd for Embed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Embed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Embed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Embed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
