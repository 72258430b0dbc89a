//! Cast hash type for reply targets and conversation links.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::constants::{CAST_HASH_HEX_DIGITS, CAST_HASH_PREFIX};
use crate::error::CastHashError;

/// A validated cast hash: `0x` followed by exactly 40 hex digits.
///
/// Hex digits may be upper or lower case. The original casing is kept.
///
/// # Examples
///
/// ```
/// use warpcast_intents::CastHash;
///
/// let hash = CastHash::parse("0x6c48f6fa5060edf19af7ec9fad5028b0ba2e7a3c").unwrap();
/// assert_eq!(hash.hex_digits(), "6c48f6fa5060edf19af7ec9fad5028b0ba2e7a3c");
///
/// assert!(CastHash::parse("0x123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CastHash(String);

impl CastHash {
    /// Parses a cast hash.
    ///
    /// # Errors
    ///
    /// Returns `CastHashError` if:
    /// - The input is empty
    /// - The input does not start with `0x`
    /// - The body is not exactly 40 characters
    /// - The body contains a non-hex character
    pub fn parse(input: &str) -> Result<Self, CastHashError> {
        if input.is_empty() {
            return Err(CastHashError::Empty);
        }

        let Some(body) = input.strip_prefix(CAST_HASH_PREFIX) else {
            return Err(CastHashError::MissingPrefix);
        };

        let actual = body.chars().count();
        if actual != CAST_HASH_HEX_DIGITS {
            return Err(CastHashError::WrongLength {
                expected: CAST_HASH_HEX_DIGITS,
                actual,
            });
        }

        for (i, c) in body.chars().enumerate() {
            if !c.is_ascii_hexdigit() {
                return Err(CastHashError::InvalidChar {
                    char: c,
                    position: i + CAST_HASH_PREFIX.len(),
                });
            }
        }

        Ok(Self(input.to_string()))
    }

    /// Returns the full hash including the `0x` prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 40 hex digits without the prefix.
    #[must_use]
    pub fn hex_digits(&self) -> &str {
        &self.0[CAST_HASH_PREFIX.len()..]
    }

    /// Returns true if `input` is a well-formed cast hash.
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }
}

impl fmt::Display for CastHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CastHash {
    type Err = CastHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CastHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CastHash {
    type Error = CastHashError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Deref for CastHash {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialOrd for CastHash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CastHash {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CastHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CastHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
