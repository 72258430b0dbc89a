//! Error types for intent URL construction.

use std::fmt;

/// Errors that can occur when building or parsing an intent URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentError {
    /// Text exceeds the maximum length
    TextTooLong {
        /// Maximum allowed length in characters
        max: usize,
        /// Actual length in characters
        actual: usize,
    },
    /// More embeds than a cast can carry
    TooManyEmbeds {
        /// Maximum allowed embeds
        max: usize,
        /// Actual embed count
        actual: usize,
    },
    /// An embed is not an absolute http/https URL
    InvalidEmbedUrl {
        /// Index of the embed in the request
        index: usize,
        /// The rejected value
        url: String,
        /// Reason for invalidity
        reason: EmbedError,
    },
    /// A cast hash does not match `0x` followed by 40 hex digits
    InvalidHashFormat {
        /// The rejected value
        hash: String,
        /// Reason for invalidity
        reason: CastHashError,
    },
    /// Input is not a composer intent URL
    NotComposerUrl {
        /// The rejected input
        url: String,
    },
    /// A required query parameter is missing
    MissingParameter {
        /// Name of the missing parameter
        name: &'static str,
    },
}

impl fmt::Display for IntentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextTooLong { max, actual } => {
                write!(f, "text is {actual} characters, maximum is {max}")
            }
            Self::TooManyEmbeds { max, actual } => {
                write!(f, "{actual} embeds supplied, Warpcast supports at most {max}")
            }
            Self::InvalidEmbedUrl { index, url, reason } => {
                write!(f, "invalid embed '{url}' at index {index}: {reason}")
            }
            Self::InvalidHashFormat { hash, reason } => {
                write!(f, "invalid cast hash '{hash}': {reason}")
            }
            Self::NotComposerUrl { url } => {
                write!(f, "'{url}' is not a Warpcast composer intent URL")
            }
            Self::MissingParameter { name } => {
                write!(f, "missing required parameter: {name}")
            }
        }
    }
}

impl std::error::Error for IntentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEmbedUrl { reason, .. } => Some(reason),
            Self::InvalidHashFormat { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Errors for embed URL validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    /// Embed is empty
    Empty,
    /// Whitespace or control character in the embed
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Embed does not parse as an absolute URL
    NotAbsolute(url::ParseError),
    /// Embed scheme is not http or https
    UnsupportedScheme {
        /// The scheme that was found
        scheme: String,
    },
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "embed cannot be empty"),
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "invalid character {char:?} at position {position}; whitespace and control characters must be percent-encoded"
                )
            }
            Self::NotAbsolute(e) => write!(f, "not an absolute URL ({e})"),
            Self::UnsupportedScheme { scheme } => {
                write!(f, "scheme '{scheme}' is not allowed; use http or https")
            }
        }
    }
}

impl std::error::Error for EmbedError {}

/// Errors for cast hash validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastHashError {
    /// Hash is empty
    Empty,
    /// Hash does not start with `0x`
    MissingPrefix,
    /// Hash has the wrong number of hex digits
    WrongLength {
        /// Expected number of hex digits
        expected: usize,
        /// Actual number of characters after the prefix
        actual: usize,
    },
    /// Non-hex character after the prefix
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for CastHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "hash cannot be empty"),
            Self::MissingPrefix => write!(f, "hash must start with '0x'"),
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {expected} hex digits after '0x', found {actual}")
            }
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position}; only hex digits allowed"
                )
            }
        }
    }
}

impl std::error::Error for CastHashError {}
