//! Constants for Warpcast intent URL construction.

/// Base URL of the cast composer intent.
pub const COMPOSER_BASE_URL: &str = "https://warpcast.com/~/compose";

/// Base URL of a profile page, followed by `/<fid>`.
pub const PROFILE_BASE_URL: &str = "https://warpcast.com/~/profiles";

/// Base URL of a conversation page, followed by `/<hash>`.
pub const CONVERSATION_BASE_URL: &str = "https://warpcast.com/~/conversations";

/// Maximum text length in characters.
pub const MAX_TEXT_LENGTH: usize = 1024;

/// Text longer than this is truncated in summary views.
pub const TRUNCATION_THRESHOLD: usize = 320;

/// Maximum number of embeds on a single cast.
pub const MAX_EMBEDS: usize = 2;

/// Prefix of every cast hash.
pub const CAST_HASH_PREFIX: &str = "0x";

/// Number of hex digits following the prefix.
pub const CAST_HASH_HEX_DIGITS: usize = 40;

/// Total cast hash length (prefix + hex digits).
pub const CAST_HASH_LENGTH: usize = 42;
